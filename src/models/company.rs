use std::fmt;

use serde::{Deserialize, Serialize};

/// Shown in place of a missing contact field
pub const UNKNOWN_CONTACT: &str = "Onbekend";

/// Company identifier as the backend sends it: a number or a string.
///
/// Serializes back in the same JSON type so the contact endpoint receives
/// exactly what the search endpoint handed out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompanyId {
    Number(i64),
    Text(String),
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompanyId::Number(n) => write!(f, "{}", n),
            CompanyId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CompanyId {
    fn from(value: i64) -> Self {
        CompanyId::Number(value)
    }
}

impl From<&str> for CompanyId {
    fn from(value: &str) -> Self {
        CompanyId::Text(value.to_string())
    }
}

impl CompanyId {
    /// Parse a CLI argument: all-digit input becomes a number, anything else text
    pub fn parse_arg(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(n) => CompanyId::Number(n),
            Err(_) => CompanyId::Text(trimmed.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    #[serde(
        default,
        deserialize_with = "crate::models::deserializers::deserialize_contact",
        skip_serializing_if = "Option::is_none"
    )]
    pub contact: Option<String>,
}

impl Company {
    pub fn new(id: impl Into<CompanyId>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), contact: None }
    }

    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(contact.into());
        self
    }

    /// The contact value if the backend actually knows one
    pub fn known_contact(&self) -> Option<&str> {
        self.contact
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("unknown"))
    }

    /// Contact text for display, falling back to [`UNKNOWN_CONTACT`]
    pub fn display_contact(&self) -> &str {
        self.known_contact().unwrap_or(UNKNOWN_CONTACT)
    }
}
