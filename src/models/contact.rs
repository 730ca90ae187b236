use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::company::CompanyId;

/// Outreach channel, serialized with its wire name (`whatsapp`, `contact_form`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactMethod {
    Email,
    #[default]
    Whatsapp,
    Call,
    Sms,
    Linkedin,
    Twitter,
    Telegram,
    ContactForm,
    LiveChat,
}

impl ContactMethod {
    /// All methods in picker order
    pub const ALL: [ContactMethod; 9] = [
        ContactMethod::Email,
        ContactMethod::Whatsapp,
        ContactMethod::Call,
        ContactMethod::Sms,
        ContactMethod::Linkedin,
        ContactMethod::Twitter,
        ContactMethod::Telegram,
        ContactMethod::ContactForm,
        ContactMethod::LiveChat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactMethod::Email => "email",
            ContactMethod::Whatsapp => "whatsapp",
            ContactMethod::Call => "call",
            ContactMethod::Sms => "sms",
            ContactMethod::Linkedin => "linkedin",
            ContactMethod::Twitter => "twitter",
            ContactMethod::Telegram => "telegram",
            ContactMethod::ContactForm => "contact_form",
            ContactMethod::LiveChat => "live_chat",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactMethod::Email => "E-mail",
            ContactMethod::Whatsapp => "WhatsApp",
            ContactMethod::Call => "Bellen",
            ContactMethod::Sms => "SMS",
            ContactMethod::Linkedin => "LinkedIn",
            ContactMethod::Twitter => "Twitter",
            ContactMethod::Telegram => "Telegram",
            ContactMethod::ContactForm => "Contactformulier",
            ContactMethod::LiveChat => "Live Chat",
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|m| m == self).unwrap_or(0)
    }

    /// Next method in picker order, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous method in picker order, wrapping around
    pub fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}

impl fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown contact method '{0}' (expected one of: email, whatsapp, call, sms, linkedin, twitter, telegram, contact_form, live_chat)")]
pub struct ParseContactMethodError(pub String);

impl FromStr for ContactMethod {
    type Err = ParseContactMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == wanted)
            .ok_or_else(|| ParseContactMethodError(s.to_string()))
    }
}

/// One outreach attempt, as posted to the contact endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub company_id: CompanyId,
    pub contact_method: ContactMethod,
}

impl ContactRequest {
    pub fn new(company_id: CompanyId, contact_method: ContactMethod) -> Self {
        Self { company_id, contact_method }
    }
}
