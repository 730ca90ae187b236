use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts the contact field as a string, a bare number (phone numbers do
/// show up that way) or null
pub fn deserialize_contact<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        _ => Err(Error::custom("contact must be a string, a number or null")),
    }
}

/// Treats `""` the same as a missing field.
///
/// The backend sends empty strings where it means "nothing to say", and the
/// outcome priority (`error` before `message` before data) must skip them.
pub fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
