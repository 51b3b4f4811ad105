use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Deserialize,
    Serialize,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FieldRole {
    Name,
    Email,
    Phone,
    Message,
}

impl FieldRole {
    /// Message attached when the field loses focus with an invalid value.
    pub fn blur_message(&self) -> &'static str {
        match self {
            FieldRole::Name => "Please enter a valid name (at least 2 characters)",
            FieldRole::Email => "Please enter a valid email address",
            FieldRole::Phone => "Please enter a valid 10-digit Indian phone number",
            FieldRole::Message => "Message must be at least 10 characters long",
        }
    }

    /// Message attached by full-form validation at submit time.
    pub fn submit_message(&self) -> &'static str {
        match self {
            FieldRole::Name => "Please enter a valid name",
            FieldRole::Email => "Please enter a valid email address",
            FieldRole::Phone => "Please enter a valid 10-digit phone number",
            FieldRole::Message => "Message must be at least 10 characters long",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
    pub timestamp: String,
}

impl SubmissionRecord {
    pub fn stamped(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        service: impl Into<String>,
        message: impl Into<String>,
    ) -> crate::Result<Self> {
        Ok(Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            service: service.into(),
            message: message.into(),
            timestamp: OffsetDateTime::now_utc().format(&Rfc3339)?,
        })
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
