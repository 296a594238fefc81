use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::domain::validation::{validate_email, validate_message, validate_name};

/// An inbound contact form submission, including the anti-abuse metadata the
/// frontend attaches. Unknown fields are rejected outright so automated
/// senders cannot smuggle extra payload through.
///
/// The visible fields default to empty strings when absent, which routes a
/// missing field through the field validator (and its field-tagged message)
/// instead of failing body deserialization.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ContactSubmission {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(custom(function = "validate_email"))]
    pub email: String,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(custom(function = "validate_message"))]
    pub message: String,

    /// Hidden form field; real users never populate it.
    #[serde(default)]
    pub honeypot: Option<String>,

    /// Epoch milliseconds at which the form was rendered.
    #[serde(default, rename = "formLoadTime")]
    pub form_load_time: Option<i64>,
}

/// The validated payload handed to the mailer, stripped of anti-abuse
/// metadata.
#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<ContactSubmission> for ContactMessage {
    fn from(submission: ContactSubmission) -> Self {
        ContactMessage {
            name: submission.name,
            email: submission.email,
            message: submission.message,
        }
    }
}

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(|value| value.trim().to_string())
}
