use std::borrow::Cow;

use serde::Serialize;
use validator::ValidationError;

use crate::constants::{MESSAGE_LIMITS, NAME_LIMITS};

/// The contact form field a rejection is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// A single field-tagged rejection from the lightweight validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRejection {
    pub field: ContactField,
    pub error: String,
}

impl FieldRejection {
    fn new(field: ContactField, error: String) -> Self {
        FieldRejection { field, error }
    }
}

/// Validates a contact submission without any schema machinery.
///
/// Fields are checked in fixed order (name, email, message) and the first
/// failure wins. Absent fields behave like empty strings, so they surface the
/// same field-level messages a too-short value would.
pub fn validate_contact_form(
    name: Option<&str>,
    email: Option<&str>,
    message: Option<&str>,
) -> Result<(), FieldRejection> {
    if let Some(error) = name_issue(name.unwrap_or_default()) {
        return Err(FieldRejection::new(ContactField::Name, error));
    }
    if let Some(error) = email_issue(email.unwrap_or_default()) {
        return Err(FieldRejection::new(ContactField::Email, error));
    }
    if let Some(error) = message_issue(message.unwrap_or_default()) {
        return Err(FieldRejection::new(ContactField::Message, error));
    }
    Ok(())
}

// ───── Per-field checks, shared by both validation layers ───────────

/// Length bounds apply first; the control-character check only runs once the
/// length is acceptable, so its message never shadows a length message.
pub(crate) fn name_issue(value: &str) -> Option<String> {
    let name = value.trim();
    let len = name.chars().count();
    if len < NAME_LIMITS.min {
        return Some(format!(
            "Name must be at least {} characters",
            NAME_LIMITS.min
        ));
    }
    if len > NAME_LIMITS.max {
        return Some(format!(
            "Name must be less than {} characters",
            NAME_LIMITS.max
        ));
    }
    if name.contains(['\r', '\n']) {
        return Some("Invalid name".to_string());
    }
    None
}

/// Every email failure collapses to one message. Embedded line breaks are
/// rejected even when the rest of the address parses, closing the header
/// injection vector.
pub(crate) fn email_issue(value: &str) -> Option<String> {
    let email = value.trim();
    if email.is_empty() || email.contains(['\r', '\n']) || !is_email_shaped(email) {
        return Some("Invalid email address".to_string());
    }
    None
}

pub(crate) fn message_issue(value: &str) -> Option<String> {
    let message = value.trim();
    let len = message.chars().count();
    if len < MESSAGE_LIMITS.min {
        return Some(format!(
            "Message must be at least {} characters",
            MESSAGE_LIMITS.min
        ));
    }
    if len > MESSAGE_LIMITS.max {
        return Some(format!(
            "Message must be less than {} characters",
            MESSAGE_LIMITS.max
        ));
    }
    None
}

/// `local@domain.tld` shape: a non-blank local part, one `@`, a domain with
/// at least one dot and a non-empty label on each side. Deliverability is the
/// provider's problem, not ours.
fn is_email_shaped(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if email.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

// ───── Schema-layer adapters ────────────────────────────────────────
// Custom validators wired into the `Validate` derive on `ContactSubmission`.
// They delegate to the checks above, so the schema layer reports the same
// messages and thresholds as the lightweight validator.

pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    match name_issue(value) {
        Some(message) => Err(new_validation_error("name", message)),
        None => Ok(()),
    }
}

pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    match email_issue(value) {
        Some(message) => Err(new_validation_error("email", message)),
        None => Ok(()),
    }
}

pub fn validate_message(value: &str) -> Result<(), ValidationError> {
    match message_issue(value) {
        Some(message) => Err(new_validation_error("message", message)),
        None => Ok(()),
    }
}

fn new_validation_error(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Owned(message));
    err
}
