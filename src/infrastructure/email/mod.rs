use async_trait::async_trait;
use derive_more::Display;

use crate::entities::contact::ContactMessage;

pub mod resend;
pub mod templates;

pub use resend::ResendMailer;

/// Outbound email delivery, the one fallible collaborator the submission
/// pipeline depends on. A single attempt, no retries; failures surface to
/// the caller immediately.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_contact_email(&self, message: &ContactMessage) -> Result<(), MailError>;
}

#[derive(Debug, Display)]
pub enum MailError {
    #[display("Email request failed: {_0}")]
    Transport(String),

    #[display("Email provider returned {status}: {detail}")]
    Provider { status: u16, detail: String },
}

impl From<reqwest::Error> for MailError {
    fn from(err: reqwest::Error) -> Self {
        MailError::Transport(err.to_string())
    }
}
