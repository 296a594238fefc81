use validator::Validate;

use crate::{
    entities::contact::{ContactMessage, ContactSubmission},
    errors::ApiError,
    infrastructure::{
        email::Mailer,
        security::{is_honeypot_triggered, is_submission_too_fast},
    },
};

/// What became of a submission that was not an error.
///
/// A submission flagged by the bot gates is deliberately reported to the
/// client exactly like an accepted one, so automated senders learn nothing
/// from the response. The distinction only exists server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    SuspectedBot,
}

pub struct ContactHandler<M>
where
    M: Mailer,
{
    pub mailer: M,
}

impl<M> ContactHandler<M>
where
    M: Mailer,
{
    pub fn new(mailer: M) -> Self {
        ContactHandler { mailer }
    }

    /// Runs a submission through the bot gates, the schema validator, and
    /// finally the mailer. Rate limiting has already happened at the HTTP
    /// boundary; gate order past that point is fixed so a rejected request
    /// never receives a more specific reason than it should.
    pub async fn submit_contact(
        &self,
        submission: ContactSubmission,
    ) -> Result<SubmissionOutcome, ApiError> {
        let honeypot_hit = is_honeypot_triggered(submission.honeypot.as_deref());
        let too_fast = submission.form_load_time.is_some_and(is_submission_too_fast);
        if honeypot_hit || too_fast {
            // Do not log which gate fired alongside anything an attacker
            // could correlate with their own requests.
            tracing::warn!("discarding contact submission flagged as automated");
            return Ok(SubmissionOutcome::SuspectedBot);
        }

        submission.validate()?;

        let message = ContactMessage::from(submission);
        self.mailer.send_contact_email(&message).await?;

        Ok(SubmissionOutcome::Accepted)
    }
}
