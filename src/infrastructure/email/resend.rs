use async_trait::async_trait;
use chrono::Utc;
use zeroize::Zeroizing;

use crate::{
    entities::contact::ContactMessage,
    infrastructure::email::{MailError, Mailer, templates},
    settings::AppConfig,
};

const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Delivers contact notifications through the Resend HTTP API.
pub struct ResendMailer {
    http: reqwest::Client,
    api_key: Zeroizing<String>,
    sender: String,
    recipient: String,
}

impl ResendMailer {
    pub fn new(config: &AppConfig) -> Self {
        ResendMailer {
            http: reqwest::Client::new(),
            api_key: Zeroizing::new(config.resend_api_key.clone()),
            sender: config.contact_sender.clone(),
            recipient: config.contact_recipient.clone(),
        }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send_contact_email(&self, message: &ContactMessage) -> Result<(), MailError> {
        let submitted_at = Utc::now();
        let payload = serde_json::json!({
            "from": self.sender,
            "to": [self.recipient],
            "reply_to": message.email,
            "subject": format!("Contact Form: {}", message.name),
            "html": templates::contact_email_html(message, submitted_at),
            "text": templates::contact_email_text(message, submitted_at),
        });

        let response = self
            .http
            .post(RESEND_API_URL)
            .bearer_auth(self.api_key.as_str())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(MailError::Provider {
                status: status.as_u16(),
                detail,
            });
        }

        tracing::info!("contact email delivered");
        Ok(())
    }
}
