use ammonia::clean_text;
use chrono::{DateTime, SecondsFormat, Utc};

use crate::entities::contact::ContactMessage;

/// Plain-text body for a contact notification email.
pub fn contact_email_text(message: &ContactMessage, submitted_at: DateTime<Utc>) -> String {
    format!(
        "New Contact Form Submission\n\n\
         Name: {}\n\
         Email: {}\n\n\
         Message:\n{}\n\n\
         ---\n\
         Submitted at: {}",
        message.name,
        message.email,
        message.message,
        submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}

/// HTML body for a contact notification email.
///
/// Every user-controlled value is escaped before interpolation; the message
/// body additionally keeps its line breaks.
pub fn contact_email_html(message: &ContactMessage, submitted_at: DateTime<Utc>) -> String {
    let name = clean_text(&message.name);
    let email = clean_text(&message.email);
    let body = clean_text(&message.message).replace('\n', "<br>");
    let timestamp = submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true);

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="UTF-8"></head>
<body style="font-family: sans-serif; color: #333;">
  <h2>New Contact Form Submission</h2>
  <p><strong>Name</strong><br>{name}</p>
  <p><strong>Email</strong><br><a href="mailto:{email}">{email}</a></p>
  <p><strong>Message</strong></p>
  <blockquote style="border-left: 4px solid #667eea; margin: 0; padding: 8px 16px; background: #f9fafb;">{body}</blockquote>
  <hr>
  <p style="font-size: 12px; color: #888;">Submitted at: {timestamp}</p>
</body>
</html>"#
    )
}
