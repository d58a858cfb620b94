use anyhow::Result;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use std::env;

use crate::models::feedback::Feedback;

/// SMTP-backed notification sender.
///
/// Configured entirely from the environment so deployments can point it at a
/// relay without touching application config. `SMTP_SKIP_SEND=true` turns
/// every send into a no-op for local development and tests.
pub struct EmailService {
    mailer: SmtpTransport,
    from_address: String,
    feedback_recipient: String,
}

impl EmailService {
    pub fn new() -> Result<Self> {
        let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let smtp_port = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse::<u16>()
            .unwrap_or(587);
        let smtp_username = env::var("SMTP_USERNAME").unwrap_or_default();
        let smtp_password = env::var("SMTP_PASSWORD").unwrap_or_default();
        let from_address =
            env::var("SMTP_FROM_ADDRESS").unwrap_or_else(|_| "noreply@laxdb.local".to_string());
        let feedback_recipient = env::var("FEEDBACK_RECIPIENT")
            .unwrap_or_else(|_| "feedback@laxdb.local".to_string());

        let mailer = if smtp_username.is_empty() {
            SmtpTransport::builder_dangerous(&smtp_host)
                .port(smtp_port)
                .build()
        } else {
            let creds = Credentials::new(smtp_username, smtp_password);
            SmtpTransport::relay(&smtp_host)?
                .port(smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            from_address,
            feedback_recipient,
        })
    }

    /// Notifies the product team about a new feedback entry. Called as a
    /// post-commit effect, so the referenced row is already durable.
    pub fn send_feedback_notification(&self, feedback: &Feedback) -> Result<()> {
        if env::var("SMTP_SKIP_SEND").unwrap_or_default() == "true" {
            return Ok(());
        }

        let body = format!(
            r#"New feedback received.

Topic: {}
Rating: {}

{}

Submitted by: {}
Feedback id: {}
"#,
            feedback.topic,
            feedback.rating,
            feedback.feedback,
            feedback
                .user_email
                .as_deref()
                .unwrap_or("anonymous"),
            feedback.id,
        );

        let email = Message::builder()
            .from(self.from_address.parse()?)
            .to(self.feedback_recipient.parse()?)
            .subject(format!("[LaxDB] Feedback: {}", feedback.topic))
            .header(ContentType::TEXT_PLAIN)
            .body(body)?;

        self.mailer.send(&email)?;
        Ok(())
    }
}
