//! Email notification service using lettre

use lettre::{
    Message, SmtpTransport, Transport, message::MultiPart,
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

use crate::{EmailMessage, EmailSender};

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    pub from_address: String,
    pub contact_address: String,
}

/// Email service for sending notifications
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address,
                "Email service initialized with authentication and TLS"
            );

            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self { mailer })
    }
}

#[async_trait::async_trait]
impl EmailSender for EmailService {
    #[tracing::instrument(skip_all, fields(to = %message.to, subject = %message.subject))]
    async fn send(&self, message: &EmailMessage) -> anyhow::Result<()> {
        tracing::info!("Sending email");

        let email = Message::builder()
            .from(message.from.parse()?)
            .to(message.to.parse()?)
            .subject(message.subject.clone())
            .multipart(MultiPart::alternative_plain_html(
                message.plain.clone(),
                message.html.clone(),
            ))?;

        // SmtpTransport blocks on the network.
        let mailer = self.mailer.clone();
        tokio::task::spawn_blocking(move || mailer.send(&email)).await??;

        Ok(())
    }
}
