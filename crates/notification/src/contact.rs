use std::sync::Arc;

use anyhow::Context;
use askama::Template;
use serde::Deserialize;
use time::OffsetDateTime;
use visionflow_contact::{ContactSubmission, SubmitOutcome, Submitter};

use crate::{EmailConfig, EmailMessage, EmailSender};

/// Business details printed in the confirmation sent to visitors.
#[derive(Debug, Deserialize, Clone)]
pub struct CompanyConfig {
    pub name: String,
    pub tagline: String,
    pub phone: String,
    pub email: String,
}

#[derive(Template)]
#[template(path = "contact-notification.html")]
pub struct NotificationHtmlTemplate<'a> {
    pub submission: &'a ContactSubmission,
    pub company: &'a CompanyConfig,
}

#[derive(Template)]
#[template(path = "contact-notification.txt")]
pub struct NotificationPlainTemplate<'a> {
    pub submission: &'a ContactSubmission,
    pub company: &'a CompanyConfig,
}

#[derive(Template)]
#[template(path = "contact-confirmation.html")]
pub struct ConfirmationHtmlTemplate<'a> {
    pub submission: &'a ContactSubmission,
    pub company: &'a CompanyConfig,
    pub year: i32,
}

#[derive(Template)]
#[template(path = "contact-confirmation.txt")]
pub struct ConfirmationPlainTemplate<'a> {
    pub submission: &'a ContactSubmission,
    pub company: &'a CompanyConfig,
    pub year: i32,
}

/// Turns a finished contact form into the business notification and the
/// visitor confirmation, then sends them in that order.
#[derive(Clone)]
pub struct SubmissionHandler {
    sender: Arc<dyn EmailSender>,
    from: String,
    business_address: String,
    company: CompanyConfig,
}

impl SubmissionHandler {
    pub fn new(sender: Arc<dyn EmailSender>, email: &EmailConfig, company: CompanyConfig) -> Self {
        Self {
            sender,
            from: email.from_address.to_owned(),
            business_address: email.contact_address.to_owned(),
            company,
        }
    }

    pub fn notification(&self, submission: &ContactSubmission) -> anyhow::Result<EmailMessage> {
        let html = NotificationHtmlTemplate {
            submission,
            company: &self.company,
        }
        .render()
        .context("Failed to render notification HTML template")?;

        let plain = NotificationPlainTemplate {
            submission,
            company: &self.company,
        }
        .render()
        .context("Failed to render notification plain text template")?;

        Ok(EmailMessage {
            from: self.from.to_owned(),
            to: self.business_address.to_owned(),
            subject: format!(
                "New Contact Form Submission from {} {}",
                submission.first_name, submission.last_name
            ),
            html,
            plain,
        })
    }

    pub fn confirmation(&self, submission: &ContactSubmission) -> anyhow::Result<EmailMessage> {
        let year = OffsetDateTime::now_utc().year();

        let html = ConfirmationHtmlTemplate {
            submission,
            company: &self.company,
            year,
        }
        .render()
        .context("Failed to render confirmation HTML template")?;

        let plain = ConfirmationPlainTemplate {
            submission,
            company: &self.company,
            year,
        }
        .render()
        .context("Failed to render confirmation plain text template")?;

        Ok(EmailMessage {
            from: self.from.to_owned(),
            to: submission.email.to_owned(),
            subject: format!("Thank you for contacting {}", self.company.name),
            html,
            plain,
        })
    }

    /// Never fails: every error is logged here and reported as `Failed`.
    #[tracing::instrument(skip_all, fields(email = %submission.email))]
    pub async fn handle(&self, submission: &ContactSubmission) -> SubmitOutcome {
        match self.dispatch(submission).await {
            Ok(()) => {
                tracing::info!("Contact emails sent");
                SubmitOutcome::Delivered
            }
            Err(err) => {
                tracing::error!(error = ?err, "Error sending contact emails");
                SubmitOutcome::Failed
            }
        }
    }

    async fn dispatch(&self, submission: &ContactSubmission) -> anyhow::Result<()> {
        let notification = self.notification(submission)?;
        let confirmation = self.confirmation(submission)?;

        self.sender
            .send(&notification)
            .await
            .context("business notification")?;

        self.sender
            .send(&confirmation)
            .await
            .context("visitor confirmation")?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl Submitter for SubmissionHandler {
    async fn submit(&self, submission: ContactSubmission) -> SubmitOutcome {
        self.handle(&submission).await
    }
}
