use std::sync::{Arc, Mutex};

use visionflow_contact::{ContactSubmission, DiscoveryChannel, Service};
use visionflow_notification::{
    EmailConfig, EmailMessage, EmailSender, SubmissionHandler, contact::CompanyConfig,
};

/// Records every message and fails the call numbers listed in `fail_on` (1-based).
#[derive(Default)]
pub struct RecordingSender {
    pub sent: Mutex<Vec<EmailMessage>>,
    pub fail_on: Vec<usize>,
}

impl RecordingSender {
    pub fn failing_on(calls: &[usize]) -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::default(),
            fail_on: calls.to_vec(),
        })
    }

    pub fn messages(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl EmailSender for RecordingSender {
    async fn send(&self, message: &EmailMessage) -> anyhow::Result<()> {
        let call = {
            let mut sent = self.sent.lock().unwrap();
            sent.push(message.clone());
            sent.len()
        };

        if self.fail_on.contains(&call) {
            anyhow::bail!("provider rejected call {call}");
        }

        Ok(())
    }
}

pub fn email_config() -> EmailConfig {
    EmailConfig {
        smtp_host: "localhost".to_owned(),
        smtp_port: 1025,
        smtp_username: String::new(),
        smtp_password: String::new(),
        from_address: "onboarding@visionflowtech.com".to_owned(),
        contact_address: "contact@visionflowtech.com".to_owned(),
    }
}

pub fn company() -> CompanyConfig {
    CompanyConfig {
        name: "Vision Flow Technologies".to_owned(),
        tagline: "Innovative Solutions for the Digital Era".to_owned(),
        phone: "+91 9731070591".to_owned(),
        email: "contact@visionflowtech.com".to_owned(),
    }
}

pub fn handler(sender: Arc<RecordingSender>) -> SubmissionHandler {
    SubmissionHandler::new(sender, &email_config(), company())
}

pub fn asha() -> ContactSubmission {
    ContactSubmission {
        first_name: "Asha".to_owned(),
        last_name: "Rao".to_owned(),
        company: "Acme".to_owned(),
        discovered_via: Some(DiscoveryChannel::LinkedIn),
        service_needed: Some(Service::WebsiteDesign),
        email: "asha@example.com".to_owned(),
        project_description: "Need a new site".to_owned(),
        privacy_agreed: true,
    }
}
