use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use tokio::sync::Notify;
use visionflow_contact::{
    ContactSubmission, DiscoveryChannel, Field, Service, SubmitOutcome, Submitter, WizardEvent,
    WizardHandle,
};

/// Submitter that counts calls and answers with a fixed outcome once released.
pub struct FakeSubmitter {
    pub calls: AtomicUsize,
    pub outcome: SubmitOutcome,
    pub gate: Option<Arc<Notify>>,
}

impl FakeSubmitter {
    pub fn new(outcome: SubmitOutcome) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            outcome,
            gate: None,
        })
    }

    #[allow(dead_code)]
    pub fn gated(outcome: SubmitOutcome, gate: Arc<Notify>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            outcome,
            gate: Some(gate),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Submitter for FakeSubmitter {
    async fn submit(&self, _submission: ContactSubmission) -> SubmitOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        self.outcome
    }
}

/// Drives a fresh session to step 6 with every field filled.
#[allow(dead_code)]
pub async fn fill_to_last_step(handle: &mut WizardHandle) {
    let events = [
        WizardEvent::SetField(Field::FirstName, "Asha".to_owned()),
        WizardEvent::SetField(Field::LastName, "Rao".to_owned()),
        WizardEvent::Advance,
        WizardEvent::SetField(Field::Company, "Acme".to_owned()),
        WizardEvent::Advance,
        WizardEvent::SetField(Field::DiscoveredVia, DiscoveryChannel::LinkedIn.to_string()),
        WizardEvent::Advance,
        WizardEvent::SetField(Field::ServiceNeeded, Service::WebsiteDesign.to_string()),
        WizardEvent::Advance,
        WizardEvent::SetField(Field::Email, "asha@example.com".to_owned()),
        WizardEvent::Advance,
        WizardEvent::SetField(Field::ProjectDescription, "Need a new site".to_owned()),
    ];

    for event in events {
        assert!(handle.send(event).await);
    }

    handle
        .wait_for(|s| s.step == 6 && !s.submission.project_description.is_empty())
        .await
        .expect("session alive");
}
