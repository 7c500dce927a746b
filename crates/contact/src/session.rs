//! Event-driven driver for one [`Wizard`].
//!
//! Events are handled one at a time on a single task. Picking an option
//! schedules an [`AutoAdvance`] that posts back into the same loop, and a
//! submission runs on its own task while the wizard stays in the
//! submitting state.

use std::sync::Arc;

use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
};

use crate::{
    AUTO_ADVANCE_DELAY, AutoAdvance, Choice, ContactSubmission, Field, SubmitOutcome, Wizard,
};

/// Hands a complete submission to whatever dispatches it.
#[async_trait::async_trait]
pub trait Submitter: Send + Sync + 'static {
    async fn submit(&self, submission: ContactSubmission) -> SubmitOutcome;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WizardEvent {
    SetField(Field, String),
    SetPrivacyAgreed(bool),
    Advance,
    Retreat,
    Select(Choice),
    Submit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WizardSnapshot {
    pub step: u8,
    pub progress: u8,
    pub submitting: bool,
    pub submission: ContactSubmission,
    pub can_advance: bool,
    pub can_retreat: bool,
    pub can_submit: bool,
    /// Notice from the last finished submission.
    pub notice: Option<&'static str>,
}

impl WizardSnapshot {
    fn new(wizard: &Wizard, notice: Option<&'static str>) -> Self {
        Self {
            step: wizard.step(),
            progress: wizard.progress(),
            submitting: wizard.is_submitting(),
            submission: wizard.submission().clone(),
            can_advance: wizard.can_advance(),
            can_retreat: wizard.can_retreat(),
            can_submit: wizard.can_submit(),
            notice,
        }
    }
}

enum Internal {
    AutoAdvance(u64),
    Submitted(SubmitOutcome),
}

pub struct WizardSession {
    wizard: Wizard,
    submitter: Arc<dyn Submitter>,
    internal: mpsc::UnboundedSender<Internal>,
    state: watch::Sender<WizardSnapshot>,
    pending: Option<AutoAdvance>,
    next_timer: u64,
    notice: Option<&'static str>,
}

/// Owner side of a running session. Dropping it ends the session and
/// cancels any pending auto-advance.
pub struct WizardHandle {
    events: mpsc::Sender<WizardEvent>,
    state: watch::Receiver<WizardSnapshot>,
    task: JoinHandle<()>,
}

impl WizardSession {
    pub fn spawn(submitter: Arc<dyn Submitter>) -> WizardHandle {
        let wizard = Wizard::new();
        let (events_tx, events_rx) = mpsc::channel(32);
        let (internal_tx, internal_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(WizardSnapshot::new(&wizard, None));

        let session = WizardSession {
            wizard,
            submitter,
            internal: internal_tx,
            state: state_tx,
            pending: None,
            next_timer: 0,
            notice: None,
        };

        let task = tokio::spawn(session.run(events_rx, internal_rx));

        WizardHandle {
            events: events_tx,
            state: state_rx,
            task,
        }
    }

    async fn run(
        mut self,
        mut events: mpsc::Receiver<WizardEvent>,
        mut internal: mpsc::UnboundedReceiver<Internal>,
    ) {
        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => self.handle(event),
                    None => break,
                },
                Some(message) = internal.recv() => self.handle_internal(message),
            }

            self.state
                .send_replace(WizardSnapshot::new(&self.wizard, self.notice));
        }

        tracing::debug!(step = self.wizard.step(), "Wizard session closed");
    }

    fn handle(&mut self, event: WizardEvent) {
        match event {
            WizardEvent::SetField(field, value) => {
                if let Err(err) = self.wizard.set_field(field, value) {
                    tracing::warn!(field = %field, error = %err, "Ignoring unknown option");
                }
            }
            WizardEvent::SetPrivacyAgreed(agreed) => self.wizard.set_privacy_agreed(agreed),
            WizardEvent::Advance => {
                self.pending = None;
                self.wizard.advance();
            }
            WizardEvent::Retreat => {
                self.pending = None;
                self.wizard.retreat();
            }
            WizardEvent::Select(choice) => {
                if self.wizard.select(choice) {
                    self.schedule_auto_advance();
                }
            }
            WizardEvent::Submit => self.submit(),
        }
    }

    fn handle_internal(&mut self, internal: Internal) {
        match internal {
            Internal::AutoAdvance(id) => {
                if self.pending.as_ref().is_some_and(|timer| timer.id() == id) {
                    self.pending = None;
                    self.wizard.advance();
                }
            }
            Internal::Submitted(outcome) => {
                self.notice = Some(self.wizard.finish_submit(outcome));
            }
        }
    }

    fn schedule_auto_advance(&mut self) {
        self.next_timer += 1;
        let internal = self.internal.clone();

        self.pending = Some(AutoAdvance::schedule(
            self.next_timer,
            AUTO_ADVANCE_DELAY,
            move |id| {
                let _ = internal.send(Internal::AutoAdvance(id));
            },
        ));
    }

    fn submit(&mut self) {
        let Some(submission) = self.wizard.begin_submit() else {
            return;
        };

        self.pending = None;
        self.notice = None;

        let submitter = self.submitter.clone();
        let internal = self.internal.clone();

        tokio::spawn(async move {
            let outcome = submitter.submit(submission).await;
            let _ = internal.send(Internal::Submitted(outcome));
        });
    }
}

impl WizardHandle {
    /// Queues an event. Returns false once the session is gone.
    pub async fn send(&self, event: WizardEvent) -> bool {
        self.events.send(event).await.is_ok()
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        self.state.borrow().clone()
    }

    /// Another view on the published state. It keeps the last snapshot
    /// after the session ends.
    pub fn subscribe(&self) -> watch::Receiver<WizardSnapshot> {
        self.state.clone()
    }

    /// Waits until the published state satisfies `f`.
    pub async fn wait_for(
        &mut self,
        f: impl FnMut(&WizardSnapshot) -> bool,
    ) -> Option<WizardSnapshot> {
        self.state.wait_for(f).await.ok().map(|state| state.clone())
    }

    /// Ends the session and waits for its task to finish.
    pub async fn close(self) {
        let WizardHandle { events, task, .. } = self;
        drop(events);
        let _ = task.await;
    }
}
