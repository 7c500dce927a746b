use std::str::FromStr;

use visionflow_shared::contact::{DiscoveryChannel, Service};

use crate::{ContactSubmission, Field, StepDescriptor, TOTAL_STEPS};

pub const SUCCESS_NOTICE: &str =
    "Thank you! Your message has been sent successfully. Check your email for confirmation.";
pub const FAILURE_NOTICE: &str =
    "Sorry, there was an error sending your message. Please try again or contact us directly.";

/// An option chip picked on step 3 or 4.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    Discovery(DiscoveryChannel),
    Service(Service),
}

impl Choice {
    pub fn field(&self) -> Field {
        match self {
            Choice::Discovery(_) => Field::DiscoveredVia,
            Choice::Service(_) => Field::ServiceNeeded,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Choice::Discovery(v) => v.into(),
            Choice::Service(v) => v.into(),
        }
    }
}

/// Parses the `field:Label` value carried by option buttons.
impl FromStr for Choice {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, label) = s.split_once(':').ok_or(strum::ParseError::VariantNotFound)?;

        match Field::from_str(field)? {
            Field::DiscoveredVia => Ok(Choice::Discovery(DiscoveryChannel::from_str(label)?)),
            Field::ServiceNeeded => Ok(Choice::Service(Service::from_str(label)?)),
            _ => Err(strum::ParseError::VariantNotFound),
        }
    }
}

/// Aggregate result reported by the submission handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    Failed,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Delivered)
    }

    /// The notification shown to the visitor.
    pub fn notice(&self) -> &'static str {
        match self {
            SubmitOutcome::Delivered => SUCCESS_NOTICE,
            SubmitOutcome::Failed => FAILURE_NOTICE,
        }
    }
}

/// Step state of the multi-step contact form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wizard {
    step: u8,
    submitting: bool,
    submission: ContactSubmission,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: 1,
            submitting: false,
            submission: ContactSubmission::default(),
        }
    }

    /// Rebuilds a wizard from state that round-tripped through a form post.
    pub fn restore(step: u8, submission: ContactSubmission) -> Self {
        Self {
            step: step.clamp(1, TOTAL_STEPS),
            submitting: false,
            submission,
        }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn descriptor(&self) -> &'static StepDescriptor {
        StepDescriptor::get(self.step)
    }

    pub fn submission(&self) -> &ContactSubmission {
        &self.submission
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Progress bar value in percent.
    pub fn progress(&self) -> u8 {
        (self.step as u16 * 100 / TOTAL_STEPS as u16) as u8
    }

    pub fn can_advance(&self) -> bool {
        !self.submitting
            && self.step < TOTAL_STEPS
            && self
                .descriptor()
                .required
                .iter()
                .all(|field| self.submission.is_filled(*field))
    }

    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }

        self.step += 1;
        true
    }

    pub fn can_retreat(&self) -> bool {
        !self.submitting && self.step > 1
    }

    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }

        self.step -= 1;
        true
    }

    pub fn set_field(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), strum::ParseError> {
        if self.submitting {
            return Ok(());
        }

        self.submission.set(field, value)
    }

    pub fn set_privacy_agreed(&mut self, agreed: bool) {
        if !self.submitting {
            self.submission.privacy_agreed = agreed;
        }
    }

    /// Records an option pick. Returns true when the pick was made on the
    /// current step and the caller should schedule an auto-advance.
    pub fn select(&mut self, choice: Choice) -> bool {
        let Some(owner) = StepDescriptor::owning(choice.field()) else {
            return false;
        };

        if self.submitting || owner.number > self.step {
            return false;
        }

        match choice {
            Choice::Discovery(v) => self.submission.discovered_via = Some(v),
            Choice::Service(v) => self.submission.service_needed = Some(v),
        }

        owner.number == self.step
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && self.descriptor().is_last() && self.submission.is_dispatchable()
    }

    /// Marks the wizard as submitting and hands out the data to dispatch.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if !self.can_submit() {
            return None;
        }

        self.submitting = true;
        Some(self.submission.clone())
    }

    /// Applies the handler result: reset on success, keep everything on failure.
    pub fn finish_submit(&mut self, outcome: SubmitOutcome) -> &'static str {
        self.submitting = false;

        if outcome.is_success() {
            self.step = 1;
            self.submission = ContactSubmission::default();
        }

        outcome.notice()
    }
}
