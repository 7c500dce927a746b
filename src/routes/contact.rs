use std::str::FromStr;

use axum::{
    extract::{Form, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use strum::VariantArray;
use visionflow_contact::{
    AUTO_ADVANCE_DELAY, Choice, ContactSubmission, DiscoveryChannel, Field, Service,
    SubmitOutcome, TOTAL_STEPS, Wizard,
};
use visionflow_notification::contact::CompanyConfig;

use crate::{
    routes::AppState,
    template::{Template, Toast},
};

/// One option chip; `value` is what the button posts as `choice`.
pub struct OptionView {
    pub value: String,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate<'a> {
    pub company: &'a CompanyConfig,
    pub step: u8,
    pub total_steps: u8,
    pub progress: u8,
    pub submission: &'a ContactSubmission,
    pub can_retreat: bool,
    pub is_last: bool,
    pub can_submit: bool,
    pub discovery_options: Vec<OptionView>,
    pub service_options: Vec<OptionView>,
    pub auto_advance_ms: Option<u128>,
    pub toast: Option<Toast>,
}

impl<'a> ContactTemplate<'a> {
    pub fn new(company: &'a CompanyConfig, wizard: &'a Wizard) -> Self {
        let submission = wizard.submission();

        Self {
            company,
            step: wizard.step(),
            total_steps: TOTAL_STEPS,
            progress: wizard.progress(),
            submission,
            can_retreat: wizard.can_retreat(),
            is_last: wizard.descriptor().is_last(),
            can_submit: wizard.can_submit(),
            discovery_options: DiscoveryChannel::VARIANTS
                .iter()
                .map(|v| option_view(Choice::Discovery(*v), submission.discovered_via == Some(*v)))
                .collect(),
            service_options: Service::VARIANTS
                .iter()
                .map(|v| option_view(Choice::Service(*v), submission.service_needed == Some(*v)))
                .collect(),
            auto_advance_ms: None,
            toast: None,
        }
    }
}

fn option_view(choice: Choice, selected: bool) -> OptionView {
    OptionView {
        value: format!("{}:{}", choice.field(), choice.label()),
        label: choice.label(),
        selected,
    }
}

pub async fn page(template: Template) -> impl IntoResponse {
    let wizard = Wizard::new();
    template.render(ContactTemplate::new(&template.company, &wizard))
}

#[derive(Deserialize, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WizardAction {
    Advance,
    Retreat,
    Submit,
    #[default]
    Update,
}

/// The whole wizard state as carried by the posted form.
#[derive(Deserialize, Default, Debug)]
#[serde(default)]
pub struct WizardForm {
    pub step: u8,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub discovered_via: String,
    pub service_needed: String,
    pub email: String,
    pub project_description: String,
    pub privacy_agreed: Option<String>,
    pub action: WizardAction,
    pub choice: Option<String>,
}

impl WizardForm {
    fn restore(self) -> Wizard {
        let mut submission = ContactSubmission::default();
        let values = [
            (Field::FirstName, self.first_name),
            (Field::LastName, self.last_name),
            (Field::Company, self.company),
            (Field::DiscoveredVia, self.discovered_via),
            (Field::ServiceNeeded, self.service_needed),
            (Field::Email, self.email),
            (Field::ProjectDescription, self.project_description),
        ];

        for (field, value) in values {
            if let Err(err) = submission.set(field, value) {
                tracing::warn!(field = %field, error = %err, "Ignoring unknown option");
            }
        }

        submission.privacy_agreed = self.privacy_agreed.is_some();

        Wizard::restore(self.step, submission)
    }
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(mut input): Form<WizardForm>,
) -> Response {
    let action = input.action;
    let choice = input.choice.take();
    let mut wizard = input.restore();
    let mut auto_advance = false;
    let mut toast = None;

    match action {
        WizardAction::Advance => {
            wizard.advance();
        }
        WizardAction::Retreat => {
            wizard.retreat();
        }
        WizardAction::Update => {
            if let Some(choice) = choice {
                match Choice::from_str(&choice) {
                    Ok(choice) => auto_advance = wizard.select(choice),
                    Err(err) => tracing::warn!(choice = %choice, error = %err, "Ignoring unknown choice"),
                }
            }
        }
        WizardAction::Submit => {
            if let Some(submission) = wizard.begin_submit() {
                let outcome = match submission.verify() {
                    Ok(()) => app_state.submission.handle(&submission).await,
                    Err(err) => {
                        tracing::warn!(error = %err, "Rejected contact submission");
                        SubmitOutcome::Failed
                    }
                };

                let notice = wizard.finish_submit(outcome);
                toast = Some(if outcome.is_success() {
                    Toast::success(notice)
                } else {
                    Toast::error(notice)
                });
            }
        }
    }

    let mut view = ContactTemplate::new(&template.company, &wizard);
    view.toast = toast;
    if auto_advance {
        view.auto_advance_ms = Some(AUTO_ADVANCE_DELAY.as_millis());
    }

    template.render(view)
}
