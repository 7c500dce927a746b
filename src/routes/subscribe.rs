use axum::{
    extract::Form,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use validator::Validate;
use visionflow_contact::Wizard;

use crate::{
    routes::contact::ContactTemplate,
    template::{Template, Toast},
};

pub const SUBSCRIBED_NOTICE: &str = "Thank you for subscribing!";

#[derive(Deserialize, Validate)]
pub struct SubscribeForm {
    #[validate(length(min = 1, max = 100, message = "Please enter your name"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
}

/// Newsletter sign-up from the page footer. Nothing is stored.
pub async fn action(template: Template, Form(input): Form<SubscribeForm>) -> Response {
    let wizard = Wizard::new();
    let render = |toast: Toast| {
        let mut view = ContactTemplate::new(&template.company, &wizard);
        view.toast = Some(toast);
        template.render(view)
    };

    crate::try_response!(
        sync: input.validate().map_err(visionflow_shared::Error::from),
        render
    );

    tracing::info!(email = %input.email, name = %input.name, "Newsletter subscription");

    render(Toast::success(SUBSCRIBED_NOTICE))
}
