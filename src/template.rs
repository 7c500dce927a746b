use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;
use visionflow_notification::contact::CompanyConfig;

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

/// Page renderer carrying the business details every layout prints.
pub struct Template {
    pub company: CompanyConfig,
}

impl Template {
    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to render template");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Template {
            company: state.config.company.clone(),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Notice shown on top of a re-rendered page.
#[derive(Clone, Debug)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == ToastKind::Success
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate<'a> {
    pub company: &'a CompanyConfig,
}

/// Error toast for a failed command. Server side failures are logged and
/// replaced by a generic message.
pub fn error_toast(err: visionflow_shared::Error) -> Toast {
    match err {
        visionflow_shared::Error::Validate(errors) => Toast::error(errors.to_string()),
        visionflow_shared::Error::Server(err) => {
            tracing::error!("{err}");
            Toast::error(SERVER_ERROR_MESSAGE)
        }
        visionflow_shared::Error::Unknown(err) => {
            tracing::error!("{err}");
            Toast::error(SERVER_ERROR_MESSAGE)
        }
    }
}

/// Unwraps a `visionflow_shared::Result`, or returns whatever `$on_error`
/// renders for the matching error toast.
#[macro_export]
macro_rules! try_response {
    (sync: $result:expr, $on_error:expr) => {
        match $result {
            Ok(r) => r,
            Err(err) => return ($on_error)($crate::template::error_toast(err)),
        }
    };

    ($result:expr, $on_error:expr) => {
        $crate::try_response!(sync: $result.await, $on_error)
    };
}
