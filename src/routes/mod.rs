use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use visionflow_notification::SubmissionHandler;

use crate::template::{NotFoundTemplate, Template};

mod assets;
mod contact;
mod health;
mod index;
mod subscribe;

pub use subscribe::SUBSCRIBED_NOTICE;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub submission: SubmissionHandler,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        template.render(NotFoundTemplate {
            company: &template.company,
        }),
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/subscribe", post(subscribe::action))
        .nest_service("/static", assets::AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
