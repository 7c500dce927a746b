use axum::response::{IntoResponse, Redirect};

pub async fn page() -> impl IntoResponse {
    Redirect::to("/contact")
}
