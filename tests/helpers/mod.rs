use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;
use visionflow::{AppState, Config};
use visionflow_notification::{EmailMessage, EmailSender, SubmissionHandler};

/// Records every message; fails every call when `failing` is set.
#[derive(Default)]
pub struct RecordingSender {
    pub sent: Mutex<Vec<EmailMessage>>,
    pub failing: bool,
}

impl RecordingSender {
    pub fn messages(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl EmailSender for RecordingSender {
    async fn send(&self, message: &EmailMessage) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(message.clone());

        if self.failing {
            anyhow::bail!("smtp relay unavailable");
        }

        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub sender: Arc<RecordingSender>,
}

impl TestApp {
    pub fn new(failing: bool) -> anyhow::Result<Self> {
        let config = Config::load(Some("config/default.toml".to_owned()))?;
        let sender = Arc::new(RecordingSender {
            failing,
            ..Default::default()
        });
        let submission =
            SubmissionHandler::new(sender.clone(), &config.email, config.company.clone());

        Ok(Self {
            router: visionflow::router(AppState { config, submission }),
            sender,
        })
    }

    pub async fn get(&self, uri: &str) -> anyhow::Result<(StatusCode, String)> {
        let req = Request::builder().uri(uri).body(Body::empty())?;
        self.send(req).await
    }

    pub async fn post(
        &self,
        uri: &str,
        form: &[(&str, &str)],
    ) -> anyhow::Result<(StatusCode, String)> {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(serde_urlencoded::to_string(form)?))?;

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> anyhow::Result<(StatusCode, String)> {
        let resp = self.router.clone().oneshot(req).await?;
        let status = resp.status();
        let bytes = resp.into_body().collect().await?.to_bytes();

        Ok((status, String::from_utf8(bytes.to_vec())?))
    }
}

/// A complete step 6 form for Asha Rao.
pub fn asha_step_six() -> Vec<(&'static str, &'static str)> {
    vec![
        ("step", "6"),
        ("first_name", "Asha"),
        ("last_name", "Rao"),
        ("company", "Acme"),
        ("discovered_via", "LinkedIn"),
        ("service_needed", "Website Design"),
        ("email", "asha@example.com"),
        ("project_description", "Need a new site"),
        ("privacy_agreed", "on"),
    ]
}

pub fn with(
    mut form: Vec<(&'static str, &'static str)>,
    extra: &[(&'static str, &'static str)],
) -> Vec<(&'static str, &'static str)> {
    form.extend_from_slice(extra);
    form
}
