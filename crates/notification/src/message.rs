/// An outbound email, rendered and ready to hand to a sender.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    pub plain: String,
}

/// Capability to deliver one message. Delivery details (transport, retries,
/// rate limits) belong to the implementor.
#[async_trait::async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> anyhow::Result<()>;
}
