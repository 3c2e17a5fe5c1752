use async_trait::async_trait;

/// Transport-level delivery; `body` is an HTML fragment.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String>;
}
