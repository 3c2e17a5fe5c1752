use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum OtpNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

/// Delivers a password-reset OTP to a user's address.
#[async_trait]
pub trait OtpNotifier: Send + Sync {
    async fn send_otp(&self, to: &str, otp: &str) -> Result<(), OtpNotificationError>;
}
