use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::email::application::ports::outgoing::email_sender::EmailSender;
use crate::email::application::ports::outgoing::otp_notifier::{
    OtpNotificationError, OtpNotifier,
};

const OTP_SUBJECT: &str = "Password Reset OTP";

#[derive(Clone)]
pub struct OtpEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
}

impl fmt::Debug for OtpEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OtpEmailService")
            .field("sender", &"<dyn EmailSender>")
            .finish()
    }
}

impl OtpEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>) -> Self {
        Self { sender }
    }

    fn render_body(otp: &str) -> String {
        format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: auto; padding: 20px; border: 1px solid #ddd; border-radius: 10px; background: #ffffff;">
  <h2 style="color: #007bff; text-align: center;">{OTP_SUBJECT}</h2>
  <p style="font-size: 16px; color: #333; text-align: center;">
    Your OTP is: <strong>{otp}</strong>
  </p>
  <p style="font-size: 14px; color: #777; text-align: center;">
    The code expires in 4 minutes. This is an automated message. Please do not reply.
  </p>
</div>"#
        )
    }
}

#[async_trait]
impl OtpNotifier for OtpEmailService {
    async fn send_otp(&self, to: &str, otp: &str) -> Result<(), OtpNotificationError> {
        let body = Self::render_body(otp);
        self.sender
            .send_email(to, OTP_SUBJECT, &body)
            .await
            .map_err(OtpNotificationError::EmailSendingFailed)
    }
}
