use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Full user record as stored. The reset-state triple (`otp`,
/// `otp_expiry_time`, `reset_password_expiry`) forms a small state machine:
/// Idle (all null) -> OtpIssued (otp + expiry set) -> ResetAuthorized
/// (otp cleared, reset expiry set) -> Idle again after a successful reset.
/// Stale fields are never swept; they are only checked on next use.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub bio: String,
    pub profile_picture: String,
    pub otp: Option<String>,
    pub otp_expiry_time: Option<DateTime<Utc>>,
    pub reset_password_expiry: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// An OTP counts as live only while both fields are set and unexpired.
    pub fn has_live_otp(&self, now: DateTime<Utc>) -> bool {
        matches!(
            (self.otp.as_deref(), self.otp_expiry_time),
            (Some(_), Some(expiry)) if now <= expiry
        )
    }

    /// The reset window opened by `verifyOtp` and closed by `resetPassword`
    /// or the 1-hour deadline.
    pub fn reset_window_open(&self, now: DateTime<Utc>) -> bool {
        matches!(self.reset_password_expiry, Some(expiry) if now <= expiry)
    }
}
