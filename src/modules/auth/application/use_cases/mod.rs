pub mod fetch_session_user;
pub mod forget_password;
pub mod get_otp_expiry;
pub mod login_user;
pub mod reset_password;
pub mod signup_user;
pub mod verify_otp;
