pub mod forget_password;
pub mod get_otp_expiry;
pub mod login;
pub mod logout;
pub mod reset_password;
pub mod session_user;
pub mod signup;
pub mod verify_otp;

pub use forget_password::forget_password_handler;
pub use get_otp_expiry::get_otp_expiry_handler;
pub use login::login_handler;
pub use logout::logout_handler;
pub use reset_password::reset_password_handler;
pub use session_user::session_user_handler;
pub use signup::signup_handler;
pub use verify_otp::verify_otp_handler;

pub use forget_password::ForgetPasswordRequestDto;
pub use get_otp_expiry::GetOtpExpiryQuery;
pub use login::LoginRequestDto;
pub use reset_password::ResetPasswordRequestDto;
pub use signup::SignupRequestDto;
pub use verify_otp::VerifyOtpRequestDto;
