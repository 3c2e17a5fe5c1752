mod otp_email_service;

pub use otp_email_service::OtpEmailService;
