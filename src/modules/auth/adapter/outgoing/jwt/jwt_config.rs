use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub session_token_expiry: i64, // Expiration in seconds
    pub reset_token_expiry: i64,   // Expiration in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        let session_token_expiry = env::var("JWT_SESSION_EXPIRY")
            .unwrap_or_else(|_| "604800".to_string()) // Default 7 days
            .parse::<i64>()
            .expect("Invalid JWT_SESSION_EXPIRY value");

        let reset_token_expiry = env::var("JWT_RESET_EXPIRY")
            .unwrap_or_else(|_| "3600".to_string()) // Default 1 hour
            .parse::<i64>()
            .expect("Invalid JWT_RESET_EXPIRY value");

        Self {
            secret_key,
            session_token_expiry,
            reset_token_expiry,
        }
    }
}
