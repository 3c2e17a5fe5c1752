use std::env;

/// Deployment environment, parsed from `RUST_ENV`. Drives cookie security
/// attributes and how much detail 500 responses expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        match env::var("RUST_ENV").as_deref() {
            Ok("production") => Environment::Production,
            Ok("test") => Environment::Test,
            _ => Environment::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Underlying error text for 500 bodies, withheld in production.
    pub fn error_detail<'a>(&self, detail: &'a str) -> Option<&'a str> {
        if self.is_production() {
            None
        } else {
            Some(detail)
        }
    }
}

/// Immutable process configuration, built once at startup and handed to the
/// components that need it. Nothing reads the environment after this.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: String,
    pub database_url: String,
    pub email_from: String,
    pub environment: Environment,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = Environment::from_env();

        // Try .env.{environment} first, then fall back to .env
        let env_name = match environment {
            Environment::Production => "production",
            Environment::Test => "test",
            Environment::Development => "development",
        };
        if dotenvy::from_filename(format!(".env.{env_name}")).is_err() {
            dotenvy::dotenv().ok();
        }

        Self {
            host: env::var("HOST").expect("HOST is not set in .env file"),
            port: env::var("PORT").expect("PORT is not set in .env file"),
            database_url: env::var("DATABASE_URL")
                .expect("DATABASE_URL is not set in .env file"),
            email_from: env::var("EMAIL_FROM").expect("EMAIL_FROM not set"),
            environment,
        }
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
