pub mod auth;

pub use auth::{ResetSession, SessionUser};
