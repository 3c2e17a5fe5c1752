mod bcrypt_hasher;
mod password_hasher;

pub use bcrypt_hasher::BcryptHasher;
pub use password_hasher::PasswordHasher;
