/// Credential hashing seam; signup, login and password reset all go
/// through it.
pub trait PasswordHasher: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String, String>;

    /// Ok(false) is a wrong password; Err is a malformed stored hash.
    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, String>;
}
