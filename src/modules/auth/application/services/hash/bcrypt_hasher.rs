use super::password_hasher::PasswordHasher;
use bcrypt::{hash, verify};

// Matches the stored hashes; changing the cost only affects new hashes.
const BCRYPT_COST: u32 = 10;

pub struct BcryptHasher;

impl PasswordHasher for BcryptHasher {
    fn hash_password(&self, password: &str) -> Result<String, String> {
        hash(password, BCRYPT_COST).map_err(|e| e.to_string())
    }

    fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, String> {
        verify(password, hashed).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcrypt_hash_and_verify_password() {
        let hasher = BcryptHasher;
        let password = "SecurePassword123";

        let hashed_password = hasher.hash_password(password);
        assert!(
            hashed_password.is_ok(),
            "Expected password hashing to succeed"
        );

        let hashed_password = hashed_password.unwrap();

        let verify_correct = hasher.verify_password(password, &hashed_password);
        assert!(
            verify_correct.is_ok(),
            "Expected password verification to succeed"
        );
        assert!(verify_correct.unwrap(), "Password should match");

        let verify_wrong = hasher.verify_password("WrongPassword", &hashed_password);
        assert!(
            verify_wrong.is_ok(),
            "Expected password verification to succeed"
        );
        assert!(!verify_wrong.unwrap(), "Password should not match");

        let verify_invalid_hash = hasher.verify_password(password, "invalid-hash");
        assert!(
            verify_invalid_hash.is_err(),
            "Expected error for invalid hash format"
        );
    }

    #[test]
    fn test_hash_uses_configured_cost() {
        let hasher = BcryptHasher;
        let hashed = hasher.hash_password("password123").unwrap();
        // bcrypt encodes the cost in the hash prefix: $2b$10$...
        assert!(hashed.contains("$10$"), "Unexpected cost in {hashed}");
    }
}
