//! Password Hashing and Verification
//!
//! One-way salted hashing of account passwords:
//! - bcrypt with a configurable work factor (default 10 rounds)
//! - Per-hash random salt embedded in the output string
//! - Constant-time digest comparison (inside bcrypt itself)
//! - Redacted Debug output for clear text values
//!
//! A wrong password is not an error: `verify` returns `Ok(false)`. Only a
//! malformed stored hash or a failing hash computation surfaces as `Err`.

use std::fmt;

use thiserror::Error;

/// Default bcrypt work factor (2^10 rounds)
pub const DEFAULT_COST: u32 = 10;

// ============================================================================
// Error Types
// ============================================================================

/// Password input policy errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password contains only whitespace or nothing at all
    #[error("Password cannot be empty")]
    Empty,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed (random source or computation)
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored hash is not a valid bcrypt string
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password
// ============================================================================

/// Clear text password received from a client.
///
/// Does not implement `Clone` and redacts its Debug output so the plaintext
/// cannot leak into logs by accident.
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new clear text password.
    ///
    /// Validation is deliberately minimal: the value must contain at least
    /// one non-whitespace character.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        if raw.trim().is_empty() {
            return Err(PasswordPolicyError::Empty);
        }
        Ok(Self(raw))
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    /// Hash the password with bcrypt at the given work factor.
    ///
    /// Each call embeds a fresh random salt, so hashing the same password
    /// twice yields two different strings that both verify.
    pub fn hash(&self, cost: u32) -> Result<HashedPassword, PasswordHashError> {
        let hash = bcrypt::hash(&self.0, cost)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;
        Ok(HashedPassword { hash })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// bcrypt hash in modular crypt format (`$2b$<cost>$<salt+digest>`).
///
/// Safe to persist; the salt and cost live inside the string.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Wrap a stored hash string (e.g. loaded from the database).
    ///
    /// The string is not parsed here; a malformed value surfaces as
    /// [`PasswordHashError::InvalidHashFormat`] on the first `verify`.
    pub fn from_stored(s: impl Into<String>) -> Self {
        Self { hash: s.into() }
    }

    /// Get the hash string for storage
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash.
    ///
    /// Recomputes the digest with the salt embedded in the stored hash and
    /// compares in constant time. A mismatch is `Ok(false)`, never an error.
    pub fn verify(&self, password: &ClearTextPassword) -> Result<bool, PasswordHashError> {
        bcrypt::verify(password.as_str(), &self.hash)
            .map_err(|_| PasswordHashError::InvalidHashFormat)
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // cost 4 is the bcrypt minimum; keeps the suite fast
    const TEST_COST: u32 = 4;

    #[test]
    fn test_password_empty() {
        assert_eq!(
            ClearTextPassword::new(String::new()).unwrap_err(),
            PasswordPolicyError::Empty
        );
        assert_eq!(
            ClearTextPassword::new("    ".to_string()).unwrap_err(),
            PasswordPolicyError::Empty
        );
    }

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new("correct horse battery".to_string()).unwrap();
        let hashed = password.hash(TEST_COST).unwrap();

        assert!(hashed.verify(&password).unwrap());

        let wrong = ClearTextPassword::new("incorrect horse".to_string()).unwrap();
        assert!(!hashed.verify(&wrong).unwrap());
    }

    #[test]
    fn test_salt_randomness() {
        // Same input, two different hash strings, both verify
        let password = ClearTextPassword::new("same input".to_string()).unwrap();
        let first = password.hash(TEST_COST).unwrap();
        let second = password.hash(TEST_COST).unwrap();

        assert_ne!(first.as_str(), second.as_str());
        assert!(first.verify(&password).unwrap());
        assert!(second.verify(&password).unwrap());
    }

    #[test]
    fn test_stored_roundtrip() {
        let password = ClearTextPassword::new("roundtrip me".to_string()).unwrap();
        let hashed = password.hash(TEST_COST).unwrap();

        let restored = HashedPassword::from_stored(hashed.as_str().to_string());
        assert!(restored.verify(&password).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_error_not_false() {
        let password = ClearTextPassword::new("whatever".to_string()).unwrap();
        let bogus = HashedPassword::from_stored("not-a-bcrypt-string");

        assert!(matches!(
            bogus.verify(&password),
            Err(PasswordHashError::InvalidHashFormat)
        ));
    }

    #[test]
    fn test_invalid_cost_fails() {
        let password = ClearTextPassword::new("whatever".to_string()).unwrap();
        // bcrypt rejects cost < 4
        assert!(matches!(
            password.hash(1),
            Err(PasswordHashError::HashingFailed(_))
        ));
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::new("sekrit".to_string()).unwrap();
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("sekrit"));

        let hashed = password.hash(TEST_COST).unwrap();
        assert!(!format!("{:?}", hashed).contains("$2"));
    }
}
