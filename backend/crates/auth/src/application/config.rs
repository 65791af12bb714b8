//! Application Configuration
//!
//! Explicit configuration for the auth layer, constructed once at process
//! start and passed by reference into the use cases and the gate middleware.
//! Nothing here is read from ambient global state.

use std::time::Duration;

use platform::password::DEFAULT_COST;

/// Fixed token validity window (1 hour)
pub const TOKEN_TTL: Duration = Duration::from_secs(3600);

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC signing secret for bearer tokens.
    /// Supplied out-of-band; an empty secret is a startup error.
    pub token_secret: Vec<u8>,
    /// Token TTL, measured from issuance
    pub token_ttl: Duration,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    /// Create a config with the given signing secret
    pub fn new(token_secret: Vec<u8>) -> Self {
        Self {
            token_secret,
            token_ttl: TOKEN_TTL,
            bcrypt_cost: DEFAULT_COST,
        }
    }

    /// Create config with a random signing secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = vec![0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self::new(secret)
    }
}
