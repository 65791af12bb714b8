//! Signed Session Tokens
//!
//! Self-contained bearer tokens in the compact three-part form
//! `base64url(header).base64url(claims).base64url(signature)` with an
//! HMAC-SHA256 signature over the first two parts. Nothing is persisted
//! server-side; expiry is carried inside the claims and there is no
//! revocation.
//!
//! Verification is purely computational: no store or network access.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::time::Duration;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Fixed token header, signed along with the claims
const HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

// ============================================================================
// Claims
// ============================================================================

/// Token payload binding a subject identity to an expiry instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identity (account id)
    pub sub: String,
    /// Subject email
    pub email: String,
    /// Expiry as Unix seconds
    pub exp: i64,
}

impl Claims {
    /// Claims expiring `ttl` from now.
    pub fn with_ttl(sub: impl Into<String>, email: impl Into<String>, ttl: Duration) -> Self {
        Self {
            sub: sub.into(),
            email: email.into(),
            exp: Utc::now().timestamp() + ttl.as_secs() as i64,
        }
    }

    /// True once the current time has passed `exp`.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Token issuance errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignError {
    /// Signing secret is empty or unavailable
    #[error("Signing secret is empty")]
    EmptySecret,

    /// Claims could not be serialized
    #[error("Claims serialization failed: {0}")]
    Serialize(String),
}

/// Token verification errors.
///
/// The distinction exists for logs and tests; at the HTTP boundary all
/// variants collapse into the same 401 response.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    /// Token does not have the expected three-part structure
    #[error("Token is malformed")]
    Malformed,

    /// Signature does not match the payload
    #[error("Token signature mismatch")]
    BadSignature,

    /// Token expiry has elapsed
    #[error("Token has expired")]
    Expired,
}

// ============================================================================
// Sign / Verify
// ============================================================================

/// Sign claims into a compact token string.
///
/// Deterministic for identical claims and secret; issuance timestamps make
/// successive logins produce distinct tokens.
pub fn sign(claims: &Claims, secret: &[u8]) -> Result<String, SignError> {
    if secret.is_empty() {
        return Err(SignError::EmptySecret);
    }

    let payload = serde_json::to_vec(claims).map_err(|e| SignError::Serialize(e.to_string()))?;

    let signing_input = format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(HEADER.as_bytes()),
        URL_SAFE_NO_PAD.encode(&payload)
    );

    let mut mac =
        HmacSha256::new_from_slice(secret).map_err(|e| SignError::Serialize(e.to_string()))?;
    mac.update(signing_input.as_bytes());
    let signature = mac.finalize().into_bytes();

    Ok(format!(
        "{}.{}",
        signing_input,
        URL_SAFE_NO_PAD.encode(signature)
    ))
}

/// Verify a token and extract its claims.
///
/// Checks, in order: three-part structure, signature (constant-time via
/// [`Mac::verify_slice`]), payload shape, expiry.
pub fn verify(token: &str, secret: &[u8]) -> Result<Claims, VerifyError> {
    let mut parts = token.split('.');
    let (Some(header), Some(payload), Some(signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(VerifyError::Malformed);
    };

    let signature = URL_SAFE_NO_PAD
        .decode(signature)
        .map_err(|_| VerifyError::Malformed)?;

    let mut mac = HmacSha256::new_from_slice(secret).map_err(|_| VerifyError::BadSignature)?;
    mac.update(header.as_bytes());
    mac.update(b".");
    mac.update(payload.as_bytes());
    mac.verify_slice(&signature)
        .map_err(|_| VerifyError::BadSignature)?;

    let payload = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| VerifyError::Malformed)?;
    let claims: Claims =
        serde_json::from_slice(&payload).map_err(|_| VerifyError::Malformed)?;

    if claims.is_expired() {
        return Err(VerifyError::Expired);
    }

    Ok(claims)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"unit-test-signing-secret";

    fn claims_in_one_hour() -> Claims {
        Claims::with_ttl("u1", "a@b.com", Duration::from_secs(3600))
    }

    #[test]
    fn test_sign_and_verify_roundtrip() {
        let claims = claims_in_one_hour();
        let token = sign(&claims, SECRET).unwrap();

        let verified = verify(&token, SECRET).unwrap();
        assert_eq!(verified.sub, "u1");
        assert_eq!(verified.email, "a@b.com");
        assert_eq!(verified, claims);
    }

    #[test]
    fn test_token_has_three_parts() {
        let token = sign(&claims_in_one_hour(), SECRET).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_empty_secret_rejected_at_signing() {
        assert_eq!(
            sign(&claims_in_one_hour(), b"").unwrap_err(),
            SignError::EmptySecret
        );
    }

    #[test]
    fn test_wrong_secret_is_bad_signature() {
        let token = sign(&claims_in_one_hour(), SECRET).unwrap();
        assert_eq!(
            verify(&token, b"a different secret").unwrap_err(),
            VerifyError::BadSignature
        );
    }

    #[test]
    fn test_tampered_payload_is_bad_signature() {
        let token = sign(&claims_in_one_hour(), SECRET).unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();

        let forged = Claims::with_ttl("someone-else", "a@b.com", Duration::from_secs(3600));
        let forged_payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&forged).unwrap());
        parts[1] = &forged_payload;

        assert_eq!(
            verify(&parts.join("."), SECRET).unwrap_err(),
            VerifyError::BadSignature
        );
    }

    #[test]
    fn test_expired_token() {
        let expired = Claims {
            sub: "u1".to_string(),
            email: "a@b.com".to_string(),
            exp: Utc::now().timestamp() - 60,
        };
        let token = sign(&expired, SECRET).unwrap();

        assert_eq!(verify(&token, SECRET).unwrap_err(), VerifyError::Expired);
    }

    #[test]
    fn test_malformed_tokens() {
        assert_eq!(verify("", SECRET).unwrap_err(), VerifyError::Malformed);
        assert_eq!(
            verify("only.two", SECRET).unwrap_err(),
            VerifyError::Malformed
        );
        assert_eq!(
            verify("a.b.c.d", SECRET).unwrap_err(),
            VerifyError::Malformed
        );
        // Signature part that is not valid base64url
        assert_eq!(
            verify("a.b.!!!", SECRET).unwrap_err(),
            VerifyError::Malformed
        );
    }

    #[test]
    fn test_valid_signature_over_garbage_payload_is_malformed() {
        // Correctly signed, but the payload is not a Claims document
        let signing_input = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(HEADER.as_bytes()),
            URL_SAFE_NO_PAD.encode(b"not json")
        );
        let mut mac = HmacSha256::new_from_slice(SECRET).unwrap();
        mac.update(signing_input.as_bytes());
        let token = format!(
            "{}.{}",
            signing_input,
            URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
        );

        assert_eq!(verify(&token, SECRET).unwrap_err(), VerifyError::Malformed);
    }

    #[test]
    fn test_claims_expiry_window() {
        let claims = Claims::with_ttl("u1", "a@b.com", Duration::from_secs(3600));
        assert!(!claims.is_expired());

        let gone = Claims {
            exp: Utc::now().timestamp() - 1,
            ..claims
        };
        assert!(gone.is_expired());
    }
}
