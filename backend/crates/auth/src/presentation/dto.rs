//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Shared
// ============================================================================

/// Minimal public account view; the password hash never leaves the service
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: String,
    pub email: String,
}

/// Bare `{message}` body
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
}

/// Sign up response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub message: &'static str,
    pub user_data: UserData,
}

// ============================================================================
// Log In
// ============================================================================

/// Log in request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogInRequest {
    pub email: String,
    pub password: String,
}

/// Log in response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogInResponse {
    pub message: &'static str,
    pub token: String,
    pub user_data: UserData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_wire_shape() {
        let body = serde_json::to_value(LogInResponse {
            message: "Auth successful",
            token: "t".to_string(),
            user_data: UserData {
                id: "u1".to_string(),
                email: "a@b.com".to_string(),
            },
        })
        .unwrap();

        assert_eq!(body["message"], "Auth successful");
        assert_eq!(body["token"], "t");
        assert_eq!(body["userData"]["id"], "u1");
        assert_eq!(body["userData"]["email"], "a@b.com");
    }

    #[test]
    fn test_signup_request_accepts_contract_body() {
        let req: SignUpRequest =
            serde_json::from_str(r#"{"email":"a@b.com","password":"pw"}"#).unwrap();
        assert_eq!(req.email, "a@b.com");
        assert_eq!(req.password, "pw");
    }
}
