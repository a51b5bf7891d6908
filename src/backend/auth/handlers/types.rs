/**
 * Authentication Handler Types
 *
 * Request and response types shared by the signup, signin, and verify
 * handlers.
 */

use serde::{Deserialize, Serialize};

/// Signup request
///
/// Email and password are validated by the handler; missing fields
/// deserialize to empty strings so the handler can reject them with the
/// mapped 400 instead of a deserialization error.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Signin request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SigninRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Auth response
///
/// Returned by signup and signin. Carries the session token and the
/// user's first name for immediate display.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub token: String,
    pub name: String,
}

/// Verify response
#[derive(Serialize, Deserialize, Debug)]
pub struct VerifyResponse {
    pub verified: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_defaults_missing_fields() {
        let request: SignupRequest =
            serde_json::from_str(r#"{"email":"jon@thewall.com"}"#).unwrap();
        assert_eq!(request.email, "jon@thewall.com");
        assert!(request.password.is_empty());
        assert!(request.first_name.is_empty());
    }

    #[test]
    fn test_signup_request_camel_case() {
        let request: SignupRequest = serde_json::from_str(
            r#"{"email":"a@b.c","password":"pw","firstName":"Jon","lastName":"Snow"}"#,
        )
        .unwrap();
        assert_eq!(request.first_name, "Jon");
        assert_eq!(request.last_name, "Snow");
    }
}
