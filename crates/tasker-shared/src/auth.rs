use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForgotPasswordRequest {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResetPasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiMessage {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiMessage {
    pub fn text(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .filter(|text| !text.is_empty())
    }
}

pub const MIN_PASSWORD_LEN: usize = 8;

pub fn validate_registration(password: &str, confirm: &str) -> Result<(), String> {
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ApiMessage, SignupResponse, validate_registration};

    #[test]
    fn mismatched_passwords_are_rejected_locally() {
        let err = validate_registration("pw1", "pw2").expect_err("must reject");
        assert_eq!(err, "Passwords do not match");
    }

    #[test]
    fn short_passwords_are_rejected_locally() {
        let err = validate_registration("pw123", "pw123").expect_err("must reject");
        assert_eq!(err, "Password must be at least 8 characters");
    }

    #[test]
    fn valid_registration_passes() {
        assert!(validate_registration("pw123456", "pw123456").is_ok());
    }

    #[test]
    fn api_message_prefers_error_text() {
        let envelope: ApiMessage =
            serde_json::from_str(r#"{"error":"Wrong Password. Please try again.."}"#)
                .expect("decode");
        assert_eq!(envelope.text(), Some("Wrong Password. Please try again.."));

        let empty: ApiMessage = serde_json::from_str("{}").expect("decode");
        assert_eq!(empty.text(), None);
    }

    #[test]
    fn signup_response_token_is_optional() {
        let plain: SignupResponse =
            serde_json::from_str(r#"{"message":"Registration successful! You can now log in."}"#)
                .expect("decode");
        assert!(plain.token.is_none());

        let with_token: SignupResponse =
            serde_json::from_str(r#"{"message":"ok","token":"tok-9"}"#).expect("decode");
        assert_eq!(with_token.token.as_deref(), Some("tok-9"));
    }
}
