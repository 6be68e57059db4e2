use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileDto {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub email_alert: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub email_alert: bool,
}

#[cfg(test)]
mod tests {
    use super::{ProfileDto, ProfileUpdate};

    #[test]
    fn profile_wire_shape() {
        let profile: ProfileDto =
            serde_json::from_str(r#"{"username":"alice","email":"alice@example.com"}"#)
                .expect("decode profile");
        assert_eq!(profile.username, "alice");
        assert!(!profile.email_alert);

        let update = serde_json::to_value(ProfileUpdate { email_alert: true })
            .expect("serialize update");
        assert_eq!(update.as_object().expect("object").len(), 1);
        assert_eq!(update["email_alert"], true);
    }
}
