#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Anonymous,
    Restoring { token: String },
    Authenticated { token: String },
}

impl Session {
    pub fn from_stored_token(token: Option<String>) -> Self {
        match token {
            Some(token) if !token.is_empty() => Session::Restoring { token },
            _ => Session::Anonymous,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn is_restoring(&self) -> bool {
        matches!(self, Session::Restoring { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Anonymous => None,
            Session::Restoring { token } | Session::Authenticated { token } => Some(token),
        }
    }

    pub fn login_succeeded(self, token: String) -> Self {
        Session::Authenticated { token }
    }

    pub fn restore_confirmed(self) -> Self {
        match self {
            Session::Restoring { token } => Session::Authenticated { token },
            other => other,
        }
    }

    pub fn restore_failed(self) -> Self {
        match self {
            Session::Restoring { .. } => Session::Anonymous,
            other => other,
        }
    }

    pub fn logged_out(self) -> Self {
        Session::Anonymous
    }
}

#[cfg(test)]
mod tests {
    use super::Session;

    #[test]
    fn fresh_load_without_token_is_anonymous() {
        let session = Session::from_stored_token(None);
        assert_eq!(session, Session::Anonymous);
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }

    #[test]
    fn stored_token_starts_restoring_not_authenticated() {
        let session = Session::from_stored_token(Some("tok-1".to_string()));
        assert!(session.is_restoring());
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), Some("tok-1"));
    }

    #[test]
    fn empty_stored_token_is_ignored() {
        assert_eq!(
            Session::from_stored_token(Some(String::new())),
            Session::Anonymous
        );
    }

    #[test]
    fn login_lands_authenticated_with_the_token() {
        let session = Session::Anonymous.login_succeeded("tok-2".to_string());
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("tok-2"));
    }

    #[test]
    fn restore_paths() {
        let restoring = Session::from_stored_token(Some("tok-3".to_string()));
        assert!(restoring.clone().restore_confirmed().is_authenticated());
        assert_eq!(restoring.restore_failed(), Session::Anonymous);

        // Confirm/fail are no-ops outside of Restoring.
        let authed = Session::Authenticated {
            token: "tok-4".to_string(),
        };
        assert_eq!(authed.clone().restore_failed(), authed);
    }

    #[test]
    fn logout_always_lands_anonymous() {
        for session in [
            Session::Anonymous,
            Session::Restoring {
                token: "a".to_string(),
            },
            Session::Authenticated {
                token: "b".to_string(),
            },
        ] {
            let out = session.logged_out();
            assert_eq!(out, Session::Anonymous);
            assert!(out.token().is_none());
        }
    }
}
