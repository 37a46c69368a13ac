//! Fixed demo account.
//!
//! There is no account system: one administrator is compiled in and every
//! check is a plain, case-sensitive string comparison.

use common::UserId;

use crate::error::ApiError;

pub const DEMO_EMAIL: &str = "admin@demo.com";
pub const DEMO_PASSWORD: &str = "password123";
pub const DEMO_UID: &str = "DEMO_UID_001";

/// The single account the service recognises.
#[derive(Clone)]
pub struct DemoAccount {
    email: String,
    password: String,
    uid: UserId,
}

impl DemoAccount {
    pub fn new(email: impl Into<String>, password: impl Into<String>, uid: UserId) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            uid,
        }
    }

    /// Returns the account ID when both credentials match exactly.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<&UserId, ApiError> {
        if email == self.email && password == self.password {
            Ok(&self.uid)
        } else {
            Err(ApiError::Unauthorized(format!(
                "Invalid credentials. Use {} / {}.",
                self.email, self.password
            )))
        }
    }

    /// Checks that a caller-supplied ID names this account.
    ///
    /// An unknown ID is an unauthorized caller, but the generate endpoint
    /// answers it with 403 rather than 401, so it is raised as `Forbidden`.
    pub fn authorize(&self, uid: &str) -> Result<(), ApiError> {
        if self.uid == *uid {
            Ok(())
        } else {
            Err(ApiError::Forbidden("Unauthorized access.".to_string()))
        }
    }
}

impl Default for DemoAccount {
    fn default() -> Self {
        Self::new(DEMO_EMAIL, DEMO_PASSWORD, UserId::from(DEMO_UID))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_credentials_authenticate() {
        let account = DemoAccount::default();
        let uid = account.authenticate("admin@demo.com", "password123").unwrap();
        assert_eq!(uid.as_str(), "DEMO_UID_001");
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let account = DemoAccount::default();
        assert!(account.authenticate("Admin@demo.com", "password123").is_err());
        assert!(account.authenticate("admin@demo.com", "Password123").is_err());
        assert!(account.authenticate("", "").is_err());
    }

    #[test]
    fn test_failure_message_names_demo_credentials() {
        let err = DemoAccount::default()
            .authenticate("a", "b")
            .unwrap_err();
        match err {
            ApiError::Unauthorized(msg) => {
                assert_eq!(msg, "Invalid credentials. Use admin@demo.com / password123.")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_authorize_only_known_uid() {
        let account = DemoAccount::default();
        assert!(account.authorize("DEMO_UID_001").is_ok());
        assert!(matches!(
            account.authorize("DEMO_UID_002"),
            Err(ApiError::Forbidden(_))
        ));
    }
}
