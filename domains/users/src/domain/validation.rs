//! User validation: structural rules plus persistence-backed uniqueness
//!
//! The structural pass runs entirely against the payload; only fields that
//! passed it (and are present) go on to an existence lookup. On update,
//! uniqueness lookups are skipped for values unchanged from the stored
//! record, so a no-op re-save never fails with "already taken". A store
//! failure escalates to Internal immediately and skips the remaining checks.

use std::sync::Arc;

use tertulia_common::{Error, FieldErrors, Result};
use validator::ValidateEmail;

use crate::domain::entities::{User, UserPayload};
use crate::repository::UserStore;

/// Stateless validation service, constructed once per process with the store
/// handle. Request-scoped data arrives as arguments, never as fields.
#[derive(Clone)]
pub struct UserValidator {
    store: Arc<dyn UserStore>,
}

impl UserValidator {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    fn structural(user: &UserPayload, errs: &mut FieldErrors) {
        if user.username.is_empty() {
            errs.add("username", "username is a required field");
        }
        if user.email.is_empty() {
            errs.add("email", "email is a required field");
        } else if !user.email.validate_email() {
            errs.add("email", "email address provided is not valid");
        }
        if user.status_id == 0 {
            errs.add("status_id", "user must be assigned a status");
        }
        if user.role_id == 0 {
            errs.add("role_id", "user must be assigned a role");
        }
    }

    /// True when the email field passed its structural checks.
    fn email_ok(user: &UserPayload) -> bool {
        !user.email.is_empty() && user.email.validate_email()
    }

    /// Validate a new account. All structural failures are aggregated before
    /// any store lookup happens.
    pub async fn validate_new_user(&self, user: &UserPayload) -> Result<()> {
        let mut errs = FieldErrors::new();
        Self::structural(user, &mut errs);
        if user.password.is_empty() {
            errs.add("password", "password is a required field");
        }

        if !user.username.is_empty() && self.store.username_exists(&user.username).await? {
            errs.add("username", "username is already taken");
        }
        if Self::email_ok(user) && self.store.email_exists(&user.email).await? {
            errs.add("email", "an account with the given email already exists");
        }

        errs.into_result()
    }

    /// Validate a full-field update for the user with `id`. Returns the
    /// stored record so the handler can reuse it. A missing record is an
    /// identity miss, not a validation failure.
    pub async fn validate_updated_user(&self, id: i64, user: &UserPayload) -> Result<User> {
        let mut errs = FieldErrors::new();
        Self::structural(user, &mut errs);

        let stored = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found(anyhow::anyhow!("no user with id {id}")))?;

        if !user.username.is_empty()
            && user.username != stored.username
            && self.store.username_exists(&user.username).await?
        {
            errs.add("username", "username is already taken");
        }
        if Self::email_ok(user)
            && user.email != stored.email
            && self.store.email_exists(&user.email).await?
        {
            errs.add("email", "an account with the given email already exists");
        }

        errs.into_result()?;
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tertulia_common::Kind;

    /// In-memory store that records every lookup it serves.
    #[derive(Default)]
    struct MockStore {
        users: Vec<User>,
        taken_usernames: Vec<String>,
        taken_emails: Vec<String>,
        fail: bool,
        calls: Mutex<Vec<String>>,
    }

    impl MockStore {
        fn record(&self, call: impl Into<String>) {
            self.calls.lock().unwrap().push(call.into());
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl UserStore for MockStore {
        async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
            self.record(format!("find_by_id:{id}"));
            Ok(self.users.iter().find(|u| u.id == id).cloned())
        }

        async fn username_exists(&self, username: &str) -> Result<bool> {
            self.record(format!("username_exists:{username}"));
            if self.fail {
                return Err(Error::internal(anyhow::anyhow!("store unavailable")));
            }
            Ok(self.taken_usernames.iter().any(|u| u == username))
        }

        async fn email_exists(&self, email: &str) -> Result<bool> {
            self.record(format!("email_exists:{email}"));
            if self.fail {
                return Err(Error::internal(anyhow::anyhow!("store unavailable")));
            }
            Ok(self.taken_emails.iter().any(|e| e == email))
        }
    }

    fn stored_alice() -> User {
        User {
            id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Luna".to_string(),
            profile_picture: String::new(),
            status_id: 1,
            role_id: 2,
        }
    }

    fn valid_payload() -> UserPayload {
        UserPayload {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "hunter2".to_string(),
            status_id: 1,
            role_id: 2,
            ..Default::default()
        }
    }

    fn validator(store: MockStore) -> (UserValidator, Arc<MockStore>) {
        let store = Arc::new(store);
        (UserValidator::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_structural_failures_aggregate_before_any_lookup() {
        let (validator, store) = validator(MockStore::default());
        let payload = UserPayload::default();

        let error = validator.validate_new_user(&payload).await.unwrap_err();
        assert_eq!(error.kind(), Kind::Validation);
        let Error::Fields(fields) = error else {
            panic!("expected aggregated fields");
        };
        assert!(fields.get("username").is_some());
        assert!(fields.get("email").is_some());
        assert!(fields.get("password").is_some());
        assert!(fields.get("status_id").is_some());
        assert!(fields.get("role_id").is_some());
        // Empty fields never reach the store.
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_email_skips_its_existence_lookup() {
        let (validator, store) = validator(MockStore::default());
        let payload = UserPayload {
            email: "not-an-email".to_string(),
            ..valid_payload()
        };

        let error = validator.validate_new_user(&payload).await.unwrap_err();
        let Error::Fields(fields) = error else {
            panic!("expected aggregated fields");
        };
        assert_eq!(
            fields.get("email").unwrap(),
            &["email address provided is not valid".to_string()]
        );
        // Username passed structure, so it was probed; the email was not.
        assert_eq!(store.calls(), vec!["username_exists:alice".to_string()]);
    }

    #[tokio::test]
    async fn test_taken_username_and_email_both_reported() {
        let (validator, _) = validator(MockStore {
            taken_usernames: vec!["alice".to_string()],
            taken_emails: vec!["alice@example.com".to_string()],
            ..Default::default()
        });

        let error = validator
            .validate_new_user(&valid_payload())
            .await
            .unwrap_err();
        let Error::Fields(fields) = error else {
            panic!("expected aggregated fields");
        };
        assert_eq!(
            fields.get("username").unwrap(),
            &["username is already taken".to_string()]
        );
        assert_eq!(
            fields.get("email").unwrap(),
            &["an account with the given email already exists".to_string()]
        );
    }

    #[tokio::test]
    async fn test_new_user_passes_when_unique() {
        let (validator, _) = validator(MockStore::default());
        assert!(validator.validate_new_user(&valid_payload()).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_skips_lookups_for_unchanged_fields() {
        // Re-saving alice as "alice" must not probe uniqueness at all.
        let (validator, store) = validator(MockStore {
            users: vec![stored_alice()],
            taken_usernames: vec!["alice".to_string()],
            taken_emails: vec!["alice@example.com".to_string()],
            ..Default::default()
        });

        let result = validator.validate_updated_user(1, &valid_payload()).await;
        assert!(result.is_ok());
        assert_eq!(store.calls(), vec!["find_by_id:1".to_string()]);
    }

    #[tokio::test]
    async fn test_update_probes_changed_username() {
        let (validator, store) = validator(MockStore {
            users: vec![stored_alice()],
            taken_usernames: vec!["bob".to_string()],
            ..Default::default()
        });

        let payload = UserPayload {
            username: "bob".to_string(),
            ..valid_payload()
        };
        let error = validator.validate_updated_user(1, &payload).await.unwrap_err();
        let Error::Fields(fields) = error else {
            panic!("expected aggregated fields");
        };
        assert_eq!(
            fields.get("username").unwrap(),
            &["username is already taken".to_string()]
        );
        assert!(store
            .calls()
            .contains(&"username_exists:bob".to_string()));
    }

    #[tokio::test]
    async fn test_update_of_missing_user_is_an_identity_miss() {
        let (validator, _) = validator(MockStore::default());
        let error = validator
            .validate_updated_user(42, &valid_payload())
            .await
            .unwrap_err();
        assert_eq!(error.kind(), Kind::NotFound);
    }

    #[tokio::test]
    async fn test_store_failure_escalates_to_internal_and_short_circuits() {
        let (validator, store) = validator(MockStore {
            fail: true,
            ..Default::default()
        });

        let error = validator
            .validate_new_user(&valid_payload())
            .await
            .unwrap_err();
        assert_eq!(error.kind(), Kind::Internal);
        // The email probe never ran once the username probe failed.
        assert_eq!(store.calls(), vec!["username_exists:alice".to_string()]);
    }
}
