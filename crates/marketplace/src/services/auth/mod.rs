//! Authentication service.
//!
//! Owns the login/registration rules of the single-slot session state
//! machine. The service resolves users against the catalog store; writing
//! the resolved user to the durable session slot is the route layer's job
//! (see `middleware::auth`), and a failed slot write means the transition
//! is not committed.

mod error;

pub use error::AuthError;

use serde::Deserialize;

use aquarelle_core::{Email, Role};

use crate::catalog::CatalogStore;
use crate::models::{NewUser, Profile, User};

/// Minimum accepted password length. The length gate is the entire
/// credential check; no stored credential is compared.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Registration form data.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterData {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

/// Authentication service.
///
/// Handles user login and registration against the catalog store.
pub struct AuthService<'a> {
    catalog: &'a dyn CatalogStore,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(catalog: &'a dyn CatalogStore) -> Self {
        Self { catalog }
    }

    /// Log in with email and password.
    ///
    /// Succeeds iff a user exists for the email AND the supplied password is
    /// at least [`MIN_PASSWORD_LENGTH`] characters. No stored credential is
    /// compared. Bad credentials - including a malformed email - are a
    /// failure value, never a fault.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email/password is
    /// rejected, or `AuthError::Catalog` on a store fault.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let Ok(email) = Email::parse(email) else {
            return Err(AuthError::InvalidCredentials);
        };

        let user = self
            .catalog
            .find_user_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Register a new account.
    ///
    /// Fails with a distinct duplicate indicator if the email is already
    /// registered; password content is otherwise unchecked at this layer.
    /// On success the store holds a user with the role-appropriate default
    /// profile.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::EmailTaken` if the email is already registered.
    /// Returns `AuthError::Catalog` on a store fault.
    pub async fn register(&self, data: RegisterData) -> Result<User, AuthError> {
        let email = Email::parse(&data.email)?;

        if self.catalog.find_user_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let user = self
            .catalog
            .create_user(NewUser {
                email,
                name: data.name,
                avatar: None,
                profile: Profile::default_for(data.role),
            })
            .await?;

        Ok(user)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;

    fn register_data(email: &str, role: Role) -> RegisterData {
        RegisterData {
            email: email.to_owned(),
            password: "abcdef".to_owned(),
            name: "N".to_owned(),
            role,
        }
    }

    #[tokio::test]
    async fn test_login_unknown_email_fails() {
        let catalog = MemoryCatalog::with_sample_data();
        let auth = AuthService::new(&catalog);

        let result = auth.login("unknown@x.com", "abcdef").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_short_password_fails_for_existing_email() {
        let catalog = MemoryCatalog::with_sample_data();
        let auth = AuthService::new(&catalog);

        for password in ["", "a", "12345"] {
            let result = auth.login("emma.waters@example.com", password).await;
            assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        }
    }

    #[tokio::test]
    async fn test_login_succeeds_with_existing_email_and_long_password() {
        let catalog = MemoryCatalog::with_sample_data();
        let auth = AuthService::new(&catalog);

        let user = auth
            .login("emma.waters@example.com", "abcdef")
            .await
            .unwrap();
        assert_eq!(user.name, "Emma Waters");
        assert_eq!(user.role(), Role::Artist);
    }

    #[tokio::test]
    async fn test_login_malformed_email_is_invalid_credentials() {
        let catalog = MemoryCatalog::with_sample_data();
        let auth = AuthService::new(&catalog);

        let result = auth.login("not-an-email", "abcdef").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_register_creates_customer_with_empty_profile() {
        let catalog = MemoryCatalog::new();
        let auth = AuthService::new(&catalog);

        let user = auth
            .register(register_data("new@x.com", Role::Customer))
            .await
            .unwrap();

        assert_eq!(user.role(), Role::Customer);
        let profile = user.customer_profile().unwrap();
        assert!(profile.favorite_styles.is_empty());
        assert!(profile.purchase_history.is_empty());
        assert!(profile.wishlist.is_empty());

        // The store observes the new user.
        let found = catalog
            .find_user_by_email(&Email::parse("new@x.com").unwrap())
            .await
            .unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn test_register_artist_gets_not_accepting_commission_defaults() {
        let catalog = MemoryCatalog::new();
        let auth = AuthService::new(&catalog);

        let user = auth
            .register(register_data("painter@x.com", Role::Artist))
            .await
            .unwrap();

        let profile = user.artist_profile().unwrap();
        assert!(profile.bio.is_empty());
        assert!(profile.specialties.is_empty());
        assert!(!profile.commission_settings.is_accepting);
        assert!(profile.portfolio.is_empty());
    }

    #[tokio::test]
    async fn test_register_duplicate_email_fails_and_leaves_store_unchanged() {
        let catalog = MemoryCatalog::with_sample_data();
        let auth = AuthService::new(&catalog);
        let before = catalog.list_artists().await.unwrap().len();

        let result = auth
            .register(register_data("emma.waters@example.com", Role::Artist))
            .await;
        assert!(matches!(result, Err(AuthError::EmailTaken)));

        let after = catalog.list_artists().await.unwrap().len();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_register_does_not_gate_on_password_content() {
        let catalog = MemoryCatalog::new();
        let auth = AuthService::new(&catalog);

        let mut data = register_data("short@x.com", Role::Customer);
        data.password = "x".to_owned();
        assert!(auth.register(data).await.is_ok());
    }
}
