//! Boundary to the external identity provider.
//!
//! The marketplace never talks to the provider directly beyond this trait:
//! it is told when a session ends and it reads the provider's observable
//! authenticated profile. Sign-in/sign-up forms call the provider through
//! the same trait and translate the categorized errors to user-facing text.

use async_trait::async_trait;
use thiserror::Error;

use emberkicks_core::{EmailError, Role};

use crate::models::UserProfile;

/// Categorized authentication failures.
///
/// The `Display` strings are the messages the calling page shows; nothing
/// here is fatal and every failure is recoverable by re-attempting.
#[derive(Debug, Error)]
pub enum AuthError {
    /// An account already exists for this email.
    #[error("an account with this email already exists")]
    AccountExists,

    /// The email failed structural validation.
    #[error("invalid email address: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The password does not meet the provider's requirements.
    #[error("password is too weak: {0}")]
    WeakPassword(String),

    /// Wrong email or password.
    #[error("no account found with this email or password incorrect")]
    InvalidCredentials,

    /// The provider refused the operation.
    #[error("permission denied by the identity provider")]
    PermissionDenied,

    /// Too many attempts.
    #[error("too many attempts, please try again later")]
    RateLimited,

    /// No provider is configured for this process.
    #[error("no identity provider is configured")]
    Unavailable,
}

/// Profile data submitted alongside external sign-up credentials.
#[derive(Debug, Clone)]
pub struct SignupProfile {
    pub name: String,
    pub role: Role,
}

/// The external authentication provider.
///
/// `login`/`signup` are async round trips to the provider; `logout` and
/// `current_profile` are local session-state operations the store calls
/// synchronously.
#[async_trait]
pub trait AuthCollaborator: Send + Sync {
    /// Authenticate with the provider.
    async fn login(&self, email: &str, password: &str) -> Result<UserProfile, AuthError>;

    /// Create an account with the provider.
    async fn signup(
        &self,
        email: &str,
        password: &str,
        profile: SignupProfile,
    ) -> Result<UserProfile, AuthError>;

    /// End the provider-side session. Idempotent.
    fn logout(&self);

    /// The currently authenticated profile, if the provider has one.
    ///
    /// The store mirrors this into its own `current_user` via
    /// [`crate::store::MarketplaceStore::sync_authenticated_profile`].
    fn current_profile(&self) -> Option<UserProfile>;
}

/// The no-provider default: nothing is ever authenticated externally.
///
/// Local logins (admin, sellers, guests) still work against the store's
/// own registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisconnectedAuth;

#[async_trait]
impl AuthCollaborator for DisconnectedAuth {
    async fn login(&self, _email: &str, _password: &str) -> Result<UserProfile, AuthError> {
        Err(AuthError::Unavailable)
    }

    async fn signup(
        &self,
        _email: &str,
        _password: &str,
        _profile: SignupProfile,
    ) -> Result<UserProfile, AuthError> {
        Err(AuthError::Unavailable)
    }

    fn logout(&self) {}

    fn current_profile(&self) -> Option<UserProfile> {
        None
    }
}
