//! Integration tests for Emberkicks.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p emberkicks-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `buyer_journey` - Guest browsing, cart, and checkout end to end
//! - `seller_onboarding` - Registration through verification to visibility
//! - `cart_undo` - The one-slot timed undo buffer
//! - `browse_filters` - The buyer filter over the seeded catalog
//! - `session` - Auth collaborator sync and logout
//!
//! Everything runs against in-process seeded stores; there is no external
//! service to stand up. The [`RecordingAuth`] double plays the external
//! identity provider.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use emberkicks_marketplace::auth::{AuthCollaborator, AuthError, SignupProfile};
use emberkicks_marketplace::{MarketplaceStore, Product, UserProfile};

/// Auth collaborator double: records logout calls and serves a settable
/// authenticated profile.
#[derive(Default)]
pub struct RecordingAuth {
    logouts: AtomicUsize,
    profile: Mutex<Option<UserProfile>>,
}

impl RecordingAuth {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the store has ended a provider session.
    #[must_use]
    pub fn logout_count(&self) -> usize {
        self.logouts.load(Ordering::SeqCst)
    }

    /// Simulate an external sign-in completing.
    pub fn set_profile(&self, profile: Option<UserProfile>) {
        *self.profile.lock().expect("profile mutex poisoned") = profile;
    }
}

#[async_trait]
impl AuthCollaborator for RecordingAuth {
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

    fn logout(&self) {
        self.logouts.fetch_add(1, Ordering::SeqCst);
    }

    fn current_profile(&self) -> Option<UserProfile> {
        self.profile.lock().expect("profile mutex poisoned").clone()
    }
}

/// A freshly seeded store with a disconnected auth collaborator.
#[must_use]
pub fn seeded_store() -> MarketplaceStore {
    MarketplaceStore::new(std::sync::Arc::new(
        emberkicks_marketplace::DisconnectedAuth,
    ))
}

/// Pull a seeded listing out of the catalog by id.
///
/// # Panics
///
/// Panics if the id is not in the seeded catalog.
#[must_use]
pub fn seeded_product(store: &MarketplaceStore, id: &str) -> Product {
    store
        .products()
        .into_iter()
        .find(|p| p.id.as_str() == id)
        .unwrap_or_else(|| panic!("seeded catalog has no listing {id}"))
}
