//! The marketplace store: single source of truth for session identity,
//! the seller/product catalogs, and the cart.
//!
//! Every state change goes through a named operation on
//! [`MarketplaceStore`] so mutations stay auditable. The handle is cheaply
//! cloneable (an `Arc`-wrapped inner, shared-application-state style);
//! operations run synchronously to completion and are atomic from the
//! caller's perspective.
//!
//! The only time-based transition in the system is the undo buffer: the
//! most recently removed cart row stays restorable for a fixed window,
//! after which a scheduled task clears it. The task is aborted when a newer
//! removal supersedes it and additionally guards on the buffered item's id,
//! so a stale timer can never clear a newer entry.

use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};
use tokio::task::JoinHandle;
use tracing::instrument;
use uuid::Uuid;

use emberkicks_core::{Email, ProductId, SellerId, UserId};

use crate::auth::AuthCollaborator;
use crate::browse::{ProductFilter, filter_products};
use crate::cart::{Cart, CartItem};
use crate::models::{AdminProfile, CurrentUser, NewProduct, Product, SellerProfile, UserProfile};
use crate::seed;

/// How long a removed cart row stays restorable.
pub const UNDO_WINDOW: Duration = Duration::from_secs(5);

struct StoreInner {
    current_user: Option<CurrentUser>,
    admin: AdminProfile,
    sellers: Vec<SellerProfile>,
    products: Vec<Product>,
    cart: Cart,
    last_removed: Option<CartItem>,
    undo_timer: Option<JoinHandle<()>>,
}

/// Cheaply cloneable handle to the marketplace state.
///
/// Constructed with the external [`AuthCollaborator`] and seeded from the
/// mock catalog. All state is process-lifetime only.
#[derive(Clone)]
pub struct MarketplaceStore {
    inner: Arc<Mutex<StoreInner>>,
    auth: Arc<dyn AuthCollaborator>,
    undo_window: Duration,
}

impl MarketplaceStore {
    /// Create a store seeded with the mock catalog.
    #[must_use]
    pub fn new(auth: Arc<dyn AuthCollaborator>) -> Self {
        Self::with_undo_window(auth, UNDO_WINDOW)
    }

    /// Create a store with a custom undo window (tests and demos).
    #[must_use]
    pub fn with_undo_window(auth: Arc<dyn AuthCollaborator>, undo_window: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                current_user: None,
                admin: seed::admin(),
                sellers: seed::sellers(),
                products: seed::products(),
                cart: Cart::new(),
                last_removed: None,
                undo_timer: None,
            })),
            auth,
            undo_window,
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        lock_inner(&self.inner)
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Sign in against the local registry: the admin singleton first, then
    /// the seller list, by exact email/password equality.
    ///
    /// Returns whether a match was found; never fails otherwise.
    #[instrument(skip(self, password))]
    pub fn login(&self, email: &str, password: &str) -> bool {
        let mut inner = self.lock();

        if inner.admin.email.as_str() == email && inner.admin.password.expose_secret() == password {
            tracing::info!(user = %inner.admin.id, "admin signed in");
            inner.current_user = Some(CurrentUser::Admin(inner.admin.clone()));
            return true;
        }

        let seller = inner
            .sellers
            .iter()
            .find(|s| s.email.as_str() == email && s.password.expose_secret() == password)
            .cloned();
        if let Some(seller) = seller {
            tracing::info!(seller = %seller.id, "seller signed in");
            inner.current_user = Some(CurrentUser::Seller(seller));
            return true;
        }

        tracing::debug!("local sign-in failed");
        false
    }

    /// Start an ephemeral guest session with a fresh unique id.
    #[instrument(skip(self))]
    pub fn guest_login(&self) {
        let profile = UserProfile {
            id: UserId::new(format!("guest-{}", Uuid::new_v4())),
            name: "Guest Buyer".to_owned(),
            email: None,
        };
        tracing::info!(user = %profile.id, "guest session started");
        self.lock().current_user = Some(CurrentUser::Guest(profile));
    }

    /// Mirror the auth collaborator's observable authenticated profile into
    /// `current_user`. Externally authenticated profiles enter as buyers;
    /// when the collaborator reports no profile, the local identity is left
    /// untouched.
    pub fn sync_authenticated_profile(&self) {
        if let Some(profile) = self.auth.current_profile() {
            tracing::info!(user = %profile.id, "adopted externally authenticated profile");
            self.lock().current_user = Some(CurrentUser::Buyer(profile));
        }
    }

    /// End the session: notify the auth collaborator, then clear the local
    /// identity and the cart. Idempotent.
    #[instrument(skip(self))]
    pub fn logout(&self) {
        self.auth.logout();
        let mut inner = self.lock();
        inner.current_user = None;
        inner.cart.clear();
        tracing::info!("session ended");
    }

    /// The signed-in identity, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<CurrentUser> {
        self.lock().current_user.clone()
    }

    // =========================================================================
    // Sellers
    // =========================================================================

    /// Register a new seller and sign them in.
    ///
    /// The seller starts unverified, so their listings stay out of the
    /// buyer catalog until [`Self::verify_seller`] is called.
    #[instrument(skip(self, password))]
    pub fn register_seller(
        &self,
        name: &str,
        email: Email,
        password: &str,
        business_name: &str,
    ) -> SellerId {
        let seller = SellerProfile {
            id: SellerId::generate(),
            name: name.to_owned(),
            email,
            password: SecretString::from(password.to_owned()),
            business_name: business_name.to_owned(),
            is_verified: false,
            joined_date: Utc::now().date_naive(),
        };
        let id = seller.id.clone();
        tracing::info!(seller = %id, business = %seller.business_name, "seller registered");

        let mut inner = self.lock();
        inner.sellers.push(seller.clone());
        inner.current_user = Some(CurrentUser::Seller(seller));
        id
    }

    /// Mark a seller as verified. No-op if the id is unknown.
    #[instrument(skip(self))]
    pub fn verify_seller(&self, seller_id: &SellerId) {
        let mut inner = self.lock();
        if let Some(seller) = inner.sellers.iter_mut().find(|s| &s.id == seller_id) {
            seller.is_verified = true;
            tracing::info!(seller = %seller_id, "seller verified");
        }
    }

    /// Look up a seller. Used pervasively to gate product visibility.
    #[must_use]
    pub fn get_seller_by_id(&self, seller_id: &SellerId) -> Option<SellerProfile> {
        self.lock()
            .sellers
            .iter()
            .find(|s| &s.id == seller_id)
            .cloned()
    }

    /// All sellers, in registration order.
    #[must_use]
    pub fn sellers(&self) -> Vec<SellerProfile> {
        self.lock().sellers.clone()
    }

    /// Sellers awaiting verification (the admin portal's queue).
    #[must_use]
    pub fn pending_sellers(&self) -> Vec<SellerProfile> {
        self.lock()
            .sellers
            .iter()
            .filter(|s| !s.is_verified)
            .cloned()
            .collect()
    }

    /// Verified sellers.
    #[must_use]
    pub fn verified_sellers(&self) -> Vec<SellerProfile> {
        self.lock()
            .sellers
            .iter()
            .filter(|s| s.is_verified)
            .cloned()
            .collect()
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// List a new product with a freshly generated id.
    ///
    /// Field content is trusted as-is (the submitting form validates).
    #[instrument(skip(self, draft), fields(seller = %draft.seller_id, title = %draft.title))]
    pub fn add_product(&self, draft: NewProduct) -> ProductId {
        let id = ProductId::generate();
        let product = draft.into_product(id.clone());
        tracing::info!(product = %id, "product listed");
        self.lock().products.push(product);
        id
    }

    /// The full catalog, unfiltered.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.lock().products.clone()
    }

    /// A seller's own listings (the dashboard inventory view).
    #[must_use]
    pub fn products_by_seller(&self, seller_id: &SellerId) -> Vec<Product> {
        self.lock()
            .products
            .iter()
            .filter(|p| &p.seller_id == seller_id)
            .cloned()
            .collect()
    }

    /// The buyer-visible listing under the given facet state.
    #[must_use]
    pub fn browse(&self, filter: &ProductFilter) -> Vec<Product> {
        let inner = self.lock();
        filter_products(&inner.products, &inner.sellers, filter)
            .into_iter()
            .cloned()
            .collect()
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add a product to the cart, merging into an existing row if present.
    #[instrument(skip(self, product), fields(product = %product.id))]
    pub fn add_to_cart(&self, product: Product) {
        tracing::info!("added to cart");
        self.lock().cart.add(product);
    }

    /// Remove a cart row entirely, park it in the one-slot undo buffer, and
    /// schedule the buffer to clear after the undo window.
    ///
    /// Only the most recent removal is restorable: a second removal
    /// overwrites the slot (and cancels the earlier clearing task), losing
    /// the first removal for good. No-op if the product is not in the cart.
    #[instrument(skip(self))]
    pub fn remove_from_cart(&self, product_id: &ProductId) {
        let mut inner = self.lock();
        let Some(item) = inner.cart.remove(product_id) else {
            return;
        };
        tracing::info!(quantity = item.quantity, "removed from cart");

        if let Some(timer) = inner.undo_timer.take() {
            timer.abort();
        }
        inner.last_removed = Some(item);
        inner.undo_timer = Some(spawn_undo_expiry(
            Arc::downgrade(&self.inner),
            product_id.clone(),
            self.undo_window,
        ));
    }

    /// Restore the buffered removal to the end of the cart and clear the
    /// buffer. No-op if the buffer is empty.
    #[instrument(skip(self))]
    pub fn undo_remove_from_cart(&self) {
        let mut inner = self.lock();
        let Some(item) = inner.last_removed.take() else {
            return;
        };
        if let Some(timer) = inner.undo_timer.take() {
            timer.abort();
        }
        tracing::info!(product = %item.product.id, "removal undone");
        inner.cart.restore(item);
    }

    /// Empty the cart. The undo buffer is left alone.
    #[instrument(skip(self))]
    pub fn clear_cart(&self) {
        tracing::info!("cart cleared");
        self.lock().cart.clear();
    }

    /// A snapshot of the cart.
    #[must_use]
    pub fn cart(&self) -> Cart {
        self.lock().cart.clone()
    }

    /// Sum of quantities across cart rows (the bag badge).
    #[must_use]
    pub fn cart_item_count(&self) -> u32 {
        self.lock().cart.total_quantity()
    }

    /// The buffered removal, if one is still within its undo window.
    #[must_use]
    pub fn last_removed_item(&self) -> Option<CartItem> {
        self.lock().last_removed.clone()
    }
}

fn lock_inner(inner: &Mutex<StoreInner>) -> MutexGuard<'_, StoreInner> {
    inner.lock().expect("marketplace store mutex poisoned")
}

/// Schedule the undo-buffer clear for one specific removal.
///
/// The task holds only a weak reference so a dropped store is not kept
/// alive by its timer, and it re-checks the buffered item's id when it
/// fires: if a newer removal (or an undo) got there first, it does nothing.
fn spawn_undo_expiry(
    inner: Weak<Mutex<StoreInner>>,
    scheduled_for: ProductId,
    window: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(window).await;
        let Some(inner) = inner.upgrade() else {
            return;
        };
        let mut inner = lock_inner(&inner);
        let still_buffered = inner
            .last_removed
            .as_ref()
            .is_some_and(|item| item.product.id == scheduled_for);
        if still_buffered {
            tracing::debug!(product = %scheduled_for, "undo window elapsed, buffer cleared");
            inner.last_removed = None;
            inner.undo_timer = None;
        }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::auth::{AuthError, DisconnectedAuth, SignupProfile};

    use super::*;

    fn store() -> MarketplaceStore {
        MarketplaceStore::new(Arc::new(DisconnectedAuth))
    }

    fn seeded_product(store: &MarketplaceStore, id: &str) -> Product {
        store
            .products()
            .into_iter()
            .find(|p| p.id.as_str() == id)
            .unwrap()
    }

    #[tokio::test]
    async fn test_login_admin_then_sellers() {
        let store = store();

        assert!(store.login("admin@emberkicks.com", "admin"));
        assert_eq!(
            store.current_user().unwrap().role(),
            emberkicks_core::Role::Admin
        );

        assert!(store.login("mike@soles.com", "password123"));
        assert_eq!(store.current_user().unwrap().id(), "s1");

        assert!(!store.login("mike@soles.com", "wrong"));
        assert!(!store.login("nobody@example.com", "password123"));
    }

    #[tokio::test]
    async fn test_guest_login_is_ephemeral_buyer() {
        let store = store();
        store.guest_login();
        let user = store.current_user().unwrap();
        assert_eq!(user.role(), emberkicks_core::Role::Guest);
        assert!(user.id().starts_with("guest-"));

        store.guest_login();
        let second = store.current_user().unwrap();
        assert_ne!(user.id(), second.id());
    }

    #[tokio::test]
    async fn test_register_then_verify_seller() {
        let store = store();
        let id = store.register_seller(
            "Ana Laces",
            Email::parse("ana@laces.com").unwrap(),
            "hunter2hunter2",
            "Laces & Co",
        );

        let seller = store.get_seller_by_id(&id).unwrap();
        assert!(!seller.is_verified);
        assert_eq!(store.current_user().unwrap().id(), id.as_str());
        assert_eq!(store.pending_sellers().len(), 2); // s2 plus the new one

        store.verify_seller(&id);
        assert!(store.get_seller_by_id(&id).unwrap().is_verified);

        // Unknown ids are silently ignored
        store.verify_seller(&SellerId::new("s-missing"));
    }

    #[tokio::test]
    async fn test_add_to_cart_merges_by_product_id() {
        let store = store();
        let p1 = seeded_product(&store, "p1");

        store.add_to_cart(p1.clone());
        store.add_to_cart(p1);

        let cart = store.cart();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items().first().unwrap().quantity, 2);
        assert_eq!(store.cart_item_count(), 2);
    }

    #[tokio::test]
    async fn test_remove_then_undo_restores_quantity() {
        let store = store();
        let p1 = seeded_product(&store, "p1");
        store.add_to_cart(p1.clone());
        store.add_to_cart(p1.clone());

        store.remove_from_cart(&p1.id);
        assert!(store.cart().is_empty());
        assert_eq!(store.last_removed_item().unwrap().quantity, 2);

        store.undo_remove_from_cart();
        let cart = store.cart();
        assert_eq!(cart.items().first().unwrap().quantity, 2);
        assert!(store.last_removed_item().is_none());
    }

    #[tokio::test]
    async fn test_undo_with_empty_buffer_is_noop() {
        let store = store();
        let p1 = seeded_product(&store, "p1");
        store.add_to_cart(p1);

        store.undo_remove_from_cart();
        assert_eq!(store.cart().len(), 1);
    }

    #[tokio::test]
    async fn test_second_removal_overwrites_undo_slot() {
        let store = store();
        let p1 = seeded_product(&store, "p1");
        let p2 = seeded_product(&store, "p2");
        store.add_to_cart(p1.clone());
        store.add_to_cart(p2.clone());

        store.remove_from_cart(&p1.id);
        store.remove_from_cart(&p2.id);

        // Only the most recent removal is restorable
        assert_eq!(store.last_removed_item().unwrap().product.id, p2.id);
        store.undo_remove_from_cart();
        let cart = store.cart();
        let ids: Vec<&str> = cart
            .items()
            .iter()
            .map(|i| i.product.id.as_str())
            .collect();
        assert_eq!(ids, ["p2"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_undo_buffer_expires_after_window() {
        let store = store();
        let p1 = seeded_product(&store, "p1");
        store.add_to_cart(p1.clone());
        store.remove_from_cart(&p1.id);

        tokio::time::sleep(UNDO_WINDOW + Duration::from_secs(1)).await;

        assert!(store.last_removed_item().is_none());
        store.undo_remove_from_cart();
        assert!(store.cart().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_timer_cannot_clear_newer_entry() {
        let store = store();
        let p1 = seeded_product(&store, "p1");
        let p2 = seeded_product(&store, "p2");
        store.add_to_cart(p1.clone());
        store.add_to_cart(p2.clone());

        store.remove_from_cart(&p1.id);
        tokio::time::sleep(Duration::from_secs(3)).await;
        store.remove_from_cart(&p2.id);

        // Past the first removal's deadline, inside the second's window
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(store.last_removed_item().unwrap().product.id, p2.id);

        // And the second window still expires on its own schedule
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(store.last_removed_item().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_undone_removal_does_not_expire() {
        let store = store();
        let p1 = seeded_product(&store, "p1");
        store.add_to_cart(p1.clone());
        store.remove_from_cart(&p1.id);
        store.undo_remove_from_cart();

        tokio::time::sleep(UNDO_WINDOW + Duration::from_secs(1)).await;
        assert_eq!(store.cart().len(), 1);
    }

    #[tokio::test]
    async fn test_clear_cart_leaves_undo_buffer() {
        let store = store();
        let p1 = seeded_product(&store, "p1");
        let p2 = seeded_product(&store, "p2");
        store.add_to_cart(p1.clone());
        store.add_to_cart(p2);
        store.remove_from_cart(&p1.id);

        store.clear_cart();
        assert!(store.cart().is_empty());
        assert!(store.last_removed_item().is_some());
    }

    /// Auth collaborator double that records logout calls and serves a
    /// settable profile.
    struct RecordingAuth {
        logouts: AtomicUsize,
        profile: Option<UserProfile>,
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
            self.profile.clone()
        }
    }

    #[tokio::test]
    async fn test_logout_notifies_collaborator_and_clears_state() {
        let auth = Arc::new(RecordingAuth {
            logouts: AtomicUsize::new(0),
            profile: None,
        });
        let store = MarketplaceStore::new(auth.clone());
        store.guest_login();
        store.add_to_cart(seeded_product(&store, "p1"));

        store.logout();
        assert!(store.current_user().is_none());
        assert!(store.cart().is_empty());
        assert_eq!(auth.logouts.load(Ordering::SeqCst), 1);

        // Idempotent
        store.logout();
        assert!(store.current_user().is_none());
        assert_eq!(auth.logouts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_sync_authenticated_profile_enters_as_buyer() {
        let profile = UserProfile {
            id: UserId::new("u-remote-1"),
            name: "Riley Shopper".to_owned(),
            email: Some(Email::parse("riley@example.com").unwrap()),
        };
        let auth = Arc::new(RecordingAuth {
            logouts: AtomicUsize::new(0),
            profile: Some(profile),
        });
        let store = MarketplaceStore::new(auth);

        store.sync_authenticated_profile();
        let user = store.current_user().unwrap();
        assert_eq!(user.role(), emberkicks_core::Role::Buyer);
        assert_eq!(user.id(), "u-remote-1");
    }

    #[tokio::test]
    async fn test_sync_without_profile_keeps_local_identity() {
        let store = store();
        store.guest_login();
        let before = store.current_user().unwrap().id().to_owned();

        store.sync_authenticated_profile();
        assert_eq!(store.current_user().unwrap().id(), before);
    }
}
