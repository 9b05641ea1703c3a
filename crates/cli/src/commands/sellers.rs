//! List the seller registry.

use std::sync::Arc;

use tracing::info;

use emberkicks_marketplace::{DisconnectedAuth, MarketplaceStore, SellerProfile};

/// Log pending and verified sellers, the way the admin portal splits them.
pub fn run() {
    let store = MarketplaceStore::new(Arc::new(DisconnectedAuth));

    let pending = store.pending_sellers();
    info!(count = pending.len(), "pending applications");
    for seller in &pending {
        log_seller(seller);
    }

    let verified = store.verified_sellers();
    info!(count = verified.len(), "verified sellers");
    for seller in &verified {
        log_seller(seller);
    }
}

fn log_seller(seller: &SellerProfile) {
    info!(
        id = %seller.id,
        contact = %seller.name,
        email = %seller.email,
        joined = %seller.joined_date,
        "{}",
        seller.business_name
    );
}
