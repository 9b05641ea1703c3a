//! Scripted end-to-end walkthrough.
//!
//! Drives every store operation once: a guest buyer filling and repairing
//! a cart, checkout, then a seller registering a listing that only becomes
//! visible after admin verification.

use std::sync::Arc;

use tracing::info;

use emberkicks_core::{Category, Condition, Email, Price, ProductId};
use emberkicks_marketplace::{
    CheckoutFlow, DisconnectedAuth, MarketplaceStore, NewProduct, ProductFilter,
};

/// Run the walkthrough against a freshly seeded store.
///
/// # Errors
///
/// Returns an error if a scripted email fails to parse.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = MarketplaceStore::new(Arc::new(DisconnectedAuth));

    buyer_journey(&store).await?;
    seller_journey(&store);

    info!("walkthrough complete");
    Ok(())
}

async fn buyer_journey(store: &MarketplaceStore) -> Result<(), Box<dyn std::error::Error>> {
    info!("--- buyer journey ---");
    store.guest_login();

    let mut filter = ProductFilter::new();
    filter.set_category(Some(Category::Men));
    let mens = store.browse(&filter);
    info!(visible = mens.len(), "browsing the Men's collection");

    // Two of the first listing, one of the second
    let Some(first) = mens.first().cloned() else {
        info!("nothing visible, skipping cart demo");
        return Ok(());
    };
    store.add_to_cart(first.clone());
    store.add_to_cart(first.clone());
    if let Some(second) = mens.get(1) {
        store.add_to_cart(second.clone());
    }
    info!(items = store.cart_item_count(), "bag filled");

    // Remove, think better of it, undo within the window
    store.remove_from_cart(&first.id);
    info!(
        buffered = ?store.last_removed_item().map(|item| item.product.title),
        "removed a row"
    );
    store.undo_remove_from_cart();
    info!(items = store.cart_item_count(), "removal undone");

    let mut checkout = CheckoutFlow::new();
    checkout.continue_with_email(Email::parse("buyer@example.com")?);
    if let Some(confirmation) = checkout.place_order(store).await {
        info!(
            items = confirmation.item_count,
            subtotal = %confirmation.totals.subtotal,
            shipping = %confirmation.totals.shipping,
            total = %confirmation.totals.total,
            "order confirmed"
        );
    }

    store.logout();
    Ok(())
}

fn seller_journey(store: &MarketplaceStore) {
    info!("--- seller journey ---");
    let seller_id = store.register_seller(
        "Ana Laces",
        Email::parse("ana@laces.com").expect("demo email is valid"),
        "hunter2hunter2",
        "Laces & Co",
    );

    let product_id = store.add_product(NewProduct {
        seller_id: seller_id.clone(),
        title: "Court Vision Mid".to_owned(),
        price: Price::from_dollars(95),
        image: "https://picsum.photos/400/400?random=10".to_owned(),
        description: "Crisp court classic, barely worn.".to_owned(),
        size: "9 US".to_owned(),
        condition: Condition::Used,
        category: Category::Unisex,
        on_sale: false,
    });

    let everything = ProductFilter::new();
    info!(
        visible = visible_to_buyers(store, &everything, &product_id),
        "listing visibility before verification"
    );

    store.verify_seller(&seller_id);
    info!(
        visible = visible_to_buyers(store, &everything, &product_id),
        "listing visibility after verification"
    );

    store.logout();
}

fn visible_to_buyers(store: &MarketplaceStore, filter: &ProductFilter, id: &ProductId) -> bool {
    store.browse(filter).iter().any(|p| &p.id == id)
}
