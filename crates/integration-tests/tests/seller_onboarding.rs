//! Seller registration through admin verification to buyer visibility.

use emberkicks_core::{Category, Condition, Price, Role, SellerId};
use emberkicks_integration_tests::seeded_store;
use emberkicks_marketplace::{MarketplaceStore, NewProduct, ProductFilter};

fn register_ana(store: &MarketplaceStore) -> SellerId {
    store.register_seller(
        "Ana Laces",
        "ana@laces.com".parse().expect("valid email"),
        "hunter2hunter2",
        "Laces & Co",
    )
}

#[tokio::test]
async fn test_new_seller_is_signed_in_and_pending() {
    let store = seeded_store();
    let id = register_ana(&store);

    let user = store.current_user().expect("seller signed in");
    assert_eq!(user.role(), Role::Seller);
    assert_eq!(user.id(), id.as_str());

    let seller = store.get_seller_by_id(&id).expect("seller registered");
    assert!(!seller.is_verified);
    assert!(
        store.pending_sellers().iter().any(|s| s.id == id),
        "new seller appears in the admin queue"
    );
}

#[tokio::test]
async fn test_listings_hidden_until_verified() {
    let store = seeded_store();
    let seller_id = register_ana(&store);

    let product_id = store.add_product(NewProduct {
        seller_id: seller_id.clone(),
        title: "Court Vision Mid".to_owned(),
        price: Price::from_dollars(95),
        image: "https://picsum.photos/400/400?random=10".to_owned(),
        description: "Crisp court classic.".to_owned(),
        size: "9 US".to_owned(),
        condition: Condition::New,
        category: Category::Unisex,
        on_sale: false,
    });

    // The seller sees their own inventory either way
    let inventory = store.products_by_seller(&seller_id);
    assert_eq!(inventory.len(), 1);

    // Buyers do not, until the admin approves
    let everything = ProductFilter::new();
    assert!(!store.browse(&everything).iter().any(|p| p.id == product_id));

    store.verify_seller(&seller_id);
    assert!(store.browse(&everything).iter().any(|p| p.id == product_id));
    assert!(store.verified_sellers().iter().any(|s| s.id == seller_id));
}

#[tokio::test]
async fn test_registered_seller_can_sign_back_in() {
    let store = seeded_store();
    register_ana(&store);
    store.logout();
    assert!(store.current_user().is_none());

    assert!(store.login("ana@laces.com", "hunter2hunter2"));
    assert_eq!(store.current_user().expect("signed in").role(), Role::Seller);

    assert!(!store.login("ana@laces.com", "wrong-password"));
}

#[tokio::test]
async fn test_verifying_unknown_seller_is_noop() {
    let store = seeded_store();
    let before = store.pending_sellers().len();
    store.verify_seller(&SellerId::new("s-unknown"));
    assert_eq!(store.pending_sellers().len(), before);
    assert!(store.get_seller_by_id(&SellerId::new("s-unknown")).is_none());
}
