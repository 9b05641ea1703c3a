//! Browse the buyer-visible catalog.

use std::sync::Arc;

use tracing::info;

use emberkicks_core::Category;
use emberkicks_marketplace::{DisconnectedAuth, MarketplaceStore, PriceBand, ProductFilter};

/// Apply the buyer filter to the seeded catalog and log the result.
pub fn run(category: Option<Category>, sale: bool, genders: &[Category], bands: &[PriceBand]) {
    let store = MarketplaceStore::new(Arc::new(DisconnectedAuth));

    let mut filter = ProductFilter::new();
    filter.set_category(category);
    filter.set_sale_only(sale);
    for gender in genders {
        filter.toggle_gender(*gender);
    }
    for band in bands {
        filter.toggle_price_band(*band);
    }

    let visible = store.browse(&filter);
    info!(
        total = store.products().len(),
        visible = visible.len(),
        "buyer-visible catalog"
    );

    for product in visible {
        let business = store
            .get_seller_by_id(&product.seller_id)
            .map_or_else(|| "(unknown seller)".to_owned(), |s| s.business_name);
        info!(
            id = %product.id,
            price = %product.price,
            category = %product.category,
            condition = %product.condition,
            sale = product.on_sale,
            seller = %business,
            "{}",
            product.title
        );
    }
}
