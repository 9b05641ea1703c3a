//! Product listings.

use serde::{Deserialize, Serialize};

use emberkicks_core::{Category, Condition, Price, ProductId, SellerId};

/// A catalog listing.
///
/// `seller_id` is a non-owning reference: a listing whose seller has
/// disappeared is tolerated and simply never passes the buyer-visibility
/// gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub seller_id: SellerId,
    pub title: String,
    pub price: Price,
    /// Image URL.
    pub image: String,
    pub description: String,
    /// Free-form size label (e.g., "10 US", "4Y").
    pub size: String,
    pub condition: Condition,
    pub category: Category,
    #[serde(default)]
    pub on_sale: bool,
}

/// A listing as submitted by a seller, before an id is assigned.
///
/// Field content is trusted as-is; required-field validation happens in
/// the submitting form layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub seller_id: SellerId,
    pub title: String,
    pub price: Price,
    pub image: String,
    pub description: String,
    pub size: String,
    pub condition: Condition,
    pub category: Category,
    #[serde(default)]
    pub on_sale: bool,
}

impl NewProduct {
    /// Attach a freshly generated id, producing a catalog [`Product`].
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            seller_id: self.seller_id,
            title: self.title,
            price: self.price,
            image: self.image,
            description: self.description,
            size: self.size,
            condition: self.condition,
            category: self.category,
            on_sale: self.on_sale,
        }
    }
}
