//! Buyer-facing product filtering.
//!
//! A pure, re-entrant derivation: nothing here is cached or stored, the
//! visible listing is recomputed from (catalog, facet state) on every
//! query. Catalogs are small enough that this is always cheap.

use serde::{Deserialize, Serialize};

use emberkicks_core::{Category, Price};

use crate::models::{Product, SellerProfile};

/// A price band facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriceBand {
    /// price < $100
    Under100,
    /// $100 <= price <= $150
    #[serde(rename = "100to150")]
    From100To150,
    /// price > $150
    Over150,
}

impl PriceBand {
    /// All bands, in display order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Under100, Self::From100To150, Self::Over150]
    }

    /// Whether a price falls inside this band.
    #[must_use]
    pub fn contains(self, price: Price) -> bool {
        match self {
            Self::Under100 => price < Price::from_dollars(100),
            Self::From100To150 => {
                price >= Price::from_dollars(100) && price <= Price::from_dollars(150)
            }
            Self::Over150 => price > Price::from_dollars(150),
        }
    }
}

impl std::fmt::Display for PriceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Under100 => write!(f, "under100"),
            Self::From100To150 => write!(f, "100to150"),
            Self::Over150 => write!(f, "over150"),
        }
    }
}

impl std::str::FromStr for PriceBand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "under100" => Ok(Self::Under100),
            "100to150" => Ok(Self::From100To150),
            "over150" => Ok(Self::Over150),
            _ => Err(format!("invalid price band: {s}")),
        }
    }
}

/// Facet state for the buyer listing.
///
/// The category query parameter and the gender facet set are coupled:
/// navigating to a category resets the gender facets to mirror it, and the
/// gender facets are only consulted when no category parameter is active.
/// Empty facet sets mean "no filter", never "nothing matches".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductFilter {
    category: Option<Category>,
    sale_only: bool,
    genders: Vec<Category>,
    price_bands: Vec<PriceBand>,
}

impl ProductFilter {
    /// A filter that passes every verified listing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the category query parameter.
    ///
    /// Changing the parameter resets the gender facet selection to mirror
    /// it, so leaving the category later starts from a clean facet state.
    pub fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
        self.genders = category.into_iter().collect();
    }

    /// Restrict results to on-sale listings.
    pub const fn set_sale_only(&mut self, sale_only: bool) {
        self.sale_only = sale_only;
    }

    /// Toggle a gender facet checkbox.
    pub fn toggle_gender(&mut self, gender: Category) {
        if let Some(index) = self.genders.iter().position(|g| *g == gender) {
            self.genders.remove(index);
        } else {
            self.genders.push(gender);
        }
    }

    /// Toggle a price band checkbox.
    pub fn toggle_price_band(&mut self, band: PriceBand) {
        if let Some(index) = self.price_bands.iter().position(|b| *b == band) {
            self.price_bands.remove(index);
        } else {
            self.price_bands.push(band);
        }
    }

    #[must_use]
    pub const fn category(&self) -> Option<Category> {
        self.category
    }

    #[must_use]
    pub const fn is_sale_only(&self) -> bool {
        self.sale_only
    }

    #[must_use]
    pub fn genders(&self) -> &[Category] {
        &self.genders
    }

    #[must_use]
    pub fn price_bands(&self) -> &[PriceBand] {
        &self.price_bands
    }

    /// Apply the predicate to one listing.
    ///
    /// Clauses run in a fixed order and short-circuit on the first failure:
    /// seller gate, category parameter, sale parameter, gender facets (only
    /// without a category parameter), price bands. `Unisex` listings pass
    /// any specific category or gender clause.
    #[must_use]
    pub fn matches(&self, product: &Product, seller: Option<&SellerProfile>) -> bool {
        // 1. Seller must exist and be verified
        if !seller.is_some_and(|s| s.is_verified) {
            return false;
        }

        // 2. Category query parameter (Unisex always passes)
        if self.category.is_some_and(|category| {
            product.category != category && product.category != Category::Unisex
        }) {
            return false;
        }

        // 3. Sale query parameter
        if self.sale_only && !product.on_sale {
            return false;
        }

        // 4. Gender facets, only when no category parameter is active
        if self.category.is_none()
            && !self.genders.is_empty()
            && !self.genders.contains(&product.category)
            && product.category != Category::Unisex
        {
            return false;
        }

        // 5. Price bands
        if !self.price_bands.is_empty()
            && !self
                .price_bands
                .iter()
                .any(|band| band.contains(product.price))
        {
            return false;
        }

        true
    }
}

/// Compute the buyer-visible listing for a catalog.
///
/// Pure over its inputs; callers re-run it whenever catalog or facet state
/// changes.
#[must_use]
pub fn filter_products<'a>(
    products: &'a [Product],
    sellers: &[SellerProfile],
    filter: &ProductFilter,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| {
            let seller = sellers.iter().find(|s| s.id == product.seller_id);
            filter.matches(product, seller)
        })
        .collect()
}
