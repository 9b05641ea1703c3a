//! Emberkicks Marketplace - in-memory storefront state.
//!
//! This crate owns all marketplace state for a single session process:
//! the current identity, the seller registry, the product catalog, the
//! shopping cart, and the one-slot undo buffer. Everything is volatile;
//! a new process starts from the seeded mock catalog.
//!
//! # Architecture
//!
//! - [`store::MarketplaceStore`] - the single source of truth. Views hold a
//!   cheap clone of the handle and go through named operations; no field is
//!   mutated directly.
//! - [`browse`] - the pure, recomputed-per-query product filter.
//! - [`checkout`] - the multi-step checkout flow and order totals.
//! - [`auth`] - the boundary trait for the external identity provider.
//!
//! Rendering, routing, and form handling live with the callers; this crate
//! is the state machine they drive.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod browse;
pub mod cart;
pub mod checkout;
pub mod models;
pub mod nav;
pub mod seed;
pub mod store;

pub use auth::{AuthCollaborator, AuthError, DisconnectedAuth};
pub use browse::{PriceBand, ProductFilter, filter_products};
pub use cart::{Cart, CartItem};
pub use checkout::{CheckoutFlow, CheckoutStep, OrderConfirmation, OrderTotals};
pub use models::{AdminProfile, CurrentUser, NewProduct, Product, SellerProfile, UserProfile};
pub use store::MarketplaceStore;
