//! Multi-step checkout flow.
//!
//! Three steps: capture an email, confirm delivery details, done. Placing
//! the order simulates payment processing with a fixed delay; it is not
//! cancellable and in this design it always succeeds.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use emberkicks_core::{Email, Price};

use crate::cart::Cart;
use crate::store::MarketplaceStore;

/// Fixed processing delay for placing an order.
pub const PROCESSING_DELAY: Duration = Duration::from_secs(2);

/// Flat shipping fee applied to every order.
#[must_use]
pub fn shipping_fee() -> Price {
    Price::from_dollars(7)
}

/// Where the shopper is in the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CheckoutStep {
    #[default]
    Login,
    Details,
    Confirmation,
}

/// Order cost breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: Price,
    pub shipping: Price,
    pub total: Price,
}

/// Compute totals for a cart: line subtotal plus flat shipping.
#[must_use]
pub fn order_totals(cart: &Cart) -> OrderTotals {
    let subtotal = cart.subtotal();
    let shipping = shipping_fee();
    OrderTotals {
        subtotal,
        shipping,
        total: subtotal + shipping,
    }
}

/// The receipt for a placed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub totals: OrderTotals,
    /// Total item quantity across the order.
    pub item_count: u32,
}

/// Per-session checkout state machine.
///
/// Invalid transitions degrade silently (they return `false`/`None`)
/// rather than failing: the driving page only offers the actions the
/// current step allows, so anything else is a stale request.
#[derive(Debug, Clone, Default)]
pub struct CheckoutFlow {
    step: CheckoutStep,
    email: Option<Email>,
}

impl CheckoutFlow {
    /// Start at the email step.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            step: CheckoutStep::Login,
            email: None,
        }
    }

    /// The current step.
    #[must_use]
    pub const fn step(&self) -> CheckoutStep {
        self.step
    }

    /// The email captured at the first step, if any.
    #[must_use]
    pub const fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    /// Advance from the email step to delivery details.
    pub fn continue_with_email(&mut self, email: Email) -> bool {
        if self.step != CheckoutStep::Login {
            return false;
        }
        tracing::debug!(email = %email, "checkout email captured");
        self.email = Some(email);
        self.step = CheckoutStep::Details;
        true
    }

    /// Step back from delivery details to the email step. No-op elsewhere
    /// (a confirmed order cannot be walked back).
    pub fn back(&mut self) -> bool {
        if self.step == CheckoutStep::Details {
            self.step = CheckoutStep::Login;
            return true;
        }
        false
    }

    /// Place the order: wait out the fixed processing delay, clear the
    /// cart, and advance to the confirmation step.
    ///
    /// Returns `None` without side effects when called off the details
    /// step or with an empty cart.
    pub async fn place_order(&mut self, store: &MarketplaceStore) -> Option<OrderConfirmation> {
        if self.step != CheckoutStep::Details {
            return None;
        }
        let cart = store.cart();
        if cart.is_empty() {
            return None;
        }

        tracing::info!(items = cart.total_quantity(), "processing order");
        tokio::time::sleep(PROCESSING_DELAY).await;

        let confirmation = OrderConfirmation {
            totals: order_totals(&cart),
            item_count: cart.total_quantity(),
        };
        store.clear_cart();
        self.step = CheckoutStep::Confirmation;
        tracing::info!(total = %confirmation.totals.total, "order confirmed");
        Some(confirmation)
    }
}
