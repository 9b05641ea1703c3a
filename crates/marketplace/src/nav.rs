//! Role-aware navigation targets.
//!
//! The routing layer itself is external; these functions are the single
//! place it asks "where does this identity land?".

use emberkicks_core::Role;

use crate::models::CurrentUser;

/// Home route for an authenticated role.
///
/// Guests land on the role-selection page rather than a home of their own.
#[must_use]
pub const fn home_route(role: Role) -> &'static str {
    match role {
        Role::Buyer => "/buyer",
        Role::Seller => "/seller",
        Role::Admin => "/admin",
        Role::Guest => "/",
    }
}

/// Where to send a session after sign-in state changes: the role's home,
/// or the sign-in page when unauthenticated.
#[must_use]
pub const fn landing_route(user: Option<&CurrentUser>) -> &'static str {
    match user {
        Some(user) => home_route(user.role()),
        None => "/login",
    }
}
