//! Seller profiles.

use chrono::NaiveDate;
use secrecy::SecretString;

use emberkicks_core::{Email, SellerId};

/// A registered seller.
///
/// The password is stored in memory in plaintext and compared by exact
/// equality; `SecretString` only keeps it out of `Debug` output. This is a
/// demo-store shortcut, never acceptable with real persistence.
#[derive(Debug, Clone)]
pub struct SellerProfile {
    pub id: SellerId,
    pub name: String,
    pub email: Email,
    pub password: SecretString,
    pub business_name: String,
    /// Gates marketplace visibility: unverified sellers' listings never
    /// appear in buyer-facing results.
    pub is_verified: bool,
    pub joined_date: NaiveDate,
}
