//! Session identities.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use emberkicks_core::{Email, Role, UserId};

use super::seller::SellerProfile;

/// A buyer-side identity: an externally authenticated shopper or an
/// ephemeral guest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: Option<Email>,
}

/// The distinguished admin singleton.
#[derive(Debug, Clone)]
pub struct AdminProfile {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub password: SecretString,
}

/// The signed-in identity, if any.
///
/// A tagged sum rather than a role field on a shared struct: each variant
/// carries exactly the fields its role has, so seller-only data can never
/// be read off a guest.
#[derive(Debug, Clone)]
pub enum CurrentUser {
    /// An ephemeral buyer created without credentials.
    Guest(UserProfile),
    /// An externally authenticated buyer.
    Buyer(UserProfile),
    /// A seller signed in against the local registry.
    Seller(SellerProfile),
    /// The admin singleton.
    Admin(AdminProfile),
}

impl CurrentUser {
    /// The role this identity acts under.
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Guest(_) => Role::Guest,
            Self::Buyer(_) => Role::Buyer,
            Self::Seller(_) => Role::Seller,
            Self::Admin(_) => Role::Admin,
        }
    }

    /// Display name, for greeting headers.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Guest(profile) | Self::Buyer(profile) => &profile.name,
            Self::Seller(seller) => &seller.name,
            Self::Admin(admin) => &admin.name,
        }
    }

    /// The identity's id as a plain string.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Guest(profile) | Self::Buyer(profile) => profile.id.as_str(),
            Self::Seller(seller) => seller.id.as_str(),
            Self::Admin(admin) => admin.id.as_str(),
        }
    }

    /// The seller profile, when this identity is a seller.
    #[must_use]
    pub const fn as_seller(&self) -> Option<&SellerProfile> {
        match self {
            Self::Seller(seller) => Some(seller),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use emberkicks_core::SellerId;

    use super::*;

    fn seller() -> SellerProfile {
        SellerProfile {
            id: SellerId::new("s2"),
            name: "Sarah Kicks".to_owned(),
            email: Email::parse("sarah@kicks.com").unwrap(),
            password: SecretString::from("password123"),
            business_name: "Kicks 4 U".to_owned(),
            is_verified: false,
            joined_date: NaiveDate::from_ymd_opt(2023, 10, 20).unwrap(),
        }
    }

    #[test]
    fn test_roles_match_variants() {
        let guest = CurrentUser::Guest(UserProfile {
            id: UserId::new("guest-1"),
            name: "Guest Buyer".to_owned(),
            email: None,
        });
        assert_eq!(guest.role(), Role::Guest);
        assert_eq!(guest.name(), "Guest Buyer");

        let seller = CurrentUser::Seller(seller());
        assert_eq!(seller.role(), Role::Seller);
        assert_eq!(seller.id(), "s2");
    }

    #[test]
    fn test_as_seller_only_for_sellers() {
        let seller_user = CurrentUser::Seller(seller());
        assert!(seller_user.as_seller().is_some());

        let admin = CurrentUser::Admin(AdminProfile {
            id: UserId::new("admin1"),
            name: "System Admin".to_owned(),
            email: Email::parse("admin@emberkicks.com").unwrap(),
            password: SecretString::from("admin"),
        });
        assert!(admin.as_seller().is_none());
    }
}
