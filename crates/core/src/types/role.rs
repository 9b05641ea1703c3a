//! Marketplace roles.

use serde::{Deserialize, Serialize};

/// The role a session identity acts under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// A shopper, either externally authenticated or ephemeral.
    Buyer,
    /// A registered seller (visibility gated on verification).
    Seller,
    /// The distinguished admin singleton.
    Admin,
    /// An ephemeral, credential-less buyer identity.
    Guest,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buyer => write!(f, "BUYER"),
            Self::Seller => write!(f, "SELLER"),
            Self::Admin => write!(f, "ADMIN"),
            Self::Guest => write!(f, "GUEST"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUYER" => Ok(Self::Buyer),
            "SELLER" => Ok(Self::Seller),
            "ADMIN" => Ok(Self::Admin),
            "GUEST" => Ok(Self::Guest),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_screaming_snake_case() {
        let json = serde_json::to_string(&Role::Seller).unwrap();
        assert_eq!(json, "\"SELLER\"");

        let parsed: Role = serde_json::from_str("\"GUEST\"").unwrap();
        assert_eq!(parsed, Role::Guest);
    }

    #[test]
    fn test_display_from_str_roundtrip() {
        for role in [Role::Buyer, Role::Seller, Role::Admin, Role::Guest] {
            let parsed: Role = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("SHOPPER".parse::<Role>().is_err());
    }
}
