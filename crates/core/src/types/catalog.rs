//! Catalog enums for product listings.

use serde::{Deserialize, Serialize};

/// Condition of a listed product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Condition {
    #[default]
    New,
    Used,
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "New"),
            Self::Used => write!(f, "Used"),
        }
    }
}

impl std::str::FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(Self::New),
            "Used" => Ok(Self::Used),
            _ => Err(format!("invalid condition: {s}")),
        }
    }
}

/// Product category.
///
/// Doubles as the gender facet dimension in the buyer-facing filter;
/// `Unisex` listings match any specific category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Men,
    Women,
    Kids,
    Unisex,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Men => write!(f, "Men"),
            Self::Women => write!(f, "Women"),
            Self::Kids => write!(f, "Kids"),
            Self::Unisex => write!(f, "Unisex"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Men" => Ok(Self::Men),
            "Women" => Ok(Self::Women),
            "Kids" => Ok(Self::Kids),
            "Unisex" => Ok(Self::Unisex),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}
