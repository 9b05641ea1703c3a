//! Core types for Emberkicks.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod catalog;
pub mod email;
pub mod id;
pub mod price;
pub mod role;

pub use catalog::{Category, Condition};
pub use email::{Email, EmailError};
pub use id::*;
pub use price::Price;
pub use role::Role;
