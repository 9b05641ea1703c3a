//! Emberkicks Core - Shared types library.
//!
//! This crate provides common types used across all Emberkicks components:
//! - `marketplace` - Catalog, cart, and session state machine
//! - `cli` - Command-line walkthrough and catalog tools
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no timers, no async. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and emails,
//!   plus the role and catalog enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
