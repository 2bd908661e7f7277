//! Aquarelle Core - Shared types library.
//!
//! This crate provides common types used across all Aquarelle components:
//! - `marketplace` - Public-facing marketplace site
//! - `integration-tests` - Cross-component scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no storage access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and emails, plus
//!   the catalog enums (categories, availability, roles) and dimensions

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
