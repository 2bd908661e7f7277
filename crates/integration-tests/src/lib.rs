//! Integration tests for Aquarelle.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p aquarelle-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_queries` - Catalog store feeding the search engine
//! - `session_flow` - Login/registration/logout against the session slot
//!
//! Everything runs in-process against the in-memory catalog and an
//! in-memory session store; no server or external service is required.
