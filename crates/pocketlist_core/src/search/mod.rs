//! Query View over the in-memory stores.
//!
//! # Responsibility
//! - Derive the filtered, search-driven projection shown to the user.
//! - Stay pure: every function takes the records and the query as input.

pub mod filter;
