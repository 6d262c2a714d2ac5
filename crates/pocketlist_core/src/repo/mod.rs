//! Repository layer over in-memory record stores.
//!
//! # Responsibility
//! - Define store contracts used by the controllers.
//! - Keep ordering and key-uniqueness rules inside the store boundary.
//!
//! # Invariants
//! - Stores preserve insertion order for display.
//! - Stores never hold two records with the same key.
//! - Nothing is persisted; stores live as long as their owner.

pub mod catalog_repo;
pub mod student_repo;
