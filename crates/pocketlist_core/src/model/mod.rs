//! Domain model for the student roster and grocery cart.
//!
//! # Responsibility
//! - Define the record shapes owned by the core stores.
//! - Keep text normalization and key formatting next to the types they guard.
//!
//! # Invariants
//! - Every record is addressed by one immutable key.
//! - Removal is a hard delete; there are no tombstones.

pub mod cart;
pub mod grocery;
pub mod student;
