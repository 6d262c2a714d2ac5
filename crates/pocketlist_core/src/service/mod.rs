//! Mutation controllers and their view state.
//!
//! # Responsibility
//! - Own every add/update/remove on the stores and the cart.
//! - Hold search text and edit target next to the data they project.
//! - Keep UI/FFI layers decoupled from store details.
//!
//! # Invariants
//! - Controllers take `&mut self` for every mutation, so two mutations on one
//!   controller can never interleave.

pub mod grocery_service;
pub mod student_service;
