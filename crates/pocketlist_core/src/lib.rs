//! Core domain logic for the pocketlist roster and grocery apps.
//! This crate is the single source of truth for record and cart invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::cart::{cart_total, Cart, CartRemovalPolicy};
pub use model::grocery::{GroceryItem, GroceryItemId, GroceryValidationError};
pub use model::student::{normalize_name, NameValidationError, RollNumber, Student};
pub use repo::catalog_repo::{CatalogError, CatalogRepository, InMemoryCatalogRepository};
pub use repo::student_repo::{
    InMemoryStudentRepository, RepoError, RepoResult, StudentRepository,
};
pub use search::filter::{filter_groceries, filter_students, grocery_matches, student_matches};
pub use service::grocery_service::{GroceryService, GroceryServiceError, EMPTY_CART_NOTICE};
pub use service::student_service::{
    PendingRemoval, RemovalDecision, RemovalOutcome, SaveOutcome, StudentService,
    StudentServiceError, EMPTY_ROSTER_NOTICE,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
