//! Grocery catalog item.
//!
//! # Responsibility
//! - Define the catalog record and its externally assigned text id.
//! - Reject malformed catalog entries before they reach a store.
//!
//! # Invariants
//! - `GroceryItemId` is non-empty after trimming.
//! - `name` is non-empty after trimming.
//! - `price` is finite and non-negative.

use crate::model::student::{normalize_name, NameValidationError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Catalog-assigned identifier, unique within one catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroceryItemId(String);

impl GroceryItemId {
    /// Wraps a trimmed id, rejecting blank input.
    pub fn new(value: impl AsRef<str>) -> Result<Self, GroceryValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(GroceryValidationError::EmptyId);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for GroceryItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validation failure for catalog entries.
#[derive(Debug, Clone, PartialEq)]
pub enum GroceryValidationError {
    /// Id is blank after trim.
    EmptyId,
    /// Name is blank after trim.
    EmptyName,
    /// Price is negative, NaN or infinite.
    InvalidPrice(f64),
}

impl Display for GroceryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "grocery item id must not be blank"),
            Self::EmptyName => write!(f, "grocery item name must not be blank"),
            Self::InvalidPrice(price) => {
                write!(f, "grocery item price must be finite and >= 0, got {price}")
            }
        }
    }
}

impl Error for GroceryValidationError {}

impl From<NameValidationError> for GroceryValidationError {
    fn from(value: NameValidationError) -> Self {
        match value {
            NameValidationError::Empty => Self::EmptyName,
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: GroceryItemId,
    pub name: String,
    /// Unit price in the display currency.
    pub price: f64,
    /// Opaque asset reference; the core never resolves it.
    pub image: Option<String>,
}

impl GroceryItem {
    /// Builds a validated catalog entry without an image reference.
    pub fn new(
        id: impl AsRef<str>,
        name: &str,
        price: f64,
    ) -> Result<Self, GroceryValidationError> {
        let item = Self {
            id: GroceryItemId::new(id)?,
            name: normalize_name(name)?,
            price,
            image: None,
        };
        item.validate()?;
        Ok(item)
    }

    /// Attaches an asset reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Re-checks invariants, e.g. for deserialized values.
    pub fn validate(&self) -> Result<(), GroceryValidationError> {
        if self.id.as_str().trim().is_empty() {
            return Err(GroceryValidationError::EmptyId);
        }
        if self.name.trim().is_empty() {
            return Err(GroceryValidationError::EmptyName);
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(GroceryValidationError::InvalidPrice(self.price));
        }
        Ok(())
    }
}
