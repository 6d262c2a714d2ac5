//! Grocery catalog store.
//!
//! # Responsibility
//! - Hold the static, externally keyed list of purchasable items.
//! - Hand out shared item handles for the cart.
//!
//! # Invariants
//! - The catalog is read-only after construction.
//! - Item ids are unique; catalog order is construction order.

use crate::model::grocery::{GroceryItem, GroceryItemId, GroceryValidationError};
use indexmap::IndexMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Built-in catalog rows: `(id, name, price)`.
const DEMO_CATALOG: [(&str, &str, f64); 10] = [
    ("1", "Apples", 80.0),
    ("2", "Bananas", 50.0),
    ("3", "Carrots", 40.0),
    ("4", "Milk", 60.0),
    ("5", "Eggs", 90.0),
    ("6", "Bread", 45.0),
    ("7", "Cheese", 120.0),
    ("8", "Rice", 70.0),
    ("9", "Potatoes", 30.0),
    ("10", "Tomatoes", 35.0),
];

/// Catalog construction error.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    Validation(GroceryValidationError),
    DuplicateId(GroceryItemId),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "duplicate catalog item id: {id}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<GroceryValidationError> for CatalogError {
    fn from(value: GroceryValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Read-only catalog interface.
pub trait CatalogRepository {
    fn get(&self, id: &GroceryItemId) -> Option<Arc<GroceryItem>>;
    fn items(&self) -> Box<dyn Iterator<Item = &Arc<GroceryItem>> + '_>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Insertion-ordered catalog held in process memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogRepository {
    items: IndexMap<GroceryItemId, Arc<GroceryItem>>,
}

impl InMemoryCatalogRepository {
    /// Builds a catalog, validating each item and rejecting duplicate ids.
    pub fn from_items(items: impl IntoIterator<Item = GroceryItem>) -> Result<Self, CatalogError> {
        let mut catalog = IndexMap::new();
        for item in items {
            item.validate()?;
            if catalog.contains_key(&item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
            catalog.insert(item.id.clone(), Arc::new(item));
        }
        Ok(Self { items: catalog })
    }

    /// Returns the built-in ten-item grocery catalog.
    pub fn demo() -> Self {
        let items = DEMO_CATALOG
            .iter()
            .map(|(id, name, price)| GroceryItem::new(id, name, *price))
            .collect::<Result<Vec<_>, _>>()
            .expect("built-in catalog rows are valid");
        Self::from_items(items).expect("built-in catalog ids are unique")
    }
}

impl CatalogRepository for InMemoryCatalogRepository {
    fn get(&self, id: &GroceryItemId) -> Option<Arc<GroceryItem>> {
        self.items.get(id).cloned()
    }

    fn items(&self) -> Box<dyn Iterator<Item = &Arc<GroceryItem>> + '_> {
        Box::new(self.items.values())
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{CatalogError, CatalogRepository, InMemoryCatalogRepository};
    use crate::model::grocery::{GroceryItem, GroceryItemId};

    #[test]
    fn demo_catalog_has_ten_valid_items_in_order() {
        let catalog = InMemoryCatalogRepository::demo();
        assert_eq!(catalog.len(), 10);
        let names: Vec<&str> = catalog.items().map(|item| item.name.as_str()).collect();
        assert_eq!(names[0], "Apples");
        assert_eq!(names[9], "Tomatoes");
        assert!(catalog.items().all(|item| item.validate().is_ok()));
    }

    #[test]
    fn from_items_rejects_duplicate_ids() {
        let err = InMemoryCatalogRepository::from_items([
            GroceryItem::new("1", "Apples", 80.0).unwrap(),
            GroceryItem::new("1", "Pears", 60.0).unwrap(),
        ])
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId(GroceryItemId::new("1").unwrap()));
    }

    #[test]
    fn get_returns_shared_handle() {
        let catalog = InMemoryCatalogRepository::demo();
        let id = GroceryItemId::new("2").unwrap();
        let first = catalog.get(&id).unwrap();
        let second = catalog.get(&id).unwrap();
        assert!(std::sync::Arc::ptr_eq(&first, &second));
        assert!(catalog.get(&GroceryItemId::new("404").unwrap()).is_none());
    }
}
