//! Grocery browsing and cart controller.
//!
//! # Responsibility
//! - Filter the catalog by the live search text.
//! - Apply add/remove/clear to the cart and report its total.
//!
//! # Invariants
//! - Cart mutations never touch the catalog.
//! - `remove_from_cart` follows the configured `CartRemovalPolicy`.
//! - The total is recomputed from the cart entries on every read.

use crate::model::cart::{Cart, CartRemovalPolicy};
use crate::model::grocery::{GroceryItem, GroceryItemId};
use crate::repo::catalog_repo::{CatalogRepository, InMemoryCatalogRepository};
use crate::search::filter::filter_groceries;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Notice rendered when the cart has no entries.
pub const EMPTY_CART_NOTICE: &str = "Cart is empty.";

/// Errors from grocery controller operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroceryServiceError {
    /// Requested id is not in the catalog.
    ItemNotFound(GroceryItemId),
}

impl Display for GroceryServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ItemNotFound(id) => write!(f, "grocery item not found: {id}"),
        }
    }
}

impl Error for GroceryServiceError {}

/// Catalog browser and cart controller.
pub struct GroceryService<C: CatalogRepository> {
    catalog: C,
    cart: Cart,
    search_text: String,
    removal_policy: CartRemovalPolicy,
}

impl GroceryService<InMemoryCatalogRepository> {
    /// Creates a controller over the built-in catalog.
    pub fn with_demo_catalog(removal_policy: CartRemovalPolicy) -> Self {
        Self::new(InMemoryCatalogRepository::demo(), removal_policy)
    }
}

impl<C: CatalogRepository> GroceryService<C> {
    /// Creates a controller with an empty cart and empty search text.
    pub fn new(catalog: C, removal_policy: CartRemovalPolicy) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            search_text: String::new(),
            removal_policy,
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn removal_policy(&self) -> CartRemovalPolicy {
        self.removal_policy
    }

    pub fn set_removal_policy(&mut self, policy: CartRemovalPolicy) {
        self.removal_policy = policy;
    }

    /// Appends the catalog item `id` to the cart.
    ///
    /// # Errors
    /// - `ItemNotFound` when `id` is not a catalog entry; the cart is unchanged.
    pub fn add_to_cart(
        &mut self,
        id: &GroceryItemId,
    ) -> Result<Arc<GroceryItem>, GroceryServiceError> {
        let Some(item) = self.catalog.get(id) else {
            warn!("event=cart_add module=grocery status=error item_id={}", id);
            return Err(GroceryServiceError::ItemNotFound(id.clone()));
        };
        self.cart.push(Arc::clone(&item));
        info!(
            "event=cart_add module=grocery status=ok item_id={} entries={}",
            id,
            self.cart.len()
        );
        Ok(item)
    }

    /// Removes cart entries for `id` under the current policy.
    ///
    /// Returns the number of entries removed; absent ids are a no-op.
    pub fn remove_from_cart(&mut self, id: &GroceryItemId) -> usize {
        let removed = self.cart.remove(id, self.removal_policy);
        if removed == 0 {
            debug!(
                "event=cart_remove module=grocery status=noop item_id={}",
                id
            );
        } else {
            info!(
                "event=cart_remove module=grocery status=ok item_id={} removed={} policy={} entries={}",
                id,
                removed,
                self.removal_policy,
                self.cart.len()
            );
        }
        removed
    }

    /// Empties the cart unconditionally.
    pub fn clear_cart(&mut self) -> usize {
        let removed = self.cart.clear();
        info!(
            "event=cart_clear module=grocery status=ok removed={}",
            removed
        );
        removed
    }

    /// Sum of cart entry prices.
    pub fn total(&self) -> f64 {
        self.cart.total()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Catalog entries visible for the current search text.
    pub fn filtered_catalog(&self) -> Vec<&GroceryItem> {
        filter_groceries(self.catalog.items().map(Arc::as_ref), &self.search_text)
    }
}
