//! Shopping cart over catalog items.
//!
//! # Responsibility
//! - Hold the ordered list of selected catalog entries.
//! - Apply the configured removal policy.
//! - Compute the cart total from scratch.
//!
//! # Invariants
//! - Entries share the catalog's `GroceryItem` allocations; the cart never
//!   mutates or removes catalog data.
//! - The same item may appear any number of times, in selection order.
//! - The total is never cached.

use crate::model::grocery::{GroceryItem, GroceryItemId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

/// How `remove_from_cart` treats repeated entries of one item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartRemovalPolicy {
    /// Drop every entry with the id (removes the whole product line).
    #[default]
    RemoveAllMatching,
    /// Drop only the first entry with the id (removes one unit).
    RemoveOneMatching,
}

impl CartRemovalPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RemoveAllMatching => "remove_all_matching",
            Self::RemoveOneMatching => "remove_one_matching",
        }
    }
}

impl Display for CartRemovalPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CartRemovalPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "remove_all_matching" | "all" => Ok(Self::RemoveAllMatching),
            "remove_one_matching" | "one" => Ok(Self::RemoveOneMatching),
            other => Err(format!(
                "unsupported cart removal policy `{other}`; expected remove_all_matching|remove_one_matching"
            )),
        }
    }
}

/// Ordered cart entries.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: Vec<Arc<GroceryItem>>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one entry; duplicates are allowed.
    pub fn push(&mut self, item: Arc<GroceryItem>) {
        self.entries.push(item);
    }

    /// Removes entries with `id` according to `policy`.
    ///
    /// Returns how many entries were removed; zero when `id` is absent.
    pub fn remove(&mut self, id: &GroceryItemId, policy: CartRemovalPolicy) -> usize {
        match policy {
            CartRemovalPolicy::RemoveAllMatching => {
                let before = self.entries.len();
                self.entries.retain(|entry| &entry.id != id);
                before - self.entries.len()
            }
            CartRemovalPolicy::RemoveOneMatching => {
                match self.entries.iter().position(|entry| &entry.id == id) {
                    Some(index) => {
                        self.entries.remove(index);
                        1
                    }
                    None => 0,
                }
            }
        }
    }

    /// Empties the cart and returns how many entries were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    pub fn entries(&self) -> &[Arc<GroceryItem>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries holding `id`.
    pub fn quantity_of(&self, id: &GroceryItemId) -> usize {
        self.entries.iter().filter(|entry| &entry.id == id).count()
    }

    /// Sum of entry prices, recomputed on every call.
    pub fn total(&self) -> f64 {
        cart_total(self.entries.iter().map(Arc::as_ref))
    }
}

/// Sums `price` over `entries`; an empty cart totals positive zero.
pub fn cart_total<'a>(entries: impl IntoIterator<Item = &'a GroceryItem>) -> f64 {
    entries
        .into_iter()
        .fold(0.0, |total, item| total + item.price)
}

#[cfg(test)]
mod tests {
    use super::{cart_total, Cart, CartRemovalPolicy};
    use crate::model::grocery::GroceryItem;
    use std::sync::Arc;

    fn item(id: &str, name: &str, price: f64) -> Arc<GroceryItem> {
        Arc::new(GroceryItem::new(id, name, price).expect("valid item"))
    }

    #[test]
    fn remove_all_matching_drops_every_unit() {
        let apples = item("1", "Apples", 80.0);
        let bananas = item("2", "Bananas", 50.0);
        let mut cart = Cart::new();
        cart.push(apples.clone());
        cart.push(bananas);
        cart.push(apples.clone());

        let removed = cart.remove(&apples.id, CartRemovalPolicy::RemoveAllMatching);
        assert_eq!(removed, 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.entries()[0].id.as_str(), "2");
    }

    #[test]
    fn remove_one_matching_drops_first_unit_only() {
        let apples = item("1", "Apples", 80.0);
        let bananas = item("2", "Bananas", 50.0);
        let mut cart = Cart::new();
        cart.push(bananas);
        cart.push(apples.clone());
        cart.push(apples.clone());

        let removed = cart.remove(&apples.id, CartRemovalPolicy::RemoveOneMatching);
        assert_eq!(removed, 1);
        assert_eq!(cart.quantity_of(&apples.id), 1);
        assert_eq!(cart.entries()[0].id.as_str(), "2");
    }

    #[test]
    fn remove_missing_id_is_noop() {
        let mut cart = Cart::new();
        cart.push(item("1", "Apples", 80.0));
        let missing = item("9", "Rice", 1.0);
        assert_eq!(cart.remove(&missing.id, CartRemovalPolicy::RemoveAllMatching), 0);
        assert_eq!(cart.remove(&missing.id, CartRemovalPolicy::RemoveOneMatching), 0);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn total_of_empty_cart_is_zero() {
        let total = Cart::new().total();
        assert_eq!(total, 0.0);
        assert!(!total.is_sign_negative());
        assert!(!cart_total(std::iter::empty()).is_sign_negative());
    }

    #[test]
    fn total_after_clear_is_positive_zero() {
        let mut cart = Cart::new();
        cart.push(item("1", "Apples", 80.0));
        cart.clear();
        assert_eq!(format!("{}", cart.total()), "0");
    }

    #[test]
    fn policy_parses_aliases_and_rejects_unknown() {
        assert_eq!(
            " ONE ".parse::<CartRemovalPolicy>().unwrap(),
            CartRemovalPolicy::RemoveOneMatching
        );
        assert_eq!(
            "remove_all_matching".parse::<CartRemovalPolicy>().unwrap(),
            CartRemovalPolicy::RemoveAllMatching
        );
        assert!("some".parse::<CartRemovalPolicy>().is_err());
    }
}
