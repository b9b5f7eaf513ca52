//! Item counts held by a character.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tables::Item;

/// A mapping from item to a positive count. Items at zero are not stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    counts: BTreeMap<Item, u32>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// The loadout every new character starts with.
    pub fn starting() -> Self {
        let mut inv = Self::new();
        inv.add(Item::Medkit, 2);
        inv.add(Item::Grenade, 1);
        inv.add(Item::Knife, 1);
        inv
    }

    /// How many of `item` are held.
    pub fn count(&self, item: Item) -> u32 {
        self.counts.get(&item).copied().unwrap_or(0)
    }

    /// Whether at least one `item` is held.
    pub fn has(&self, item: Item) -> bool {
        self.count(item) > 0
    }

    /// Add `n` of `item`. Adding zero is a no-op.
    pub fn add(&mut self, item: Item, n: u32) {
        if n == 0 {
            return;
        }
        let count = self.counts.entry(item).or_insert(0);
        *count = count.saturating_add(n);
    }

    /// Remove `n` of `item`. Fails without mutating if fewer are held.
    pub fn remove(&mut self, item: Item, n: u32) -> bool {
        let held = self.count(item);
        if held < n {
            return false;
        }
        if held == n {
            self.counts.remove(&item);
        } else {
            self.counts.insert(item, held - n);
        }
        true
    }

    /// Total number of items across all kinds.
    pub fn total(&self) -> u32 {
        self.counts.values().fold(0, |total, n| total.saturating_add(*n))
    }

    /// Whether nothing is held.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over held items and their counts, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Item, u32)> + '_ {
        self.counts.iter().map(|(item, n)| (*item, *n))
    }
}

impl std::fmt::Display for Inventory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "(empty)");
        }
        let parts: Vec<String> = self.iter().map(|(i, n)| format!("{i} x{n}")).collect();
        write!(f, "{}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_loadout() {
        let inv = Inventory::starting();
        assert_eq!(inv.count(Item::Medkit), 2);
        assert_eq!(inv.count(Item::Grenade), 1);
        assert_eq!(inv.count(Item::Knife), 1);
        assert_eq!(inv.count(Item::Molotov), 0);
        assert_eq!(inv.total(), 4);
    }

    #[test]
    fn remove_drops_key_at_zero() {
        let mut inv = Inventory::new();
        inv.add(Item::Vest, 2);
        assert!(inv.remove(Item::Vest, 2));
        assert!(!inv.has(Item::Vest));
        assert!(inv.is_empty());
    }

    #[test]
    fn remove_too_many_is_rejected() {
        let mut inv = Inventory::new();
        inv.add(Item::Grenade, 1);
        let before = inv.clone();
        assert!(!inv.remove(Item::Grenade, 2));
        assert!(!inv.remove(Item::Molotov, 1));
        assert_eq!(inv, before);
    }

    #[test]
    fn add_zero_stores_nothing() {
        let mut inv = Inventory::new();
        inv.add(Item::Molotov, 0);
        assert!(inv.is_empty());
    }

    #[test]
    fn serializes_as_plain_map() {
        let mut inv = Inventory::new();
        inv.add(Item::Medkit, 2);
        inv.add(Item::Knife, 1);
        let json = serde_json::to_string(&inv).unwrap();
        assert_eq!(json, r#"{"medkit":2,"knife":1}"#);
    }

    #[test]
    fn display() {
        assert_eq!(Inventory::new().to_string(), "(empty)");
        assert_eq!(Inventory::starting().to_string(), "medkit x2, grenade x1, knife x1");
    }
}
