//! Interned item identities.
//!
//! `Item` is a cheap, `Copy`, equality-by-name handle into an [`ItemTable`]
//! owned by the `FactoryConfig` build step: a newtype ID plus an owning
//! table, rather than a process-wide interning cache. The table lives as
//! long as the config that built it, so there is no hidden global to guard
//! across threads.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An interned handle to a normalized item name. Cheap to copy and compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item(u32);

/// Owns the canonical name for every interned [`Item`], preserving first-seen
/// (insertion) order so LP building iterates items deterministically.
#[derive(Debug, Default, Clone)]
pub struct ItemTable {
    names: Vec<String>,
    index: HashMap<String, Item>,
}

impl ItemTable {
    pub fn new() -> ItemTable {
        ItemTable::default()
    }

    /// Normalizes `raw` (spaces become underscores) and returns its interned
    /// `Item`, creating a new entry if this is the first time the name is seen.
    pub fn intern(&mut self, raw: &str) -> Item {
        let normalized = normalize_name(raw);
        if let Some(existing) = self.index.get(&normalized) {
            return *existing;
        }
        let item = Item(self.names.len() as u32);
        self.names.push(normalized.clone());
        self.index.insert(normalized, item);
        item
    }

    pub fn name(&self, item: Item) -> &str {
        &self.names[item.0 as usize]
    }

    /// Items in the order they were first interned.
    pub fn iter(&self) -> impl Iterator<Item = Item> + '_ {
        (0..self.names.len() as u32).map(Item)
    }
}

fn normalize_name(raw: &str) -> String {
    raw.replace(' ', "_")
}

/// An (item, quantity) pair: produced/consumed per recipe execution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    pub item: Item,
    pub quantity: f64,
}

impl ItemStack {
    pub fn new(item: Item, quantity: f64) -> ItemStack {
        ItemStack { item, quantity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_idempotent_by_normalized_name() {
        let mut table = ItemTable::new();
        let a = table.intern("hydrogen sulfide");
        let b = table.intern("hydrogen_sulfide");
        assert_eq!(a, b);
        assert_eq!(table.name(a), "hydrogen_sulfide");
    }

    #[test]
    fn distinct_names_get_distinct_items() {
        let mut table = ItemTable::new();
        let water = table.intern("water");
        let oxygen = table.intern("oxygen");
        assert_ne!(water, oxygen);
    }

    #[test]
    fn iteration_order_is_insertion_order() {
        let mut table = ItemTable::new();
        let water = table.intern("water");
        let sulfur = table.intern("sulfur");
        let hydrogen = table.intern("hydrogen");
        let order: Vec<Item> = table.iter().collect();
        assert_eq!(order, vec![water, sulfur, hydrogen]);
    }
}
