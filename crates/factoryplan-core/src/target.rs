//! Production targets: an item and the rate it must be produced at.

use crate::item::Item;
use serde::{Deserialize, Serialize};

/// A required output rate for one item, in items per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetRate {
    pub item: Item,
    pub quantity_per_second: f64,
}

impl TargetRate {
    pub fn new(item: Item, quantity_per_second: f64) -> TargetRate {
        TargetRate {
            item,
            quantity_per_second,
        }
    }
}
