//! The fully normalized problem handed to the LP builder: recipes, targets,
//! and the item table that owns every [`Item`] they reference.

use crate::item::ItemTable;
use crate::recipe::Recipe;
use crate::target::TargetRate;

/// Recipes plus targets plus the item table that interns both. Built once
/// per invocation by the config-loading layer, then consumed by the LP
/// builder; never mutated afterward.
#[derive(Debug, Clone)]
pub struct FactoryConfig {
    pub items: ItemTable,
    pub recipes: Vec<Recipe>,
    pub targets: Vec<TargetRate>,
}

impl FactoryConfig {
    pub fn new(items: ItemTable, recipes: Vec<Recipe>, targets: Vec<TargetRate>) -> FactoryConfig {
        FactoryConfig {
            items,
            recipes,
            targets,
        }
    }
}
