//! The wire schema for factory-config files: the literal, unnormalized shape
//! of a recipe or target as written in JSON or YAML, before tier lookup,
//! machine-name resolution, or item interning.

use serde::Deserialize;
use std::collections::BTreeMap;

/// One recipe as written in the config file, before tier/name normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecipe {
    pub m: String,
    pub tier: String,
    /// Item name -> quantity per execution. A `BTreeMap` keeps iteration
    /// sorted by name, independent of the file's own key order, so the same
    /// config always interns items in the same order regardless of how a
    /// hand-edited YAML/JSON file happened to list them.
    pub inputs: BTreeMap<String, f64>,
    pub outputs: BTreeMap<String, f64>,
    pub dur: i64,
    pub eut: i64,
}

/// The full config file: a recipe list plus a target-rate map.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFactoryConfig {
    pub recipes: Vec<RawRecipe>,
    pub targets: BTreeMap<String, f64>,
}
