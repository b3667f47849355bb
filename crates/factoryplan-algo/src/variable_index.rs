//! A typed index built alongside the named [`crate::model::ConstraintSystem`].
//!
//! Solver variable names alone are enough to re-identify every entity by
//! parsing them back apart, but this index is populated *during* building
//! instead — not recovered afterward by regex — so [`crate::extractor`] can
//! cross-check a regex-based parse against ground truth instead of
//! depending on it. Names are kept here too, for human readability and
//! solver-log interop.

use factoryplan_core::Item;
use indexmap::IndexMap;

#[derive(Debug, Clone)]
pub struct MachinePort {
    pub var: String,
    pub item: Item,
}

#[derive(Debug, Clone)]
pub struct MachineInfo {
    pub var: String,
    pub recipe_index: usize,
    pub machine_name: String,
    pub inputs: Vec<MachinePort>,
    pub outputs: Vec<MachinePort>,
}

#[derive(Debug, Clone)]
pub struct SourceInfo {
    pub source_var: String,
    pub source_out_var: String,
    pub tax_var: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SinkInfo {
    pub sink_var: String,
    pub sink_in_var: String,
}

#[derive(Debug, Clone)]
pub struct LinkInfo {
    pub var: String,
    pub item: Item,
    pub producer_port: String,
    pub consumer_port: String,
}

/// Ground-truth mapping from every variable name the builder emitted back to
/// the typed entity it represents. Sources/sinks use an insertion-ordered
/// map (not `HashMap`) so that re-building the same config always produces
/// the same iteration order, so rebuilding the same config twice always
/// produces identical variable names in identical order.
#[derive(Debug, Clone, Default)]
pub struct VariableIndex {
    pub machines: Vec<MachineInfo>,
    pub sources: IndexMap<Item, SourceInfo>,
    pub sinks: IndexMap<Item, SinkInfo>,
    pub links: Vec<LinkInfo>,
}

impl VariableIndex {
    pub fn new() -> VariableIndex {
        VariableIndex::default()
    }
}
