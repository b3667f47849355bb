//! Turns a solved variable-value map back into a [`SolutionGraph`].
//!
//! The typed [`VariableIndex`] built alongside the constraint system is
//! ground truth for which variable belongs to which entity; this module
//! never has to parse a name to find out what it means. A regex classifier
//! mirroring the patterns in `builder.rs` runs alongside it purely as a
//! defensive cross-check (logged, never acted on) — catching the case where
//! a future change to the builder's naming drifts out of sync with what
//! this module expects.

use crate::graph::{Edge, Node, NodeId, SolutionGraph};
use crate::variable_index::VariableIndex;
use factoryplan_core::FactoryConfig;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

/// Values within this of zero are treated as not flowing at all.
const EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
enum NameKind {
    Machine(usize),
    MachineIn(usize, String),
    MachineOut(usize, String),
    Source(String),
    SourceOut(String),
    SourceTax(String),
    Sink(String),
    SinkIn(String),
    Link(String, String),
    Unknown,
}

static MACHINE_IN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^M(\d+)_IN_(.+)$").unwrap());
static MACHINE_OUT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^M(\d+)_OUT_(.+)$").unwrap());
static MACHINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^M(\d+)$").unwrap());
static SOURCE_TAX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^SOURCE_TAX_(.+)$").unwrap());
static SOURCE_OUT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^SOURCE_OUT_(.+)$").unwrap());
static SOURCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^SOURCE_(.+)$").unwrap());
static SINK_IN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^SINK_IN_(.+)$").unwrap());
static SINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^SINK_(.+)$").unwrap());
static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+)_TO_(.+)$").unwrap());

/// Classifies a variable name. The link pattern is tried last: every other
/// pattern is checked first so that machine I/O names, which never contain
/// `_TO_`, bind to their more specific pattern instead of being swallowed by
/// the link pattern's greedy `(.+)`.
fn classify(name: &str) -> NameKind {
    if !name.contains("_TO_") {
        if let Some(caps) = MACHINE_IN_RE.captures(name) {
            return NameKind::MachineIn(caps[1].parse().unwrap_or(usize::MAX), caps[2].to_string());
        }
        if let Some(caps) = MACHINE_OUT_RE.captures(name) {
            return NameKind::MachineOut(caps[1].parse().unwrap_or(usize::MAX), caps[2].to_string());
        }
        if let Some(caps) = MACHINE_RE.captures(name) {
            return NameKind::Machine(caps[1].parse().unwrap_or(usize::MAX));
        }
        if let Some(caps) = SOURCE_TAX_RE.captures(name) {
            return NameKind::SourceTax(caps[1].to_string());
        }
        if let Some(caps) = SOURCE_OUT_RE.captures(name) {
            return NameKind::SourceOut(caps[1].to_string());
        }
        if let Some(caps) = SOURCE_RE.captures(name) {
            return NameKind::Source(caps[1].to_string());
        }
        if let Some(caps) = SINK_IN_RE.captures(name) {
            return NameKind::SinkIn(caps[1].to_string());
        }
        if let Some(caps) = SINK_RE.captures(name) {
            return NameKind::Sink(caps[1].to_string());
        }
    }
    if let Some(caps) = LINK_RE.captures(name) {
        return NameKind::Link(caps[1].to_string(), caps[2].to_string());
    }
    NameKind::Unknown
}

fn cross_check(config: &FactoryConfig, index: &VariableIndex, values: &IndexMap<String, f64>) {
    for machine in &index.machines {
        match classify(&machine.var) {
            NameKind::Machine(parsed) if parsed == machine.recipe_index => {}
            other => warn!(var = %machine.var, ?other, "machine variable failed name cross-check"),
        }
    }
    for (item, source) in &index.sources {
        let item_name = config.items.name(*item);
        match classify(&source.source_var) {
            NameKind::Source(parsed) if parsed == item_name => {}
            other => warn!(var = %source.source_var, ?other, "source variable failed name cross-check"),
        }
    }
    for name in values.keys() {
        if classify(name) == NameKind::Unknown {
            warn!(variable = %name, "variable name did not match any known pattern during cross-check");
        }
    }
}

/// Builds the solution graph in a fixed order: Source → SourceOut
/// (junction) → Sink → SinkIn (junction) → Machine → MachineInputPort →
/// MachineOutputPort, then link edges.
pub fn extract(
    config: &FactoryConfig,
    index: &VariableIndex,
    values: &IndexMap<String, f64>,
) -> SolutionGraph {
    cross_check(config, index, values);

    let mut graph = SolutionGraph::new();
    let mut port_nodes: IndexMap<String, NodeId> = IndexMap::new();

    for (item, source) in &index.sources {
        let quantity = values.get(&source.source_var).copied().unwrap_or(0.0);
        if quantity.abs() <= EPSILON {
            continue;
        }
        let source_id = graph.add_node(Node::Source {
            item: *item,
            quantity,
        });

        let out_quantity = values.get(&source.source_out_var).copied().unwrap_or(0.0);
        if out_quantity.abs() > EPSILON {
            let junction_id = graph.add_node(Node::ItemJunction {
                item: *item,
                quantity: out_quantity,
            });
            graph.add_edge(
                source_id,
                junction_id,
                Edge::ItemFlow {
                    item: *item,
                    quantity: out_quantity,
                },
            );
            port_nodes.insert(source.source_out_var.clone(), junction_id);
        }
    }

    for (item, sink) in &index.sinks {
        let quantity = values.get(&sink.sink_var).copied().unwrap_or(0.0);
        if quantity.abs() <= EPSILON {
            continue;
        }
        let sink_id = graph.add_node(Node::Sink {
            item: *item,
            quantity,
        });

        let in_quantity = values.get(&sink.sink_in_var).copied().unwrap_or(0.0);
        if in_quantity.abs() > EPSILON {
            let junction_id = graph.add_node(Node::ItemJunction {
                item: *item,
                quantity: in_quantity,
            });
            graph.add_edge(
                junction_id,
                sink_id,
                Edge::ItemFlow {
                    item: *item,
                    quantity: in_quantity,
                },
            );
            port_nodes.insert(sink.sink_in_var.clone(), junction_id);
        }
    }

    for machine in &index.machines {
        let quantity = values.get(&machine.var).copied().unwrap_or(0.0);
        if quantity.abs() <= EPSILON {
            continue;
        }
        let machine_id = graph.add_node(Node::Machine {
            name: machine.machine_name.clone(),
            quantity,
            recipe_index: machine.recipe_index,
        });

        for port in &machine.inputs {
            let port_quantity = values.get(&port.var).copied().unwrap_or(0.0);
            if port_quantity.abs() <= EPSILON {
                continue;
            }
            let port_id = graph.add_node(Node::MachineInputPort {
                machine_id,
                item: port.item,
                quantity: port_quantity,
            });
            graph.add_edge(port_id, machine_id, Edge::MachinePort { machine_id });
            port_nodes.insert(port.var.clone(), port_id);
        }

        for port in &machine.outputs {
            let port_quantity = values.get(&port.var).copied().unwrap_or(0.0);
            if port_quantity.abs() <= EPSILON {
                continue;
            }
            let port_id = graph.add_node(Node::MachineOutputPort {
                machine_id,
                item: port.item,
                quantity: port_quantity,
            });
            graph.add_edge(machine_id, port_id, Edge::MachinePort { machine_id });
            port_nodes.insert(port.var.clone(), port_id);
        }
    }

    for link in &index.links {
        let quantity = values.get(&link.var).copied().unwrap_or(0.0);
        if quantity.abs() <= EPSILON {
            continue;
        }
        let (Some(&producer_id), Some(&consumer_id)) = (
            port_nodes.get(&link.producer_port),
            port_nodes.get(&link.consumer_port),
        ) else {
            continue;
        };
        graph.add_edge(
            producer_id,
            consumer_id,
            Edge::ItemFlow {
                item: link.item,
                quantity,
            },
        );
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder;
    use crate::solver::{solve, SolveStatus};
    use factoryplan_core::{FactoryConfig, GameTime, ItemStack, ItemTable, Recipe, RecipeKind, TargetRate, Voltage, VoltageTier};

    #[test]
    fn trivial_scenario_yields_source_machine_sink_chain() {
        let mut items = ItemTable::new();
        let water = items.intern("water");
        let hydrogen = items.intern("hydrogen");
        let recipe = Recipe::new(
            "Electrolyzer",
            RecipeKind::Standard,
            VoltageTier::from_rank(1),
            vec![ItemStack::new(water, 1000.0)],
            vec![ItemStack::new(hydrogen, 1000.0)],
            GameTime::from_ticks(20).unwrap(),
            Voltage::new(8),
        )
        .unwrap();
        let config = FactoryConfig::new(items, vec![recipe], vec![TargetRate::new(hydrogen, 500.0)]);

        let (system, index) = builder::build(&config);
        let result = solve(&system).unwrap();
        assert_eq!(result.status, SolveStatus::Optimal);

        let graph = extract(&config, &index, &result.values);
        let has_source = graph
            .graph
            .node_weights()
            .any(|n| matches!(n, Node::Source { .. }));
        let has_sink = graph
            .graph
            .node_weights()
            .any(|n| matches!(n, Node::Sink { .. }));
        let has_machine = graph
            .graph
            .node_weights()
            .any(|n| matches!(n, Node::Machine { .. }));
        assert!(has_source && has_sink && has_machine);
    }

    #[test]
    fn classify_recognizes_every_known_variable_pattern() {
        assert_eq!(classify("M3"), NameKind::Machine(3));
        assert_eq!(classify("M3_IN_water"), NameKind::MachineIn(3, "water".into()));
        assert_eq!(classify("M3_OUT_hydrogen"), NameKind::MachineOut(3, "hydrogen".into()));
        assert_eq!(classify("SOURCE_water"), NameKind::Source("water".into()));
        assert_eq!(classify("SOURCE_OUT_water"), NameKind::SourceOut("water".into()));
        assert_eq!(classify("SOURCE_TAX_water"), NameKind::SourceTax("water".into()));
        assert_eq!(classify("SINK_hydrogen"), NameKind::Sink("hydrogen".into()));
        assert_eq!(classify("SINK_IN_hydrogen"), NameKind::SinkIn("hydrogen".into()));
        assert_eq!(
            classify("SOURCE_OUT_water_TO_M0_IN_water"),
            NameKind::Link("SOURCE_OUT_water".into(), "M0_IN_water".into())
        );
    }
}
