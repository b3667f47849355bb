//! # factoryplan-viz: renders a [`SolutionGraph`] to Graphviz DOT
//!
//! Renders the typed node/edge graph as plain DOT via `petgraph::dot`, a
//! crate already in the dependency tree through `factoryplan-algo`'s
//! [`factoryplan_algo::graph::SolutionGraph`], rather than pull in a
//! separate Graphviz binding just for table-cluster decoration.

use factoryplan_algo::graph::{Edge, Node, SolutionGraph};
use factoryplan_core::ItemTable;
use petgraph::dot::{Config, Dot};
use petgraph::visit::EdgeRef;

/// Renders `graph` as a DOT document. `items` resolves the [`factoryplan_core::Item`]
/// handles carried by every node/edge back to their display names.
pub fn render_dot(graph: &SolutionGraph, items: &ItemTable) -> String {
    let dot = Dot::with_attr_getters(
        &graph.graph,
        &[Config::EdgeNoLabel, Config::NodeNoLabel],
        &|_, edge| format!("label=\"{}\"", edge_label(items, edge.weight())),
        &|_, (_, node)| format!("label=\"{}\" shape={}", node_label(items, node), node_shape(node)),
    );
    format!("{dot:?}")
}

fn node_label(items: &ItemTable, node: &Node) -> String {
    match node {
        Node::Source { item, quantity } => {
            format!("SOURCE\\n{}\\n{:.3}/s", items.name(*item), -quantity)
        }
        Node::Sink { item, quantity } => {
            format!("SINK\\n{}\\n{:.3}/s", items.name(*item), quantity)
        }
        Node::Machine {
            name,
            quantity,
            recipe_index,
        } => format!("{name}\\n#{recipe_index}\\n{quantity:.3}x"),
        Node::MachineInputPort { item, quantity, .. } => {
            format!("IN {}\\n{:.3}/s", items.name(*item), quantity)
        }
        Node::MachineOutputPort { item, quantity, .. } => {
            format!("OUT {}\\n{:.3}/s", items.name(*item), quantity)
        }
        Node::ItemJunction { item, quantity } => {
            format!("{}\\n{:.3}/s", items.name(*item), quantity)
        }
    }
}

fn node_shape(node: &Node) -> &'static str {
    match node {
        Node::Source { .. } => "invhouse",
        Node::Sink { .. } => "house",
        Node::Machine { .. } => "box",
        Node::MachineInputPort { .. } | Node::MachineOutputPort { .. } => "ellipse",
        Node::ItemJunction { .. } => "point",
    }
}

fn edge_label(items: &ItemTable, edge: &Edge) -> String {
    match edge {
        Edge::ItemFlow { item, quantity } => format!("{} {:.3}/s", items.name(*item), quantity),
        Edge::MachinePort { .. } => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use factoryplan_algo::{builder, extractor, solver};
    use factoryplan_core::{FactoryConfig, GameTime, ItemStack, ItemTable, Recipe, RecipeKind, TargetRate, Voltage, VoltageTier};

    #[test]
    fn renders_dot_with_source_machine_sink() {
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
        let result = solver::solve(&system).unwrap();
        let graph = extractor::extract(&config, &index, &result.values);

        let dot = render_dot(&graph, &config.items);
        assert!(dot.starts_with("digraph"));
        assert!(dot.contains("water"));
        assert!(dot.contains("hydrogen"));
    }

    #[test]
    fn empty_graph_still_renders_valid_dot() {
        let graph = SolutionGraph::new();
        let items = ItemTable::new();
        let dot = render_dot(&graph, &items);
        assert!(dot.contains("digraph"));
    }
}
