//! The typed solution graph, built by [`crate::extractor::extract`] and
//! consumed by `factoryplan-viz`.
//!
//! Node identity is `petgraph::graph::NodeIndex`, so unlike the builder's
//! variable names there is no separate `id` field threaded through every
//! variant — the graph itself is the identity source.

use factoryplan_core::Item;
use petgraph::graph::DiGraph;

pub type NodeId = petgraph::graph::NodeIndex;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Source {
        item: Item,
        quantity: f64,
    },
    Sink {
        item: Item,
        quantity: f64,
    },
    Machine {
        name: String,
        quantity: f64,
        recipe_index: usize,
    },
    MachineInputPort {
        machine_id: NodeId,
        item: Item,
        quantity: f64,
    },
    MachineOutputPort {
        machine_id: NodeId,
        item: Item,
        quantity: f64,
    },
    /// The junction between a `SOURCE_OUT_<x>`/`SINK_IN_<x>` bookkeeping
    /// variable and the bipartite links attached to it.
    ItemJunction {
        item: Item,
        quantity: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Edge {
    ItemFlow { item: Item, quantity: f64 },
    /// Layout-only edge attaching a port to the machine box it belongs to.
    MachinePort { machine_id: NodeId },
}

/// A rendered production plan: machines, sources, sinks, and the item flows
/// linking them. Produced once per solve, read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct SolutionGraph {
    pub graph: DiGraph<Node, Edge>,
}

impl SolutionGraph {
    pub fn new() -> SolutionGraph {
        SolutionGraph::default()
    }

    pub fn add_node(&mut self, node: Node) -> NodeId {
        self.graph.add_node(node)
    }

    pub fn add_edge(&mut self, from: NodeId, to: NodeId, edge: Edge) {
        self.graph.add_edge(from, to, edge);
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
