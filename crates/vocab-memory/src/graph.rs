//! petgraph::StableGraph wrapper holding the concept graph.

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};
use serde::{Deserialize, Serialize};

use vocab_core::models::Node;
use vocab_core::normalize::canonical_id;

/// Edge kinds. `Narrower` and `Member` point downward; `Related` is stored
/// once and read in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    Narrower,
    Member,
    Related,
}

/// The underlying directed graph type. Node weights carry labels only;
/// relation lists are derived from edges on read.
pub type VocabStableGraph = StableGraph<Node, EdgeKind, Directed>;

/// Wrapper providing indexed access to the concept graph.
#[derive(Debug, Default)]
pub struct IndexedGraph {
    pub graph: VocabStableGraph,
    /// Canonical id → node.
    id_index: HashMap<String, NodeIndex>,
    /// URI → node.
    uri_index: HashMap<String, NodeIndex>,
}

impl IndexedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node. Returns `None` when its id or URI is already taken.
    pub fn insert(&mut self, node: Node) -> Option<NodeIndex> {
        let key = canonical_id(&node.id);
        if self.id_index.contains_key(&key) || self.uri_index.contains_key(&node.uri) {
            return None;
        }
        let uri = node.uri.clone();
        let idx = self.graph.add_node(node);
        self.id_index.insert(key, idx);
        self.uri_index.insert(uri, idx);
        Some(idx)
    }

    /// Add an edge unless the same edge already exists.
    pub fn link(&mut self, from: NodeIndex, to: NodeIndex, kind: EdgeKind) -> bool {
        if self.has_edge(from, to, kind) {
            return false;
        }
        if kind == EdgeKind::Related && self.has_edge(to, from, kind) {
            return false;
        }
        self.graph.add_edge(from, to, kind);
        true
    }

    fn has_edge(&self, from: NodeIndex, to: NodeIndex, kind: EdgeKind) -> bool {
        self.neighbors(from, kind, Direction::Outgoing).contains(&to)
    }

    /// Look up a node by id, type-agnostically.
    pub fn by_id(&self, id: &str) -> Option<NodeIndex> {
        self.id_index.get(&canonical_id(id)).copied()
    }

    pub fn by_uri(&self, uri: &str) -> Option<NodeIndex> {
        self.uri_index.get(uri).copied()
    }

    pub fn node(&self, idx: NodeIndex) -> Option<&Node> {
        self.graph.node_weight(idx)
    }

    /// Every node, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &Node)> {
        self.graph
            .node_indices()
            .filter_map(move |idx| self.graph.node_weight(idx).map(|node| (idx, node)))
    }

    /// Neighbors over edges of `kind` in `direction`, in node insertion order.
    pub fn neighbors(&self, idx: NodeIndex, kind: EdgeKind, direction: Direction) -> Vec<NodeIndex> {
        let mut found: Vec<NodeIndex> = self
            .graph
            .edges_directed(idx, direction)
            .filter(|edge| *edge.weight() == kind)
            .filter_map(|edge| self.graph.edge_endpoints(edge.id()))
            .map(|(source, target)| match direction {
                Direction::Outgoing => target,
                Direction::Incoming => source,
            })
            .collect();
        found.sort();
        found.dedup();
        found
    }

    /// Narrower concepts and members: one level down.
    pub fn children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut children = self.neighbors(idx, EdgeKind::Narrower, Direction::Outgoing);
        children.extend(self.neighbors(idx, EdgeKind::Member, Direction::Outgoing));
        children.sort();
        children.dedup();
        children
    }

    /// A node with its relation lists filled in from the graph.
    pub fn detail(&self, idx: NodeIndex) -> Option<Node> {
        let mut node = self.node(idx)?.clone();
        let ids = |indices: Vec<NodeIndex>| -> Vec<String> {
            indices
                .into_iter()
                .filter_map(|i| self.node(i).map(|n| n.id.clone()))
                .collect()
        };

        node.broader = ids(self.neighbors(idx, EdgeKind::Narrower, Direction::Incoming));
        node.narrower = ids(self.neighbors(idx, EdgeKind::Narrower, Direction::Outgoing));
        let mut related = self.neighbors(idx, EdgeKind::Related, Direction::Outgoing);
        related.extend(self.neighbors(idx, EdgeKind::Related, Direction::Incoming));
        related.sort();
        related.dedup();
        node.related = ids(related);
        node.members = ids(self.neighbors(idx, EdgeKind::Member, Direction::Outgoing));
        node.member_of = ids(self.neighbors(idx, EdgeKind::Member, Direction::Incoming));
        Some(node)
    }

    pub fn has_incoming(&self, idx: NodeIndex, kind: EdgeKind) -> bool {
        self.graph
            .edges_directed(idx, Direction::Incoming)
            .any(|edge| *edge.weight() == kind)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
