#[cfg(test)]
#[path = "../../../tests/unit/algorithms/flow/network_test.rs"]
mod network_test;

use crate::utils::Float;

/// A node index in the network.
pub type NodeId = usize;

/// An edge index in the network arena.
pub type EdgeId = usize;

/// A capacity used for edges without explicit limit.
pub const UNBOUNDED_CAPACITY: i64 = i64::MAX;

/// A directed edge in the residual network.
#[derive(Clone, Debug)]
pub struct FlowEdge {
    /// Edge tail.
    pub from: NodeId,
    /// Edge head.
    pub to: NodeId,
    /// Edge capacity.
    pub capacity: i64,
    /// Cost of one unit of flow.
    pub cost: Float,
    flow: i64,
}

impl FlowEdge {
    /// Returns amount of flow which can still be pushed through the edge.
    pub fn residual(&self) -> i64 {
        self.capacity - self.flow
    }

    /// Returns current flow.
    pub fn flow(&self) -> i64 {
        self.flow
    }
}

/// A flow network stored as arena: every edge added with `add_edge` is followed by its reverse
/// residual edge, so edge `id ^ 1` is always the twin of `id`.
#[derive(Clone, Debug, Default)]
pub struct FlowNetwork {
    edges: Vec<FlowEdge>,
    adjacency: Vec<Vec<EdgeId>>,
}

impl FlowNetwork {
    /// Creates a network with given amount of nodes and no edges.
    pub fn new(size: usize) -> Self {
        Self { edges: Vec::default(), adjacency: vec![Vec::default(); size] }
    }

    /// Returns amount of nodes.
    pub fn size(&self) -> usize {
        self.adjacency.len()
    }

    /// Adds a directed edge and its residual twin, returns forward edge id.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, capacity: i64, cost: Float) -> EdgeId {
        assert!(from < self.size() && to < self.size(), "node index is out of range");
        assert!(capacity >= 0, "capacity cannot be negative");

        let id = self.edges.len();

        self.edges.push(FlowEdge { from, to, capacity, cost, flow: 0 });
        self.edges.push(FlowEdge { from: to, to: from, capacity: 0, cost: -cost, flow: 0 });

        self.adjacency[from].push(id);
        self.adjacency[to].push(id + 1);

        id
    }

    /// Returns edge by its id.
    pub fn edge(&self, id: EdgeId) -> &FlowEdge {
        &self.edges[id]
    }

    /// Returns all edges, including residual twins.
    pub fn edges(&self) -> &[FlowEdge] {
        self.edges.as_slice()
    }

    /// Returns ids of edges going out from given node.
    pub fn outgoing(&self, node: NodeId) -> &[EdgeId] {
        self.adjacency[node].as_slice()
    }

    /// Pushes flow through the edge updating its residual twin.
    pub fn push(&mut self, id: EdgeId, amount: i64) {
        self.edges[id].flow += amount;
        self.edges[id ^ 1].flow -= amount;
    }
}
