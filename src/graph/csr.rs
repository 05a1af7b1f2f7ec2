//! Frozen graph in compressed sparse row layout
//!
//! Every node's outgoing edges sit in one contiguous slice, so a ranking
//! pass is a linear sweep over `edges`.

use super::builder::GraphBuilder;

/// Directed half of an undirected edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: u32,
    pub weight: f64,
}

#[derive(Debug, Clone, Default)]
pub struct CsrGraph {
    /// `edges[offsets[i]..offsets[i + 1]]` leave node i
    offsets: Vec<usize>,
    edges: Vec<Edge>,
    /// Sum of outgoing weights per node
    strength: Vec<f64>,
    labels: Vec<String>,
}

impl CsrGraph {
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let n = builder.node_count();
        let mut graph = Self {
            offsets: Vec::with_capacity(n + 1),
            edges: Vec::with_capacity(builder.edge_count() * 2),
            strength: Vec::with_capacity(n),
            labels: Vec::with_capacity(n),
        };

        graph.offsets.push(0);
        for (_, label, adjacency) in builder.nodes() {
            let start = graph.edges.len();
            graph
                .edges
                .extend(adjacency.iter().map(|(&target, &weight)| Edge { target, weight }));
            // Hash order is arbitrary; fix it so float sums are reproducible
            graph.edges[start..].sort_unstable_by_key(|e| e.target);

            graph.strength.push(graph.edges[start..].iter().map(|e| e.weight).sum());
            graph.offsets.push(graph.edges.len());
            graph.labels.push(label.to_string());
        }
        graph
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Directed edge count; each undirected edge appears twice, a self-loop once
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Outgoing edges of `node`, sorted by target
    pub fn edges(&self, node: u32) -> &[Edge] {
        let i = node as usize;
        &self.edges[self.offsets[i]..self.offsets[i + 1]]
    }

    /// Weighted degree, self-loop included
    pub fn strength(&self, node: u32) -> f64 {
        self.strength[node as usize]
    }

    pub fn label(&self, node: u32) -> &str {
        &self.labels[node as usize]
    }

    /// Nodes with no outgoing weight
    pub fn isolated(&self) -> impl Iterator<Item = u32> + '_ {
        self.strength
            .iter()
            .enumerate()
            .filter(|(_, &s)| s <= 0.0)
            .map(|(i, _)| i as u32)
    }
}
