//! Mutable sentence graph
//!
//! Undirected and weighted. Node IDs are dense `u32`s in insertion order and
//! each node's adjacency is an `FxHashMap` so repeated weight updates stay O(1).
//! A node may link to itself; the self-loop is stored once in its own
//! adjacency.

use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Below this many nodes pairwise weights are computed sequentially
pub const PARALLEL_THRESHOLD: usize = 64;

#[derive(Debug, Default)]
pub struct GraphBuilder {
    labels: Vec<String>,
    adjacency: Vec<FxHashMap<u32, f64>>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node and return its ID
    pub fn add_node(&mut self, label: impl Into<String>) -> u32 {
        self.labels.push(label.into());
        self.adjacency.push(FxHashMap::default());
        (self.labels.len() - 1) as u32
    }

    /// Add `weight` to the undirected edge `a`-`b`
    ///
    /// Unknown nodes and non-positive weights are ignored.
    pub fn increment_edge(&mut self, a: u32, b: u32, weight: f64) {
        let n = self.labels.len() as u32;
        if a >= n || b >= n || weight <= 0.0 {
            return;
        }
        *self.adjacency[a as usize].entry(b).or_default() += weight;
        if a != b {
            *self.adjacency[b as usize].entry(a).or_default() += weight;
        }
    }

    /// Complete graph over `labels` weighted by `weight(i, j)`
    ///
    /// `weight` is called once per pair with `i <= j`, so `weight(i, i)` sets
    /// the self-loop of node i. Pairs scoring zero get no edge. Inputs of
    /// [`PARALLEL_THRESHOLD`] nodes or more are scored on the rayon pool.
    pub fn from_pairwise<F>(labels: Vec<String>, weight: F) -> Self
    where
        F: Fn(usize, usize) -> f64 + Sync,
    {
        let n = labels.len();
        let mut builder = Self::new();
        for label in labels {
            builder.add_node(label);
        }

        let row = |i: usize| (i..n).map(move |j| (i, j)).collect::<Vec<_>>();
        let scored: Vec<(usize, usize, f64)> = if n < PARALLEL_THRESHOLD {
            (0..n)
                .flat_map(row)
                .map(|(i, j)| (i, j, weight(i, j)))
                .collect()
        } else {
            (0..n)
                .into_par_iter()
                .flat_map_iter(row)
                .map(|(i, j)| (i, j, weight(i, j)))
                .collect()
        };

        for (i, j, w) in scored {
            builder.increment_edge(i as u32, j as u32, w);
        }
        builder
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Undirected edge count, self-loops included
    pub fn edge_count(&self) -> usize {
        let loops = self.self_loop_count();
        (self.adjacency.iter().map(FxHashMap::len).sum::<usize>() - loops) / 2 + loops
    }

    pub fn self_loop_count(&self) -> usize {
        self.adjacency
            .iter()
            .enumerate()
            .filter(|(i, edges)| edges.contains_key(&(*i as u32)))
            .count()
    }

    pub fn label(&self, node: u32) -> Option<&str> {
        self.labels.get(node as usize).map(String::as_str)
    }

    /// Current weight of the edge `a`-`b`, if any
    pub fn weight(&self, a: u32, b: u32) -> Option<f64> {
        self.adjacency.get(a as usize)?.get(&b).copied()
    }

    /// `(id, label, adjacency)` for every node in ID order
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &str, &FxHashMap<u32, f64>)> {
        self.labels
            .iter()
            .zip(&self.adjacency)
            .enumerate()
            .map(|(i, (label, edges))| (i as u32, label.as_str(), edges))
    }
}
