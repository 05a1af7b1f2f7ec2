//! Weighted PageRank by power iteration
//!
//! A node passes `damping` of its rank to its neighbours in proportion to
//! edge weight. A self-loop is an ordinary edge, so a node keeps that share
//! of its rank. Rank held by isolated nodes is spread over every node, so
//! the vector stays a distribution.

use super::Ranking;
use crate::graph::csr::CsrGraph;

#[derive(Debug, Clone)]
pub struct StandardPageRank {
    pub damping: f64,
    pub max_iterations: usize,
    /// Stop once the L1 change between passes is at most this
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-4,
        }
    }
}

impl StandardPageRank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Rank every node of `graph`
    ///
    /// Hitting `max_iterations` still yields scores, flagged `converged = false`.
    pub fn run(&self, graph: &CsrGraph) -> Ranking {
        let n = graph.node_count();
        if n == 0 {
            return Ranking {
                converged: true,
                ..Ranking::default()
            };
        }

        let uniform = 1.0 / n as f64;
        let isolated: Vec<usize> = graph.isolated().map(|v| v as usize).collect();
        let mut rank = vec![uniform; n];
        let mut next = vec![0.0; n];

        let mut iterations = 0;
        let mut delta = f64::INFINITY;
        while delta > self.threshold && iterations < self.max_iterations {
            let leaked: f64 = isolated.iter().map(|&v| rank[v]).sum();
            next.fill((1.0 - self.damping + self.damping * leaked) * uniform);

            for (source, &r) in rank.iter().enumerate() {
                let strength = graph.strength(source as u32);
                if strength <= 0.0 {
                    continue;
                }
                let outflow = self.damping * r / strength;
                for edge in graph.edges(source as u32) {
                    next[edge.target as usize] += outflow * edge.weight;
                }
            }

            delta = l1_distance(&rank, &next);
            std::mem::swap(&mut rank, &mut next);
            iterations += 1;
        }

        let total: f64 = rank.iter().sum();
        if total > 0.0 {
            rank.iter_mut().for_each(|r| *r /= total);
        }
        Ranking {
            scores: rank,
            iterations,
            delta,
            converged: delta <= self.threshold,
        }
    }
}

fn l1_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}
