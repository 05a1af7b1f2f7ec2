//! Node ranking
//!
//! [`StandardPageRank`] scores the nodes of a [`crate::graph::csr::CsrGraph`];
//! the outcome is a [`Ranking`].

pub mod standard;

pub use standard::StandardPageRank;

/// Scores from one ranking run, indexed by node ID
#[derive(Debug, Clone, Default)]
pub struct Ranking {
    pub scores: Vec<f64>,
    pub iterations: usize,
    /// L1 change of the last pass
    pub delta: f64,
    pub converged: bool,
}

impl Ranking {
    /// The `n` best nodes, highest score first
    ///
    /// Equal scores keep ascending node order.
    pub fn best(&self, n: usize) -> Vec<(u32, f64)> {
        let mut order: Vec<u32> = (0..self.scores.len() as u32).collect();
        order.sort_by(|&a, &b| self.score(b).total_cmp(&self.score(a)));
        order.into_iter().take(n).map(|id| (id, self.score(id))).collect()
    }

    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }

    pub fn is_finite(&self) -> bool {
        self.scores.iter().all(|s| s.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranking(scores: Vec<f64>) -> Ranking {
        Ranking {
            scores,
            iterations: 1,
            delta: 0.0,
            converged: true,
        }
    }

    #[test]
    fn test_best_breaks_ties_by_node() {
        let r = ranking(vec![0.2, 0.4, 0.2, 0.1]);

        assert_eq!(r.best(3), vec![(1, 0.4), (0, 0.2), (2, 0.2)]);
        assert_eq!(r.best(10).len(), 4);
        assert!(r.best(0).is_empty());
    }

    #[test]
    fn test_missing_node_scores_zero() {
        assert_eq!(ranking(vec![1.0]).score(5), 0.0);
    }

    #[test]
    fn test_non_finite_detected() {
        assert!(ranking(vec![0.5, 0.5]).is_finite());
        assert!(!ranking(vec![0.5, f64::NAN]).is_finite());
        assert!(Ranking::default().is_finite());
    }
}
