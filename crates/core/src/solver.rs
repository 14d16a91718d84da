use super::matrix::AdjacencyMatrix;
use super::permutation::TailPermutations;
use super::traits::TourSolver;
use common::types::Tour;

/// Exact solver that prices every candidate cycle.
///
/// Sweeps all `(n-1)!` visiting orders (vertex 0 pinned, rotations skipped)
/// and keeps the cheapest order whose every leg exists. O((n-1)! * n) time
/// and O(n^2) space for the matrix; deliberately brute force and only
/// practical for small instances. Pruning and smarter reductions are out of
/// scope.
///
/// A solve is a pure read over the matrix with no hidden state. Independent
/// solves may run on separate threads.
pub struct BruteForceSolver;

impl BruteForceSolver {
    /// Prices one visiting order, or returns `None` when the order crosses
    /// a missing edge.
    ///
    /// Lookups follow the matrix's destination-first convention:
    /// `weight(order[i], order[i + 1])` consults the edge directed from the
    /// *following* vertex back into the current one. Asymmetric instances
    /// depend on this orientation, so it is kept exactly as the matrix
    /// defines it.
    fn cycle_cost(matrix: &AdjacencyMatrix, order: &[usize]) -> Option<f64> {
        let k = order.len();
        let mut cost = 0.0;

        for i in 0..k {
            let leg = matrix.weight(order[i], order[(i + 1) % k]);
            if !leg.is_finite() {
                // Not a traversable cycle; drop the remaining legs entirely.
                return None;
            }
            cost += leg;
        }

        Some(cost)
    }
}

impl TourSolver for BruteForceSolver {
    fn minimum_tour(&self, matrix: &AdjacencyMatrix) -> Option<Tour> {
        let n = matrix.num_vertices();
        if n == 0 {
            return None;
        }

        // Infinity doubles as the "no cycle found yet" sentinel.
        let mut min_cost = f64::INFINITY;
        let mut best_order: Option<Vec<usize>> = None;

        let mut permutations = TailPermutations::new(n);
        loop {
            if let Some(cost) = Self::cycle_cost(matrix, permutations.current()) {
                if cost < min_cost {
                    min_cost = cost;
                    best_order = Some(permutations.current().to_vec());
                }
            }

            if !permutations.advance() {
                break;
            }
        }

        best_order.map(|order| Tour {
            order,
            cost: min_cost,
        })
    }
}
