use super::matrix::AdjacencyMatrix;
use common::types::Tour;

/// Trait for solvers that search a graph for its cheapest Hamiltonian cycle.
pub trait TourSolver {
    /// Finds the minimum-cost Hamiltonian cycle of the graph.
    ///
    /// Returns `Some(tour)` with the cheapest cycle found, or `None` when
    /// the graph has no Hamiltonian cycle at all.
    fn minimum_tour(&self, matrix: &AdjacencyMatrix) -> Option<Tour>;
}
