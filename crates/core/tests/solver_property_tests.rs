use std::collections::HashMap;

use common::types::WeightedEdge;
use proptest::prelude::*;
use proptest::strategy::Strategy;
use tsp_solver_core::matrix::AdjacencyMatrix;
use tsp_solver_core::permutation::TailPermutations;
use tsp_solver_core::solver::BruteForceSolver;
use tsp_solver_core::traits::TourSolver;

const NUM_VERTICES_STRATEGY: std::ops::Range<usize> = 1usize..7;

fn edge_list_strategy() -> impl Strategy<Value = (usize, Vec<WeightedEdge>)> {
    NUM_VERTICES_STRATEGY.prop_flat_map(|num_vertices| {
        let edge_generator = (0usize..num_vertices, 0usize..num_vertices, 0.01f64..10.0);
        let edges_generator = prop::collection::vec(edge_generator, 1..30);

        (proptest::strategy::Just(num_vertices), edges_generator)
    })
}

fn factorial(n: usize) -> usize {
    (1..=n).product()
}

proptest! {
    /// Property: the sweep examines (n-1)! candidates no matter how dense
    /// the instance is; edges only affect validity and cost.
    #[test]
    fn permutation_sweep_is_exhaustive(num_vertices in NUM_VERTICES_STRATEGY) {
        let mut perms = TailPermutations::new(num_vertices);

        let mut examined = 1usize;
        while perms.advance() {
            examined += 1;
        }

        prop_assert_eq!(examined, factorial(num_vertices - 1));
    }

    /// Property: solving the same matrix twice yields the same result; the
    /// matrix is never mutated by a solve.
    #[test]
    fn solve_is_idempotent((_, edges) in edge_list_strategy()) {
        let matrix = AdjacencyMatrix::from_edges(&edges);

        let first = BruteForceSolver.minimum_tour(&matrix);
        let second = BruteForceSolver.minimum_tour(&matrix);

        prop_assert_eq!(first, second);
    }

    /// Property: matrix cells follow the destination-first convention, with
    /// the later edge winning when two triples share a cell.
    #[test]
    fn matrix_cells_hold_the_reversed_lookup((_, edges) in edge_list_strategy()) {
        let matrix = AdjacencyMatrix::from_edges(&edges);

        let mut expected: HashMap<(usize, usize), f64> = HashMap::new();
        for &(src, dst, weight) in &edges {
            expected.insert((dst, src), weight);
        }

        for ((to, from), weight) in expected {
            prop_assert_eq!(matrix.weight(to, from), weight);
        }
    }

    /// Property: a complete graph with unit weights always tours at cost n.
    #[test]
    fn complete_unit_graph_costs_its_vertex_count(num_vertices in 2usize..7) {
        let mut edges: Vec<WeightedEdge> = Vec::new();
        for u in 0..num_vertices {
            for v in 0..num_vertices {
                if u != v {
                    edges.push((u, v, 1.0));
                }
            }
        }

        let matrix = AdjacencyMatrix::from_edges(&edges);
        let tour = BruteForceSolver.minimum_tour(&matrix);

        prop_assert!(tour.is_some());
        let tour = tour.unwrap();
        prop_assert_eq!(tour.cost, num_vertices as f64);
        prop_assert_eq!(tour.num_vertices(), num_vertices);
    }

    /// Property: a reported tour is a permutation starting at vertex 0, all
    /// of its legs exist, and its cost is the sum of those legs.
    #[test]
    fn reported_tour_is_consistent_with_the_matrix((_, edges) in edge_list_strategy()) {
        let matrix = AdjacencyMatrix::from_edges(&edges);

        if let Some(tour) = BruteForceSolver.minimum_tour(&matrix) {
            let k = tour.num_vertices();
            prop_assert_eq!(k, matrix.num_vertices());
            prop_assert_eq!(tour.order[0], 0);

            let mut seen = vec![false; k];
            for &v in &tour.order {
                prop_assert!(v < k && !seen[v]);
                seen[v] = true;
            }

            let mut recomputed = 0.0;
            for i in 0..k {
                let leg = matrix.weight(tour.order[i], tour.order[(i + 1) % k]);
                prop_assert!(leg.is_finite());
                recomputed += leg;
            }
            prop_assert!((recomputed - tour.cost).abs() < 1e-9);
        }
    }
}
