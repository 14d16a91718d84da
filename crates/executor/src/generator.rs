use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::io::{self, Write};

use super::config::GeneratorConfig;
use common::types::WeightedEdge;

/// Produces synthetic complete instances for exercising the solver.
///
/// Every ordered pair of distinct vertices gets one edge with a weight drawn
/// uniformly from the configured range, so the emitted graph always has a
/// Hamiltonian cycle. A seed makes the instance reproducible; without one
/// the generator seeds itself from the OS.
pub struct InstanceGenerator {
    rng: SmallRng,
    min_weight: f64,
    max_weight: f64,
}

impl InstanceGenerator {
    pub fn new(config: &GeneratorConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        InstanceGenerator {
            rng,
            min_weight: config.min_weight,
            max_weight: config.max_weight,
        }
    }

    /// Generates the edge list of a complete directed instance on
    /// `num_vertices` vertices.
    pub fn complete_instance(&mut self, num_vertices: usize) -> Vec<WeightedEdge> {
        let weight_range = self.min_weight..=self.max_weight;

        let mut edges =
            Vec::with_capacity(num_vertices * num_vertices.saturating_sub(1));

        for from in 0..num_vertices {
            for to in 0..num_vertices {
                if from == to {
                    continue;
                }
                let weight = self.rng.random_range(weight_range.clone());
                edges.push((from, to, weight));
            }
        }

        edges
    }
}

/// Writes an edge list in the textual instance format, one
/// `source destination weight` record per line.
pub fn write_instance(out: &mut impl Write, edges: &[WeightedEdge]) -> io::Result<()> {
    for &(from, to, weight) in edges {
        writeln!(out, "{} {} {}", from, to, weight)?;
    }
    Ok(())
}
