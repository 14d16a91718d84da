pub mod config;
pub mod edge_reader;
pub mod error;
pub mod generator;

use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use log::{debug, info};

use common::types::Tour;
use config::{GeneratorConfig, SolverConfig};
use error::Error;
use generator::InstanceGenerator;
use tsp_solver_core::AdjacencyMatrix;
use tsp_solver_core::solver::BruteForceSolver;
use tsp_solver_core::traits::TourSolver;

enum Command {
    Solve(PathBuf),
    Generate {
        num_vertices: usize,
        seed: Option<u64>,
    },
}

fn main() {
    env_logger::init();

    let command = parse_args();
    if let Err(e) = run(command) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

/// Parse command-line arguments into the command to run
fn parse_args() -> Command {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("solve") if args.len() == 3 => Command::Solve(PathBuf::from(&args[2])),
        Some("gen") if args.len() == 3 || args.len() == 4 => {
            let num_vertices = match args[2].parse() {
                Ok(n) => n,
                Err(_) => usage(&args[0]),
            };
            let seed = match args.get(3) {
                Some(raw) => match raw.parse() {
                    Ok(seed) => Some(seed),
                    Err(_) => usage(&args[0]),
                },
                None => None,
            };
            Command::Generate { num_vertices, seed }
        }
        _ => usage(args.first().map_or("executor", String::as_str)),
    }
}

fn usage(program: &str) -> ! {
    eprintln!("usage: {} solve <edge-file>", program);
    eprintln!("       {} gen <n-vertices> [seed]", program);
    eprintln!();
    eprintln!("solve - print the cost of the cheapest Hamiltonian cycle of the graph");
    eprintln!("        in <edge-file>. Each line of <edge-file> holds one directed");
    eprintln!("        edge of the form `source destination weight`.");
    eprintln!("gen   - write a random complete instance to stdout.");
    process::exit(1);
}

fn run(command: Command) -> Result<(), Error> {
    let config = config::load_config()?;

    match command {
        Command::Solve(path) => solve_instance(&path, &config.solver),
        Command::Generate { num_vertices, seed } => {
            generate_instance(num_vertices, seed, &config.generator)
        }
    }
}

fn solve_instance(path: &Path, config: &SolverConfig) -> Result<(), Error> {
    let edges = edge_reader::read_edges(path)?;

    let num_vertices = AdjacencyMatrix::vertex_count(&edges);
    if num_vertices > config.max_vertices {
        return Err(Error::TooManyVertices {
            found: num_vertices,
            limit: config.max_vertices,
        });
    }

    info!(
        "{}: {} edges over {} vertices",
        path.display(),
        edges.len(),
        num_vertices
    );

    let matrix = AdjacencyMatrix::try_from_edges(&edges)?;

    match BruteForceSolver.minimum_tour(&matrix) {
        Some(tour) => {
            log_tour(&matrix, &tour)?;
            println!("{}", tour.cost);
        }
        None => println!("No Hamiltonian cycle exists."),
    }

    Ok(())
}

/// Traces the winning tour leg by leg at debug level.
fn log_tour(matrix: &AdjacencyMatrix, tour: &Tour) -> Result<(), Error> {
    debug!("minimum tour visits {:?} at cost {}", tour.order, tour.cost);

    let k = tour.num_vertices();
    for i in 0..k {
        // the matrix is keyed destination-first, so the traversed edge runs
        // from the following vertex in the order back into the current one
        let to = tour.order[i];
        let from = tour.order[(i + 1) % k];
        debug!("  leg {} -> {}: {}", from, to, matrix.try_weight(to, from)?);
    }

    Ok(())
}

fn generate_instance(
    num_vertices: usize,
    seed: Option<u64>,
    config: &GeneratorConfig,
) -> Result<(), Error> {
    let mut generator = InstanceGenerator::new(config, seed);
    let edges = generator.complete_instance(num_vertices);

    info!(
        "generated complete instance: {} vertices, {} edges",
        num_vertices,
        edges.len()
    );

    let stdout = io::stdout();
    generator::write_instance(&mut stdout.lock(), &edges).map_err(|e| Error::Io {
        path: "<stdout>".to_string(),
        source: e,
    })
}
