use thiserror::Error;

use common::error::Error as SolverError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("{path}:{line}: malformed edge record: {detail}")]
    MalformedRecord {
        path: String,
        line: u64,
        detail: String,
    },

    #[error("{path}: file does not contain any edges")]
    EmptyInput { path: String },

    #[error("Failed to load config: {0}")]
    ConfigLoad(String),

    #[error("Graph processing error: {0}")]
    Graph(#[from] SolverError),

    #[error("instance has {found} vertices; refusing to enumerate more than {limit} (raise solver.max_vertices to override)")]
    TooManyVertices { found: usize, limit: usize },
}
