use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// Indicates an attempt to access a vertex index that exceeds the matrix size (N).
    VertexOutOfBounds(usize),

    /// The edge list was empty; no vertices can be derived from it.
    EmptyEdgeSet,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::VertexOutOfBounds(v) => write!(f, "Vertex index {} is out of bounds.", v),

            Error::EmptyEdgeSet => {
                write!(f, "Edge set is empty; a graph needs at least one edge.")
            }
        }
    }
}

impl std::error::Error for Error {}
