use common::error::Error;
use common::types::{WeightedEdge, destination, source, weight};

/// Dense adjacency matrix of a directed, weighted graph.
///
/// Cells are keyed `[destination][source]`: `weight(d, s)` holds the weight
/// of the edge directed from `s` into `d`, and `f64::INFINITY` marks the
/// absence of a direct connection. The reversed key order is deliberate and
/// load-bearing: the solver reads its cost lookups through the same
/// convention, and flipping one side without the other changes which cycles
/// exist in an asymmetric graph.
///
/// Built once from a deduplicated edge list and read-only afterwards; the
/// solve that owns it drops it when done.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix {
    num_vertices: usize,
    cells: Vec<f64>, // row-major, row index = destination
}

impl AdjacencyMatrix {
    /// Number of vertices implied by an edge list: one past the largest
    /// endpoint id, or zero when there are no edges.
    pub fn vertex_count(edges: &[WeightedEdge]) -> usize {
        edges
            .iter()
            .flat_map(|&(u, v, _)| [u, v])
            .max()
            .map_or(0, |max_id| max_id + 1)
    }

    /// Builds the matrix from a list of directed edges `(src, dst, weight)`.
    ///
    /// Removing duplicate triples is the caller's job; the builder does not
    /// deduplicate. Distinct triples can still collide on a
    /// `(destination, source)` cell when only their weights differ, and in
    /// that case the later edge in the slice wins.
    ///
    /// An empty slice yields a zero-vertex matrix, which every solver treats
    /// as "no cycle". Use [`try_from_edges`](Self::try_from_edges) to reject
    /// that case up front.
    pub fn from_edges(edges: &[WeightedEdge]) -> Self {
        let num_vertices = Self::vertex_count(edges);
        let mut cells = vec![f64::INFINITY; num_vertices * num_vertices];

        for edge in edges {
            cells[destination(edge) * num_vertices + source(edge)] = weight(edge);
        }

        Self {
            num_vertices,
            cells,
        }
    }

    /// Strict variant of [`from_edges`](Self::from_edges) for callers that
    /// require a non-empty instance.
    ///
    /// # Errors
    /// Returns `Error::EmptyEdgeSet` if `edges` contains no edges.
    pub fn try_from_edges(edges: &[WeightedEdge]) -> Result<Self, Error> {
        if edges.is_empty() {
            return Err(Error::EmptyEdgeSet);
        }
        Ok(Self::from_edges(edges))
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Weight of the edge arriving at `to` from `from`, or `f64::INFINITY`
    /// when the graph has no such edge.
    #[inline]
    pub fn weight(&self, to: usize, from: usize) -> f64 {
        debug_assert!(to < self.num_vertices && from < self.num_vertices);
        self.cells[to * self.num_vertices + from]
    }

    /// Bounds-checked lookup for callers outside the solve loop.
    ///
    /// # Errors
    /// Returns `Error::VertexOutOfBounds` if either id is past the matrix.
    pub fn try_weight(&self, to: usize, from: usize) -> Result<f64, Error> {
        if to >= self.num_vertices {
            return Err(Error::VertexOutOfBounds(to));
        }
        if from >= self.num_vertices {
            return Err(Error::VertexOutOfBounds(from));
        }
        Ok(self.weight(to, from))
    }
}
