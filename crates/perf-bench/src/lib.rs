// ----------------------------
// Adjacency matrix layouts
// ----------------------------

/// Nested rows - every destination row is its own heap allocation.
pub struct NestedMatrix {
    pub rows: Vec<Vec<f64>>,
}

/// Flat storage - one row-major allocation, destination-major like the
/// solver's adjacency matrix.
pub struct FlatMatrix {
    pub num_vertices: usize,
    pub cells: Vec<f64>,
}

impl From<NestedMatrix> for FlatMatrix {
    fn from(nested: NestedMatrix) -> Self {
        let num_vertices = nested.rows.len();
        let mut cells = Vec::with_capacity(num_vertices * num_vertices);
        for row in nested.rows {
            cells.extend(row);
        }
        FlatMatrix {
            num_vertices,
            cells,
        }
    }
}

impl From<FlatMatrix> for NestedMatrix {
    fn from(flat: FlatMatrix) -> Self {
        let num_vertices = flat.num_vertices;
        NestedMatrix {
            rows: flat
                .cells
                .chunks(num_vertices)
                .map(|row| row.to_vec())
                .collect(),
        }
    }
}

pub const NUM_VERTICES: usize = 2_000;
pub const NUM_LOOKUPS: usize = 10_000_000;

/// Generates the nested-layout matrix.
///
/// Cell values are varied slightly by index so the compiler cannot fold the
/// lookup walk into a constant during benchmarking
pub fn generate_benchmark_matrix_nested() -> NestedMatrix {
    NestedMatrix {
        rows: (0..NUM_VERTICES)
            .map(|to| {
                (0..NUM_VERTICES)
                    .map(|from| 1.0001 + ((to * NUM_VERTICES + from) as f64) * 1e-12)
                    .collect()
            })
            .collect(),
    }
}

/// Row-hopping visit pattern approximating the solver's cost loop, which
/// touches a different destination row on every leg of a candidate cycle.
pub fn lookup_pattern(i: usize) -> (usize, usize) {
    // prime strides scatter the lookups across rows and columns
    let to = (i * 7_919) % NUM_VERTICES;
    let from = (i * 104_729) % NUM_VERTICES;
    (to, from)
}
