use std::hint::black_box;
use std::time::Instant;

use perf_bench::*;

fn main() {
    let flat: FlatMatrix = generate_benchmark_matrix_nested().into();

    let start_time = Instant::now();
    let mut checksum: f64 = 0.0;

    // One contiguous allocation; hopping rows is index arithmetic only.
    for i in 0..NUM_LOOKUPS {
        let (to, from) = lookup_pattern(i);
        checksum += flat.cells[to * flat.num_vertices + from];
    }

    let elapsed_time = start_time.elapsed();

    let final_checksum = black_box(checksum);

    println!("--- Flat Layout Benchmark Results ({} Lookups) ---", NUM_LOOKUPS);
    println!("Checksum: {:.10}", final_checksum);
    println!("Elapsed Time: {:?}", elapsed_time);
}
