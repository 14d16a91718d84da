use std::hint::black_box;
use std::time::Instant;

use perf_bench::*;

fn main() {
    let nested: NestedMatrix = generate_benchmark_matrix_nested();

    let start_time = Instant::now();
    let mut checksum: f64 = 0.0;

    // Every row hop chases a separate heap pointer before the cell loads.
    for i in 0..NUM_LOOKUPS {
        let (to, from) = lookup_pattern(i);
        checksum += nested.rows[to][from];
    }

    let elapsed_time = start_time.elapsed();

    let final_checksum = black_box(checksum);

    println!(
        "--- Nested Layout Benchmark Results ({} Lookups) ---",
        NUM_LOOKUPS
    );
    println!("Checksum: {:.10}", final_checksum);
    println!("Elapsed Time: {:?}", elapsed_time);
}
