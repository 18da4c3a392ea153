//! Tick throughput benchmark, serial vs parallel

use std::time::Instant;

use cellular_automata_3d::domain::{Seed, VoxelGrid, engine, rules::presets};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn soup(edge: usize) -> VoxelGrid {
    let mut grid = VoxelGrid::new(edge);
    let mut rng = StdRng::seed_from_u64(edge as u64);
    Seed::Random { density: 0.1, state: 4 }
        .place_with(&mut grid, &mut rng)
        .unwrap_or(0);
    grid
}

fn benchmark(edge: usize, iterations: u32, parallel: bool) -> f64 {
    let rule = presets::reference();
    let mut grid = soup(edge);

    let start = Instant::now();
    for _ in 0..iterations {
        if parallel {
            engine::step_parallel(&mut grid, &rule);
        } else {
            engine::step(&mut grid, &rule);
        }
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== 3D Automaton Tick Benchmark (4/4/5/M) ===\n");

    let sizes = [32, 50, 100, 160];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10} {:>14}", "Size", "Serial", "Parallel", "Speedup", "Cells/sec");
    println!("{:-<64}", "");

    for edge in sizes {
        let serial_ms = benchmark(edge, iterations, false);
        let parallel_ms = benchmark(edge, iterations, true);
        let cells = (edge * edge * edge) as f64;

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x {:>13.1}M",
            format!("{0}^3", edge),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms,
            cells / (parallel_ms / 1000.0) / 1_000_000.0
        );
    }

    let edge = 160;
    let grid = VoxelGrid::new(edge);
    let bytes = grid.cells().len() * 2;
    println!("\nMemory at {0}^3 (two bordered buffers): {1:.1} MB", edge, bytes as f64 / 1_000_000.0);
}
