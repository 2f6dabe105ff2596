use log::info;
use ordered_float::OrderedFloat;
use sssp_engine::graph::generators::generate_random_graph;
use sssp_engine::graph::{Graph, UndirectedGraph};
use sssp_engine::Dijkstra;
use std::env;
use std::time::{Duration, Instant};

const DEFAULT_EDGE_FACTOR: f64 = 2.0;
const DEFAULT_SEED: u64 = 42;

// Function to benchmark one run on a graph
fn benchmark_run(graph: &UndirectedGraph<usize, OrderedFloat<f64>>, source: usize) -> Duration {
    let dijkstra = Dijkstra::new();

    let start = Instant::now();
    let result = match dijkstra.run(graph, &source) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("  - Run failed: {}", err);
            return start.elapsed();
        }
    };
    let duration = start.elapsed();

    println!(
        "  - Reached {} of {} nodes in {:?} ({} relaxations, {} stale entries)",
        result.reachable_count(),
        graph.node_count(),
        duration,
        result.stats.relaxations,
        result.stats.stale_entries_skipped,
    );

    duration
}

fn main() {
    env_logger::init();

    // Usage: benchmark [edge_factor] [seed]
    let args: Vec<String> = env::args().collect();
    let edge_factor = args
        .get(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_EDGE_FACTOR);
    let seed = args
        .get(2)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_SEED);

    let graph_sizes = [1_000, 10_000, 50_000, 100_000, 200_000];

    println!("=====================================================");
    println!("Benchmark: Dijkstra on random undirected graphs");
    println!("Edge factor: {} edges per node, seed {}", edge_factor, seed);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        info!("Generating random graph with {} nodes", size);
        let graph = generate_random_graph(size, edge_factor, seed);
        println!(
            "\nGraph has {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        let duration = benchmark_run(&graph, 0);
        results.push((size, graph.edge_count(), duration));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<12}", "Nodes", "Edges", "Time (ms)");
    println!("-----------------------------------------------------");

    for (size, edges, duration) in &results {
        println!(
            "{:<10} | {:<10} | {:<12.3}",
            size,
            edges,
            duration.as_secs_f64() * 1000.0
        );
    }
}
