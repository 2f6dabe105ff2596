use crate::graph::{MutableGraph, UndirectedGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random sparse undirected graph with n nodes (`0..n`) and roughly
/// `edge_factor * n` edges with weights in `[1, 100)`.
///
/// The same seed always produces the same graph. Self-loops are skipped, so
/// small graphs may be disconnected.
pub fn generate_random_graph(
    n: usize,
    edge_factor: f64,
    seed: u64,
) -> UndirectedGraph<usize, OrderedFloat<f64>> {
    let mut graph = UndirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    graph.extend_with_nodes(0..n);
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            // Both endpoints are registered and the weight is positive
            let added = graph.add_edge(&u, &v, weight);
            debug_assert!(added.is_ok(), "generated edge rejected: {:?}", added);
        }
    }

    graph
}

/// Generates a width x height grid with 4-connectivity and unit weights.
/// Node `(x, y)` has id `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> UndirectedGraph<usize, OrderedFloat<f64>> {
    let mut graph = UndirectedGraph::with_capacity(width * height);
    graph.extend_with_nodes(0..width * height);

    let get_index = |x: usize, y: usize| -> usize { y * width + x };

    for y in 0..height {
        for x in 0..width {
            let current = get_index(x, y);
            if x + 1 < width {
                let added = graph.add_edge(&current, &get_index(x + 1, y), OrderedFloat(1.0));
                debug_assert!(added.is_ok(), "grid edge rejected: {:?}", added);
            }
            if y + 1 < height {
                let added = graph.add_edge(&current, &get_index(x, y + 1), OrderedFloat(1.0));
                debug_assert!(added.is_ok(), "grid edge rejected: {:?}", added);
            }
        }
    }

    graph
}
