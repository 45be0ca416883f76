//! Random instance generators.
//!
//! Both generators are fully determined by the caller's RNG; seed it to
//! reproduce an instance.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::graph::Graph;

/// Samples an Erdős–Rényi graph `G(n, p)`: each of the `n(n-1)/2` unordered
/// vertex pairs becomes an edge independently with probability `p`.
pub fn erdos_renyi<R: Rng>(rng: &mut R, n: usize, p: f64) -> Graph {
    debug_assert!((0.0..=1.0).contains(&p), "p must be in [0, 1]");

    let mut edges = Vec::new();
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.random_bool(p) {
                edges.push((u, v));
            }
        }
    }
    Graph::from_edges(n, &edges)
}

/// Samples a king-lattice unit-disk graph: keeps `floor(width * height *
/// density)` points of the integer lattice, chosen uniformly, and connects
/// every pair at Euclidean distance at most √2 (the 8-neighborhood of a king
/// move). Vertex ids are dense over the retained points.
pub fn king_lattice<R: Rng>(rng: &mut R, width: usize, height: usize, density: f64) -> Graph {
    debug_assert!((0.0..=1.0).contains(&density), "density must be in [0, 1]");

    let mut points: Vec<(i64, i64)> = (0..width as i64)
        .flat_map(|x| (0..height as i64).map(move |y| (x, y)))
        .collect();
    points.shuffle(rng);
    let kept = ((width * height) as f64 * density) as usize;
    points.truncate(kept);

    let mut edges = Vec::new();
    for (u, &(ux, uy)) in points.iter().enumerate() {
        for (v, &(vx, vy)) in points.iter().enumerate().skip(u + 1) {
            if (ux - vx).abs() <= 1 && (uy - vy).abs() <= 1 {
                edges.push((u, v));
            }
        }
    }
    Graph::from_edges(points.len(), &edges)
}

// ============================================================================
// Tests
// ============================================================================
