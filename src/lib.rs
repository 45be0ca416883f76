//! # MIS Approximation Toolkit
//!
//! Approximate solvers for the maximum independent set problem on undirected
//! graphs.
//!
//! This crate provides:
//! - An immutable adjacency-list graph model with edge-list text parsing.
//! - A [`Certificate`](certificate::Certificate) abstraction for candidate
//!   solutions, bound to the graph they were computed against.
//! - A deterministic degree-ordered **greedy** constructor of maximal
//!   independent sets.
//! - A **(1,2)-swap local search** that grows an independent set by one
//!   vertex per improving swap.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use mis::graph::Graph;
//! use mis::{greedy, local};
//!
//! // Path graph 0-1-2-3.
//! let graph = Arc::new(Graph::parse("4\n0 1\n1 2\n2 3\n").unwrap());
//!
//! let initial = greedy::approximate(&graph);
//! let refined = local::optimize(&initial);
//!
//! assert!(refined.is_independent());
//! assert!(refined.len() >= initial.len());
//! ```
//!
//! ## Iterating to a Local Optimum
//!
//! A single [`local::improve`] call applies at most one swap; loop until it
//! reports no change to reach a (1,2)-local optimum:
//!
//! ```
//! use std::sync::Arc;
//! use mis::graph::Graph;
//! use mis::{greedy, local};
//!
//! let graph = Arc::new(Graph::from_edges(4, &[(0, 1), (0, 2), (0, 3)]));
//! let mut cert = greedy::approximate(&graph);
//! assert_eq!(cert.sorted_members(), vec![0]);
//!
//! while local::improve(&mut cert).is_some() {}
//!
//! assert_eq!(cert.sorted_members(), vec![1, 2]);
//! ```
//!
//! ## Modules
//!
//! - [`graph`]: Immutable graph model, edge-list parsing and serialization.
//! - [`certificate`]: Candidate/solution independent sets.
//! - [`greedy`]: Degree-ordered greedy construction of a maximal set.
//! - [`local`]: (1,2)-swap local improvement.
//! - [`generate`]: Random instance generators (Erdős–Rényi, king lattice).
//! - [`verify`]: Deterministic independence and maximality checks.
//!
//! ## Notes
//!
//! - The graph is the single source of adjacency truth; solvers share it
//!   read-only behind an [`Arc`](std::sync::Arc) and a certificate can never
//!   outlive the graph it references.
//! - All solver output is deterministic for a given input; generators are
//!   deterministic given the caller's RNG.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)] // Mathematical variable names
#![allow(clippy::doc_markdown)]

pub mod certificate;
pub mod generate;
pub mod graph;
pub mod greedy;
pub mod local;
pub mod verify;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::certificate::Certificate;
    pub use crate::generate::{erdos_renyi, king_lattice};
    pub use crate::graph::{Graph, GraphParseError, VertexId};
    pub use crate::greedy::approximate;
    pub use crate::local::{improve, optimize, Swap};
    pub use crate::verify::{check_independent, check_maximal};
}
