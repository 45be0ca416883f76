//! Deterministic checking of certificates against their graph.
//!
//! These checks back the solver's correctness claims: greedy construction
//! promises an independent and maximal result, and local search promises to
//! preserve independence. Both return human-readable diagnostics naming the
//! first violation found.

use crate::certificate::Certificate;

// ============================================================================
// Public API
// ============================================================================

/// Checks that no two members of `certificate` are adjacent.
///
/// Edges are scanned in edge-id order, so the reported violation is
/// deterministic.
///
/// # Errors
/// Returns an error message naming the first edge with both endpoints in the
/// certificate.
pub fn check_independent(certificate: &Certificate) -> Result<(), String> {
    let graph = certificate.graph();
    for e in 0..graph.edge_count() {
        let edge = graph.edge(e);
        if certificate.contains(edge.u) && certificate.contains(edge.v) {
            return Err(format!(
                "members {} and {} are adjacent (edge {e})",
                edge.u, edge.v
            ));
        }
    }
    Ok(())
}

/// Checks that `certificate` is maximal: every non-member has at least one
/// member neighbor, so no vertex can be added without breaking independence.
///
/// Vertices are scanned in ascending id, so the reported violation is
/// deterministic.
///
/// # Errors
/// Returns an error message naming the first non-member vertex with no member
/// neighbor.
pub fn check_maximal(certificate: &Certificate) -> Result<(), String> {
    let graph = certificate.graph();
    for v in 0..graph.vertex_count() {
        if certificate.contains(v) {
            continue;
        }
        if !graph.neighbors(v).iter().any(|nb| certificate.contains(nb.vertex)) {
            return Err(format!(
                "vertex {v} is outside the certificate but has no member neighbor"
            ));
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
