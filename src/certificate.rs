//! Candidate/solution independent sets ("certificates") tied to a graph.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use crate::graph::{Graph, VertexId};

// ============================================================================
// Certificate
// ============================================================================

/// A mutable vertex subset bound to one [`Graph`], representing a candidate
/// or solution independent set.
///
/// At rest, no two members are adjacent in the referenced graph. The mutation
/// primitives [`insert`](Self::insert) and [`remove`](Self::remove)
/// deliberately perform **no adjacency check**: the local-search optimizer
/// applies a remove-then-add sequence that only preserves independence as a
/// whole, so the invariant is the caller's responsibility between calls.
///
/// The graph is held behind an [`Arc`], so a certificate can never outlive
/// the graph it was built against. Cloning deep-copies the member set and
/// shares the same graph handle.
#[derive(Clone, Debug)]
pub struct Certificate {
    graph: Arc<Graph>,
    members: HashSet<VertexId>,
}

impl Certificate {
    /// Creates an empty certificate bound to `graph`.
    pub fn new(graph: Arc<Graph>) -> Self {
        Self {
            graph,
            members: HashSet::new(),
        }
    }

    /// Returns the graph this certificate was built against.
    #[inline]
    pub fn graph(&self) -> &Arc<Graph> {
        &self.graph
    }

    /// Adds `v` to the member set. No adjacency check is performed.
    ///
    /// # Panics
    /// Panics if `v` is out of range for the graph.
    #[inline]
    pub fn insert(&mut self, v: VertexId) {
        assert!(v < self.graph.vertex_count(), "vertex {v} out of range");
        self.members.insert(v);
    }

    /// Removes `v` from the member set. A no-op if `v` is not a member.
    ///
    /// # Panics
    /// Panics if `v` is out of range for the graph.
    #[inline]
    pub fn remove(&mut self, v: VertexId) {
        assert!(v < self.graph.vertex_count(), "vertex {v} out of range");
        self.members.remove(&v);
    }

    /// Returns whether `v` is a member.
    #[inline]
    pub fn contains(&self, v: VertexId) -> bool {
        self.members.contains(&v)
    }

    /// Returns the number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns whether the certificate is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates over the members in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.members.iter().copied()
    }

    /// Returns the members sorted by ascending vertex id.
    ///
    /// The underlying set has no enumeration order; use this wherever a
    /// reproducible order is required.
    pub fn sorted_members(&self) -> Vec<VertexId> {
        let mut members: Vec<VertexId> = self.members.iter().copied().collect();
        members.sort_unstable();
        members
    }

    /// Returns whether the member set is independent in the referenced graph.
    pub fn is_independent(&self) -> bool {
        self.iter()
            .all(|v| !self.graph.neighbors(v).iter().any(|nb| self.contains(nb.vertex)))
    }

    /// Writes the certificate: a header line with the member count, then one
    /// line per member vertex id.
    ///
    /// Members are written in whatever order the underlying set enumerates;
    /// callers requiring determinism should sort first via
    /// [`sorted_members`](Self::sorted_members).
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, mut w: W) -> io::Result<()> {
        writeln!(w, "Number of Vertices:    {}", self.members.len())?;
        for &v in &self.members {
            writeln!(w, "{v}")?;
        }
        Ok(())
    }

    /// Saves the certificate to a file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written.
    pub fn save_to_file(&self, filename: impl AsRef<Path>) -> io::Result<()> {
        let mut f = File::create(filename)?;
        self.write_to(&mut f)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn path4() -> Arc<Graph> {
        Arc::new(Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]))
    }

    #[test]
    fn new_certificate_is_empty() {
        let cert = Certificate::new(path4());
        assert!(cert.is_empty());
        assert_eq!(cert.len(), 0);
        assert!(cert.is_independent());
    }

    #[test]
    fn insert_remove_contains() {
        let mut cert = Certificate::new(path4());
        cert.insert(1);
        cert.insert(3);
        assert!(cert.contains(1));
        assert!(cert.contains(3));
        assert!(!cert.contains(0));
        assert_eq!(cert.len(), 2);

        cert.remove(1);
        assert!(!cert.contains(1));
        assert_eq!(cert.len(), 1);

        // Removing a non-member is a no-op.
        cert.remove(1);
        assert_eq!(cert.len(), 1);
    }

    #[test]
    fn insert_is_idempotent() {
        let mut cert = Certificate::new(path4());
        cert.insert(2);
        cert.insert(2);
        assert_eq!(cert.len(), 1);
    }

    #[test]
    fn primitives_do_not_enforce_independence() {
        // insert/remove are low-level by contract; the invariant is the
        // caller's responsibility between calls.
        let mut cert = Certificate::new(path4());
        cert.insert(0);
        cert.insert(1);
        assert_eq!(cert.len(), 2);
        assert!(!cert.is_independent());
    }

    #[test]
    fn is_independent_detects_adjacent_members() {
        let mut cert = Certificate::new(path4());
        cert.insert(0);
        cert.insert(2);
        assert!(cert.is_independent());
        cert.insert(3);
        assert!(!cert.is_independent());
    }

    #[test]
    fn clone_deep_copies_members() {
        let mut cert = Certificate::new(path4());
        cert.insert(0);

        let mut copy = cert.clone();
        copy.insert(2);
        copy.remove(0);

        assert!(cert.contains(0));
        assert!(!cert.contains(2));
        assert!(Arc::ptr_eq(cert.graph(), copy.graph()));
    }

    #[test]
    fn sorted_members_is_ascending() {
        let graph = Arc::new(Graph::from_edges(6, &[]));
        let mut cert = Certificate::new(graph);
        for v in [5, 0, 3, 1] {
            cert.insert(v);
        }
        assert_eq!(cert.sorted_members(), vec![0, 1, 3, 5]);
    }

    #[test]
    fn empty_certificate_serializes_header_only() {
        let cert = Certificate::new(path4());
        let mut buf = Vec::new();
        cert.write_to(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Number of Vertices:    0\n"
        );
    }

    #[test]
    fn serialization_lists_every_member() {
        let mut cert = Certificate::new(path4());
        cert.insert(1);
        cert.insert(3);

        let mut buf = Vec::new();
        cert.write_to(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();

        assert_eq!(lines.next(), Some("Number of Vertices:    2"));
        let mut members: Vec<usize> = lines.map(|l| l.parse().unwrap()).collect();
        members.sort_unstable();
        assert_eq!(members, vec![1, 3]);
    }

    #[test]
    #[should_panic]
    fn insert_panics_out_of_range() {
        let mut cert = Certificate::new(path4());
        cert.insert(4);
    }

    #[test]
    #[should_panic]
    fn remove_panics_out_of_range() {
        let mut cert = Certificate::new(path4());
        cert.remove(10);
    }
}
