//! Depth-layered transitive closure over conceptual relations.

use lexnet_core::graph::{LexGraph, SynsetId};
use lexnet_core::rel::ConRel;
use std::collections::HashSet;

/// Breadth-first layering of everything reachable from `origin` over `rel`.
///
/// Layer 0 is the origin alone; layer k+1 is the union of
/// [`LexGraph::related_synsets`] over every synset in layer k. The layer
/// count is the relation's maximum fan-out depth from this origin.
///
/// Valid only for transitive relation types: a non-transitive `rel`, like an
/// origin the store does not know, yields an empty layer sequence rather
/// than an error, so callers can treat transitivity generically.
///
/// The data model does not guarantee acyclicity, so a synset is expanded and
/// emitted at most once per call, tracked across all layers; this bounds the
/// traversal and puts each ID in at most one layer.
pub fn closure(graph: &LexGraph, origin: SynsetId, rel: ConRel) -> Vec<Vec<SynsetId>> {
    closure_bounded(graph, origin, rel, usize::MAX)
}

/// [`closure`] with an externally imposed depth budget: at most `max_depth`
/// expansion steps beyond the origin layer. The engine itself only
/// guarantees termination, not a small result; this is the hook for callers
/// that need an upper bound on densely connected relation types.
pub fn closure_bounded(
    graph: &LexGraph,
    origin: SynsetId,
    rel: ConRel,
    max_depth: usize,
) -> Vec<Vec<SynsetId>> {
    if !rel.is_transitive() || graph.synset_by_id(origin).is_none() {
        return Vec::new();
    }

    let mut emitted = HashSet::new();
    emitted.insert(origin);
    let mut layers = Vec::new();
    let mut frontier = vec![origin];

    while !frontier.is_empty() && layers.len() <= max_depth {
        let mut next = Vec::new();
        for &synset_id in &frontier {
            for target in graph.related_synsets(synset_id, rel) {
                if emitted.insert(target) {
                    next.push(target);
                }
            }
        }
        layers.push(frontier);
        frontier = next;
    }

    layers
}
