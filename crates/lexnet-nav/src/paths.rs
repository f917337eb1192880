//! Hypernym path queries built on the closure layering.

use lexnet_core::graph::{LexGraph, SynsetId};
use lexnet_core::rel::ConRel;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::closure::closure;

/// Minimum hypernym distance from `origin` to every reachable ancestor,
/// the origin itself included at depth 0.
///
/// Empty when the origin is unknown to the store.
pub fn hypernym_depths(graph: &LexGraph, origin: SynsetId) -> HashMap<SynsetId, usize> {
    let mut depths = HashMap::new();
    let layers = closure(graph, origin, ConRel::HasHypernym);
    for (depth, layer) in layers.into_iter().enumerate() {
        for synset_id in layer {
            depths.insert(synset_id, depth);
        }
    }
    depths
}

/// Common hypernym ancestors of `a` and `b` with minimal combined distance.
///
/// Either input counts as its own ancestor at distance 0, so the subsumer of
/// a synset and one of its ancestors is that ancestor. Ties are all
/// returned, sorted by ID; no common ancestor yields an empty vector.
pub fn least_common_subsumers(graph: &LexGraph, a: SynsetId, b: SynsetId) -> Vec<SynsetId> {
    let depths_a = hypernym_depths(graph, a);
    let depths_b = hypernym_depths(graph, b);

    let mut best = usize::MAX;
    let mut out = Vec::new();
    for (&id, &depth_a) in &depths_a {
        if let Some(&depth_b) = depths_b.get(&id) {
            let combined = depth_a + depth_b;
            match combined.cmp(&best) {
                Ordering::Less => {
                    best = combined;
                    out.clear();
                    out.push(id);
                }
                Ordering::Equal => out.push(id),
                Ordering::Greater => {}
            }
        }
    }
    out.sort_unstable();
    out
}
