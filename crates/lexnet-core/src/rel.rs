//! Typed relation graph: relation enumerations, direction policies, and the
//! adjacency structure shared by the synset-level and lex-unit-level graphs.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::Hash;

/// A conceptual relation between two synsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConRel {
    HasHypernym,
    HasHyponym,
    HasComponentMeronym,
    HasComponentHolonym,
    HasMemberMeronym,
    HasMemberHolonym,
    HasSubstanceMeronym,
    HasSubstanceHolonym,
    HasPortionMeronym,
    HasPortionHolonym,
    Entails,
    IsEntailedBy,
    Causes,
    IsRelatedTo,
}

impl ConRel {
    /// Whether chains of this relation may be followed by transitive closure.
    /// Hypernymy and the meronymy/holonymy family compose along paths;
    /// entailment, causation, and the unspecific association do not.
    pub fn is_transitive(self) -> bool {
        !matches!(
            self,
            ConRel::Entails | ConRel::IsEntailedBy | ConRel::Causes | ConRel::IsRelatedTo
        )
    }
}

/// A lexical relation between two lexical units.
///
/// Lexical relations never participate in transitive closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexRel {
    HasSynonym,
    HasAntonym,
    HasPertainym,
    HasParticiple,
}

/// How a single relation record expands into directed edges at insertion time.
///
/// Mirroring is never implicit: `add_edge` only ever appends the one edge it
/// is given, and every mirrored or inverse edge comes from applying one of
/// these policies in [`RelationMap::insert_with_policy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy<R> {
    /// Only the declared forward edge.
    #[default]
    OneWay,
    /// The same relation type as a forward edge on both endpoints.
    Symmetric,
    /// The forward edge, plus the given inverse type as a forward edge at the target.
    InverseTo(R),
}

/// Directed, typed adjacency keyed by source ID and relation type.
///
/// Target lists preserve insertion order. One instance covers one entity
/// kind; the store keeps two independent maps (synsets and lexical units).
#[derive(Debug, Clone)]
pub struct RelationMap<I, R> {
    adj: HashMap<I, BTreeMap<R, Vec<I>>>,
    edge_count: usize,
}

impl<I, R> Default for RelationMap<I, R> {
    fn default() -> Self {
        Self {
            adj: HashMap::new(),
            edge_count: 0,
        }
    }
}

impl<I, R> RelationMap<I, R>
where
    I: Copy + Eq + Hash,
    R: Copy + Ord,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Append exactly one directed edge. Never creates a mirror edge.
    pub fn add_edge(&mut self, from: I, rel: R, to: I) {
        self.adj
            .entry(from)
            .or_default()
            .entry(rel)
            .or_default()
            .push(to);
        self.edge_count += 1;
    }

    /// Insert one relation record, expanding the direction policy into
    /// repeated [`RelationMap::add_edge`] calls.
    pub fn insert_with_policy(&mut self, from: I, rel: R, to: I, policy: EdgePolicy<R>) {
        self.add_edge(from, rel, to);
        match policy {
            EdgePolicy::OneWay => {}
            EdgePolicy::Symmetric => self.add_edge(to, rel, from),
            EdgePolicy::InverseTo(inverse) => self.add_edge(to, inverse, from),
        }
    }

    /// Targets reachable from `from` over `rel`, in insertion order.
    ///
    /// Returns an owned copy; an entity with no such edges yields an empty
    /// vector, never an absent value.
    pub fn related(&self, from: I, rel: R) -> Vec<I> {
        self.adj
            .get(&from)
            .and_then(|by_rel| by_rel.get(&rel))
            .cloned()
            .unwrap_or_default()
    }

    /// Union of targets over every relation type attached to `from`,
    /// deduplicated, ordered by relation type then insertion order.
    pub fn all_related(&self, from: I) -> Vec<I> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        if let Some(by_rel) = self.adj.get(&from) {
            for targets in by_rel.values() {
                for &to in targets {
                    if seen.insert(to) {
                        out.push(to);
                    }
                }
            }
        }
        out
    }

    /// Total number of directed edges inserted, mirrors included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
