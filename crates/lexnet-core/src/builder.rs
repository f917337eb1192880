//! Single-writer build phase producing a read-only [`LexGraph`].
//!
//! The loader drives this type in two strictly ordered steps: first every
//! synset is registered (which indexes its lexical units in the same pass),
//! then relations are added against the already-registered IDs. Recoverable
//! data defects are logged and counted, never fatal; structural invariant
//! violations surface as a hard error from [`LexGraphBuilder::finalize`].

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::config::GraphConfig;
use crate::graph::{
    Example, Frame, GraphMetadata, IliRecord, LexGraph, LexUnit, LexUnitId, Paraphrase, Synset,
    SynsetId,
};
use crate::index::OrthIndex;
use crate::rel::{ConRel, EdgePolicy, LexRel, RelationMap};

/// Counts of recoverable defects seen during one load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Registrations skipped because the synset ID was already taken.
    pub duplicate_synsets: usize,
    /// Registrations skipped because a contained lex-unit ID was already taken.
    pub duplicate_lex_units: usize,
    pub skipped_conceptual_relations: usize,
    pub skipped_lexical_relations: usize,
    pub skipped_enrichments: usize,
}

impl LoadReport {
    /// Whether the load completed without a single skipped record.
    pub fn is_clean(&self) -> bool {
        *self == LoadReport::default()
    }
}

/// Fatal structural defects, surfaced at the transition to the read-only
/// phase rather than lazily during later queries.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("synset {0} has no lexical units")]
    EmptySynset(SynsetId),
    #[error("sense rank {sense} appears more than once in synset {synset}")]
    DuplicateSenseRank { synset: SynsetId, sense: u32 },
}

/// Mutable counterpart of [`LexGraph`], valid for the build phase only.
///
/// Not synchronized: the build phase is single-writer by contract, and the
/// type split (builder vs. store) is what makes post-load mutation
/// unrepresentable rather than merely undocumented.
#[derive(Debug)]
pub struct LexGraphBuilder {
    synsets: BTreeMap<SynsetId, Synset>,
    lex_index: HashMap<LexUnitId, (SynsetId, usize)>,
    orth: OrthIndex,
    con_rels: RelationMap<SynsetId, ConRel>,
    lex_rels: RelationMap<LexUnitId, LexRel>,
    report: LoadReport,
    resource_version: Option<String>,
}

impl Default for LexGraphBuilder {
    fn default() -> Self {
        Self::with_config(&GraphConfig::default())
    }
}

impl LexGraphBuilder {
    /// A builder with default configuration (exact-case orthographic keys).
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder whose case-folding mode is taken from `config`; the mode is
    /// fixed for the lifetime of the index and cannot vary per query.
    pub fn with_config(config: &GraphConfig) -> Self {
        Self {
            synsets: BTreeMap::new(),
            lex_index: HashMap::new(),
            orth: OrthIndex::new(config.index.ignore_case),
            con_rels: RelationMap::new(),
            lex_rels: RelationMap::new(),
            report: LoadReport::default(),
            resource_version: None,
        }
    }

    /// Version string of the source resource, carried into the metadata.
    pub fn set_resource_version(&mut self, version: impl Into<String>) {
        self.resource_version = Some(version.into());
    }

    /// Register a synset and, in the same pass, every owned lexical unit
    /// into the lex-unit ID index and the orthographic index.
    ///
    /// An ID collision (synset or lex unit) skips the whole registration:
    /// the first registration wins, the defect is logged and counted. Each
    /// unit's synset back-reference is rewritten to the registering synset.
    pub fn register_synset(&mut self, mut synset: Synset) {
        if self.synsets.contains_key(&synset.id) {
            tracing::warn!("duplicate synset id {}, keeping first registration", synset.id);
            self.report.duplicate_synsets += 1;
            return;
        }
        let mut fresh = HashSet::new();
        for unit in &synset.lex_units {
            if self.lex_index.contains_key(&unit.id) || !fresh.insert(unit.id) {
                tracing::warn!(
                    "duplicate lex unit id {} in synset {}, skipping registration",
                    unit.id,
                    synset.id
                );
                self.report.duplicate_lex_units += 1;
                return;
            }
        }

        let category = synset.category;
        for (pos, unit) in synset.lex_units.iter_mut().enumerate() {
            unit.synset = synset.id;
            self.lex_index.insert(unit.id, (synset.id, pos));
            self.orth.insert(category, unit);
        }
        self.synsets.insert(synset.id, synset);
    }

    /// Add a conceptual relation record, expanded per `policy`.
    ///
    /// Both endpoints must already be registered; an unresolvable ID is a
    /// loader-level data defect that skips this single record.
    pub fn add_conceptual_relation(
        &mut self,
        from: SynsetId,
        rel: ConRel,
        to: SynsetId,
        policy: EdgePolicy<ConRel>,
    ) {
        if !self.synsets.contains_key(&from) || !self.synsets.contains_key(&to) {
            tracing::warn!(
                "conceptual relation {:?} references unregistered synset ({} -> {}), skipping",
                rel,
                from,
                to
            );
            self.report.skipped_conceptual_relations += 1;
            return;
        }
        self.con_rels.insert_with_policy(from, rel, to, policy);
    }

    /// Add a lexical relation record, expanded per `policy`.
    pub fn add_lexical_relation(
        &mut self,
        from: LexUnitId,
        rel: LexRel,
        to: LexUnitId,
        policy: EdgePolicy<LexRel>,
    ) {
        if !self.lex_index.contains_key(&from) || !self.lex_index.contains_key(&to) {
            tracing::warn!(
                "lexical relation {:?} references unregistered lex unit ({} -> {}), skipping",
                rel,
                from,
                to
            );
            self.report.skipped_lexical_relations += 1;
            return;
        }
        self.lex_rels.insert_with_policy(from, rel, to, policy);
    }

    /// Attach a usage example to an already-registered lexical unit.
    pub fn attach_example(&mut self, id: LexUnitId, example: Example) {
        if let Some(unit) = self.lex_unit_mut(id) {
            unit.examples.push(example);
        } else {
            self.skip_enrichment("example", id);
        }
    }

    /// Attach a subcategorization frame to an already-registered lexical unit.
    pub fn attach_frame(&mut self, id: LexUnitId, frame: Frame) {
        if let Some(unit) = self.lex_unit_mut(id) {
            unit.frames.push(frame);
        } else {
            self.skip_enrichment("frame", id);
        }
    }

    /// Attach a cross-lingual record to an already-registered lexical unit.
    pub fn attach_ili_record(&mut self, id: LexUnitId, record: IliRecord) {
        if let Some(unit) = self.lex_unit_mut(id) {
            unit.ili_records.push(record);
        } else {
            self.skip_enrichment("ili record", id);
        }
    }

    /// Attach a dictionary paraphrase to an already-registered lexical unit.
    pub fn attach_paraphrase(&mut self, id: LexUnitId, paraphrase: Paraphrase) {
        if let Some(unit) = self.lex_unit_mut(id) {
            unit.paraphrases.push(paraphrase);
        } else {
            self.skip_enrichment("paraphrase", id);
        }
    }

    /// Running counts of skipped and duplicate records.
    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    pub fn lex_unit_count(&self) -> usize {
        self.lex_index.len()
    }

    /// End the build phase: validate structural invariants and produce the
    /// read-only store. Consumes the builder, so no mutation can follow.
    pub fn finalize(self) -> Result<LexGraph, BuildError> {
        for synset in self.synsets.values() {
            if synset.lex_units.is_empty() {
                return Err(BuildError::EmptySynset(synset.id));
            }
            let mut ranks = HashSet::new();
            for unit in &synset.lex_units {
                if !ranks.insert(unit.sense) {
                    return Err(BuildError::DuplicateSenseRank {
                        synset: synset.id,
                        sense: unit.sense,
                    });
                }
            }
        }

        let metadata = GraphMetadata {
            resource_version: self.resource_version,
            finalized_at: Utc::now(),
            total_synsets: self.synsets.len(),
            total_lex_units: self.lex_index.len(),
            conceptual_edges: self.con_rels.edge_count(),
            lexical_edges: self.lex_rels.edge_count(),
            load: self.report,
        };

        Ok(LexGraph::from_parts(
            metadata,
            self.synsets,
            self.lex_index,
            self.orth,
            self.con_rels,
            self.lex_rels,
        ))
    }

    fn lex_unit_mut(&mut self, id: LexUnitId) -> Option<&mut LexUnit> {
        let &(synset_id, pos) = self.lex_index.get(&id)?;
        self.synsets
            .get_mut(&synset_id)
            .and_then(|synset| synset.lex_units.get_mut(pos))
    }

    fn skip_enrichment(&mut self, kind: &str, id: LexUnitId) {
        tracing::warn!("{} targets unregistered lex unit {}, skipping", kind, id);
        self.report.skipped_enrichments += 1;
    }
}
