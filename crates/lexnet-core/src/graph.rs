//! Graph data model for the lexical-semantic network.
//!
//! Entities come in two kinds: [`Synset`] (a set of synonymous lexical units
//! sharing one meaning) and [`LexUnit`] (one lexical item realizing one
//! meaning, member of exactly one synset). Cross-references are plain IDs
//! resolved through the store, never owning pointers, so the relation graph
//! cannot form retain cycles no matter how densely entities are connected.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use crate::builder::LoadReport;
use crate::index::OrthIndex;
use crate::rel::{ConRel, LexRel, RelationMap};

/// Identifier of a [`Synset`]. Externally assigned and immutable.
///
/// The synset and lex-unit ID spaces are disjoint by type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynsetId(pub u32);

/// Identifier of a [`LexUnit`]. Externally assigned and immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LexUnitId(pub u32);

impl fmt::Display for SynsetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for LexUnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The coarse grammatical partition used to segment the orthographic indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordCategory {
    Adjective,
    Noun,
    Verb,
}

impl WordCategory {
    /// All categories, in the fixed order used for cross-category lookups.
    pub const ALL: [WordCategory; 3] = [
        WordCategory::Adjective,
        WordCategory::Noun,
        WordCategory::Verb,
    ];
}

/// The secondary semantic-field tag carried by every synset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordClass {
    General,
    Animal,
    Artifact,
    Attribute,
    Behavior,
    Body,
    Cognition,
    Communication,
    Competition,
    Contact,
    Creation,
    Emotion,
    Event,
    Food,
    Group,
    Location,
    Motion,
    Motive,
    NaturalObject,
    NaturalPhenomenon,
    Perception,
    Plant,
    Possession,
    Quantity,
    Relation,
    Shape,
    Society,
    Substance,
    Time,
}

/// A set of synonymous lexical units sharing one meaning.
///
/// Owns its lexical units; their lifetime is bound to the synset's. The list
/// is ordered and must be non-empty by the time the store is finalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synset {
    pub id: SynsetId,
    pub category: WordCategory,
    pub word_class: WordClass,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paraphrase: Option<String>,
    pub lex_units: Vec<LexUnit>,
}

impl Synset {
    pub fn new(
        id: SynsetId,
        category: WordCategory,
        word_class: WordClass,
        lex_units: Vec<LexUnit>,
    ) -> Self {
        Self {
            id,
            category,
            word_class,
            paraphrase: None,
            lex_units,
        }
    }
}

/// One lexical item realizing one particular meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexUnit {
    pub id: LexUnitId,
    /// Non-owning back-reference to the owning synset, resolved by ID.
    pub synset: SynsetId,
    /// Sense rank, unique within the owning synset.
    pub sense: u32,
    /// Required primary orthographic form.
    pub orth_form: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orth_var: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_orth_form: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_orth_var: Option<String>,
    #[serde(default)]
    pub style_marked: bool,
    #[serde(default)]
    pub artificial: bool,
    #[serde(default)]
    pub named_entity: bool,
    pub source: String,
    /// Side-lists filled by enrichment loaders; opaque to the core.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<Frame>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ili_records: Vec<IliRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paraphrases: Vec<Paraphrase>,
}

impl LexUnit {
    pub fn new(id: LexUnitId, synset: SynsetId, sense: u32, orth_form: impl Into<String>) -> Self {
        Self {
            id,
            synset,
            sense,
            orth_form: orth_form.into(),
            orth_var: None,
            old_orth_form: None,
            old_orth_var: None,
            style_marked: false,
            artificial: false,
            named_entity: false,
            source: "core".to_string(),
            examples: Vec::new(),
            frames: Vec::new(),
            ili_records: Vec::new(),
            paraphrases: Vec::new(),
        }
    }

    /// The primary form plus every alternate form that is present.
    pub fn all_orth_forms(&self) -> Vec<&str> {
        let mut forms = vec![self.orth_form.as_str()];
        for variant in [&self.orth_var, &self.old_orth_form, &self.old_orth_var] {
            if let Some(form) = variant.as_deref() {
                forms.push(form);
            }
        }
        forms
    }
}

/// A usage example attached to a lexical unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<String>,
}

/// A subcategorization frame attached to a lexical unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub data: String,
}

/// A cross-lingual record linking a lexical unit to an English equivalent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IliRecord {
    pub relation: String,
    pub english_equivalent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pwn_id: Option<String>,
    pub source: String,
}

/// A dictionary paraphrase attached to a lexical unit by an enrichment loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paraphrase {
    pub id: u32,
    pub edited: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paraphrase: Option<String>,
}

/// Aggregate statistics computed once when the build phase is finalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_version: Option<String>,
    pub finalized_at: DateTime<Utc>,
    pub total_synsets: usize,
    pub total_lex_units: usize,
    pub conceptual_edges: usize,
    pub lexical_edges: usize,
    /// Recoverable defects seen during the load, by kind.
    pub load: LoadReport,
}

/// The finished, structurally immutable lexical-semantic graph.
///
/// Produced by [`crate::builder::LexGraphBuilder::finalize`]; exposes only
/// `&self` queries, so concurrent reads need no external locking. Queries
/// return either references into the store or freshly allocated vectors,
/// never a live view of internal maps.
#[derive(Debug, Clone)]
pub struct LexGraph {
    metadata: GraphMetadata,
    synsets: BTreeMap<SynsetId, Synset>,
    lex_index: HashMap<LexUnitId, (SynsetId, usize)>,
    orth: OrthIndex,
    con_rels: RelationMap<SynsetId, ConRel>,
    lex_rels: RelationMap<LexUnitId, LexRel>,
}

impl LexGraph {
    pub(crate) fn from_parts(
        metadata: GraphMetadata,
        synsets: BTreeMap<SynsetId, Synset>,
        lex_index: HashMap<LexUnitId, (SynsetId, usize)>,
        orth: OrthIndex,
        con_rels: RelationMap<SynsetId, ConRel>,
        lex_rels: RelationMap<LexUnitId, LexRel>,
    ) -> Self {
        Self {
            metadata,
            synsets,
            lex_index,
            orth,
            con_rels,
            lex_rels,
        }
    }

    pub fn metadata(&self) -> &GraphMetadata {
        &self.metadata
    }

    /// Number of distinct registered synset IDs.
    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    /// Number of distinct registered lex-unit IDs.
    pub fn lex_unit_count(&self) -> usize {
        self.lex_index.len()
    }

    pub fn synset_by_id(&self, id: SynsetId) -> Option<&Synset> {
        self.synsets.get(&id)
    }

    pub fn lex_unit_by_id(&self, id: LexUnitId) -> Option<&LexUnit> {
        let &(synset_id, pos) = self.lex_index.get(&id)?;
        self.synsets
            .get(&synset_id)
            .and_then(|synset| synset.lex_units.get(pos))
    }

    /// All synsets, in ID order.
    pub fn synsets(&self) -> impl Iterator<Item = &Synset> {
        self.synsets.values()
    }

    /// All lexical units, grouped by owning synset in ID order.
    pub fn lex_units(&self) -> impl Iterator<Item = &LexUnit> {
        self.synsets.values().flat_map(|s| s.lex_units.iter())
    }

    pub fn synsets_by_category(&self, category: WordCategory) -> Vec<&Synset> {
        self.synsets
            .values()
            .filter(|s| s.category == category)
            .collect()
    }

    pub fn synsets_by_field(&self, word_class: WordClass) -> Vec<&Synset> {
        self.synsets
            .values()
            .filter(|s| s.word_class == word_class)
            .collect()
    }

    /// Lexical units whose orthographic form matches `form` within one word
    /// category. With `main_forms_only` the primary form alone is consulted;
    /// otherwise any of the four form fields may match.
    pub fn lex_units_by_form(
        &self,
        form: &str,
        category: WordCategory,
        main_forms_only: bool,
    ) -> Vec<&LexUnit> {
        self.orth
            .lookup(form, category, main_forms_only)
            .iter()
            .filter_map(|&id| self.lex_unit_by_id(id))
            .collect()
    }

    /// Synsets containing a unit that matches `form`, across all word
    /// categories, deduplicated in first-seen order.
    pub fn synsets_by_form(&self, form: &str, main_forms_only: bool) -> Vec<&Synset> {
        self.resolve_synsets(self.orth.lookup_all_categories(form, main_forms_only))
    }

    /// Synsets containing a unit that matches `form` within one category.
    pub fn synsets_by_form_in(
        &self,
        form: &str,
        category: WordCategory,
        main_forms_only: bool,
    ) -> Vec<&Synset> {
        self.resolve_synsets(self.orth.lookup(form, category, main_forms_only).to_vec())
    }

    fn resolve_synsets(&self, unit_ids: Vec<LexUnitId>) -> Vec<&Synset> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for unit_id in unit_ids {
            if let Some(&(synset_id, _)) = self.lex_index.get(&unit_id)
                && seen.insert(synset_id)
                && let Some(synset) = self.synsets.get(&synset_id)
            {
                out.push(synset);
            }
        }
        out
    }

    /// Synset IDs reachable from `id` over `rel`. Empty when no edges exist.
    pub fn related_synsets(&self, id: SynsetId, rel: ConRel) -> Vec<SynsetId> {
        self.con_rels.related(id, rel)
    }

    /// Union over all conceptual relation types attached to `id`.
    pub fn all_related_synsets(&self, id: SynsetId) -> Vec<SynsetId> {
        self.con_rels.all_related(id)
    }

    /// Lex-unit IDs reachable from `id` over `rel`. Empty when no edges exist.
    pub fn related_lex_units(&self, id: LexUnitId, rel: LexRel) -> Vec<LexUnitId> {
        self.lex_rels.related(id, rel)
    }

    /// Union over all lexical relation types attached to `id`.
    pub fn all_related_lex_units(&self, id: LexUnitId) -> Vec<LexUnitId> {
        self.lex_rels.all_related(id)
    }
}
