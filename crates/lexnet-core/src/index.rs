//! Orthographic-form indices, partitioned by word category.
//!
//! Two mappings per category: *main-form* (primary orthographic form only)
//! and *all-forms* (primary form, variant, old form, old variant). Whether
//! keys and queries are case-folded is fixed when the index is constructed.

use std::collections::HashMap;

use crate::graph::{LexUnit, LexUnitId, WordCategory};

#[derive(Debug, Clone, Default)]
pub(crate) struct OrthIndex {
    fold_case: bool,
    main: HashMap<WordCategory, HashMap<String, Vec<LexUnitId>>>,
    all: HashMap<WordCategory, HashMap<String, Vec<LexUnitId>>>,
}

impl OrthIndex {
    pub(crate) fn new(fold_case: bool) -> Self {
        Self {
            fold_case,
            ..Self::default()
        }
    }

    fn key(&self, form: &str) -> String {
        if self.fold_case {
            form.to_lowercase()
        } else {
            form.to_string()
        }
    }

    /// Index one lexical unit under its owning synset's word category.
    pub(crate) fn insert(&mut self, category: WordCategory, unit: &LexUnit) {
        let main_key = self.key(&unit.orth_form);
        // A unit lands at most once per key, even when several of its own
        // form fields produce the same key.
        let mut keys: Vec<String> = unit.all_orth_forms().iter().map(|f| self.key(f)).collect();
        keys.sort();
        keys.dedup();

        self.main
            .entry(category)
            .or_default()
            .entry(main_key)
            .or_default()
            .push(unit.id);
        let by_form = self.all.entry(category).or_default();
        for key in keys {
            by_form.entry(key).or_default().push(unit.id);
        }
    }

    /// Unit IDs registered under `form` in one category, in registration order.
    pub(crate) fn lookup(
        &self,
        form: &str,
        category: WordCategory,
        main_forms_only: bool,
    ) -> &[LexUnitId] {
        let partition = if main_forms_only { &self.main } else { &self.all };
        partition
            .get(&category)
            .and_then(|by_form| by_form.get(&self.key(form)))
            .map_or(&[], Vec::as_slice)
    }

    /// Unit IDs registered under `form` in any category, in the fixed
    /// category order.
    pub(crate) fn lookup_all_categories(&self, form: &str, main_forms_only: bool) -> Vec<LexUnitId> {
        WordCategory::ALL
            .iter()
            .flat_map(|&category| self.lookup(form, category, main_forms_only))
            .copied()
            .collect()
    }
}
