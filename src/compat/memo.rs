//! Caller-side memoization of compatibility results.
//!
//! The resolver is pure, so caching by model id is always correct. Interactive
//! surfaces use `ModelSelection` to recompute only when the selected id changes;
//! views over several models use `CompatibilityMemo`.

use crate::compat::locale::Locale;
use crate::compat::resolver::{CompatibilityResult, resolve_with_locale};
use crate::schema::ModelSchemaStore;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default)]
/// Results cached by model id for one locale.
pub struct CompatibilityMemo {
    locale: Locale,
    entries: BTreeMap<String, CompatibilityResult>,
}

impl CompatibilityMemo {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            entries: BTreeMap::new(),
        }
    }

    pub fn get_or_resolve<S>(&mut self, store: &S, model_id: &str) -> &CompatibilityResult
    where
        S: ModelSchemaStore + ?Sized,
    {
        let locale = self.locale;
        self.entries
            .entry(model_id.to_string())
            .or_insert_with(|| {
                log::debug!("resolving compatibility for '{model_id}' ({locale})");
                resolve_with_locale(store, model_id, locale)
            })
    }

    pub fn get(&self, model_id: &str) -> Option<&CompatibilityResult> {
        self.entries.get(model_id)
    }

    /// Drop one cached result, e.g. after the store reloads that model.
    pub fn invalidate(&mut self, model_id: &str) -> Option<CompatibilityResult> {
        self.entries.remove(model_id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Clone, Debug, Default)]
/// Result for the currently selected model; recomputed only on id change.
pub struct ModelSelection {
    locale: Locale,
    current: Option<CompatibilityResult>,
    recomputations: usize,
}

impl ModelSelection {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            current: None,
            recomputations: 0,
        }
    }

    /// Select `model_id`, resolving only if it differs from the current selection.
    pub fn select<S>(&mut self, store: &S, model_id: &str) -> &CompatibilityResult
    where
        S: ModelSchemaStore + ?Sized,
    {
        let stale = self
            .current
            .as_ref()
            .is_none_or(|current| current.model_id != model_id);
        if stale {
            log::debug!("model selection changed to '{model_id}'; recomputing");
            self.current = None;
            self.recomputations += 1;
        }
        let locale = self.locale;
        self.current
            .get_or_insert_with(|| resolve_with_locale(store, model_id, locale))
    }

    pub fn current(&self) -> Option<&CompatibilityResult> {
        self.current.as_ref()
    }

    /// Number of times `select` actually ran the resolver.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::resolver::resolve;
    use crate::schema::{FeatureKey, ModelDescriptor, StaticSchemaStore};

    fn store() -> StaticSchemaStore {
        StaticSchemaStore::from_descriptors([
            ModelDescriptor::new("a").with_score(FeatureKey::Workflow, 2),
            ModelDescriptor::new("b").with_score(FeatureKey::Workflow, 0),
        ])
    }

    #[test]
    fn memo_returns_value_equal_results() {
        let store = store();
        let mut memo = CompatibilityMemo::new(Locale::En);
        let first = memo.get_or_resolve(&store, "a").clone();
        let second = memo.get_or_resolve(&store, "a").clone();
        assert_eq!(first, second);
        assert_eq!(first, resolve(&store, "a"));
        assert_eq!(memo.len(), 1);

        memo.get_or_resolve(&store, "b");
        assert_eq!(memo.len(), 2);
        assert!(memo.invalidate("a").is_some());
        assert!(memo.get("a").is_none());
        memo.clear();
        assert!(memo.is_empty());
    }

    #[test]
    fn selection_recomputes_only_on_change() {
        let store = store();
        let mut selection = ModelSelection::new(Locale::En);
        assert!(selection.current().is_none());

        selection.select(&store, "a");
        selection.select(&store, "a");
        assert_eq!(selection.recomputations(), 1);

        let status = selection.select(&store, "b").status(FeatureKey::Workflow);
        assert_eq!(status, Some(crate::compat::SupportLevel::Unsupported));
        assert_eq!(selection.recomputations(), 2);

        selection.select(&store, "a");
        assert_eq!(selection.recomputations(), 3);
        assert_eq!(selection.current().map(|r| r.model_id.as_str()), Some("a"));
    }
}
