//! Per-feature compatibility for one model.
//!
//! A single synchronous pass: look the model up in the injected store, then
//! classify and label each of the six features. Resolution is total. Missing
//! models, missing names and malformed scores all degrade to `Unknown` or to
//! the id-as-name fallback instead of failing. The resolver keeps no state, so
//! equal inputs always give equal results and callers may memoize by model id.

use crate::compat::classifier::{SupportLevel, classify};
use crate::compat::locale::Locale;
use crate::compat::presentation::{label_for, tooltip_for};
use crate::schema::{FeatureKey, ModelDescriptor, ModelSchemaStore};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Compatibility of one feature, ready for a badge or popover.
pub struct CompatibilityItem {
    pub key: FeatureKey,
    pub status: SupportLevel,
    pub short_label: String,
    pub tooltip: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Snapshot of every tracked feature for a model.
pub struct CompatibilityResult {
    pub model_id: String,
    pub model_name: String,
    pub items: BTreeMap<FeatureKey, CompatibilityItem>,
}

impl CompatibilityResult {
    pub fn item(&self, feature: FeatureKey) -> Option<&CompatibilityItem> {
        self.items.get(&feature)
    }

    pub fn status(&self, feature: FeatureKey) -> Option<SupportLevel> {
        self.item(feature).map(|item| item.status)
    }

    /// Items short of full support, in canonical feature order.
    pub fn degraded(&self) -> impl Iterator<Item = &CompatibilityItem> {
        self.items.values().filter(|item| item.status.is_degraded())
    }
}

/// Resolver bound to an injected schema store and a locale.
#[derive(Clone, Debug)]
pub struct CompatibilityResolver<S> {
    store: S,
    locale: Locale,
}

impl<S: ModelSchemaStore> CompatibilityResolver<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            locale: Locale::default(),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn resolve(&self, model_id: &str) -> CompatibilityResult {
        resolve_with_locale(&self.store, model_id, self.locale)
    }
}

/// Resolve every feature for `model_id` with English wording.
pub fn resolve<S>(store: &S, model_id: &str) -> CompatibilityResult
where
    S: ModelSchemaStore + ?Sized,
{
    resolve_with_locale(store, model_id, Locale::En)
}

pub fn resolve_with_locale<S>(store: &S, model_id: &str, locale: Locale) -> CompatibilityResult
where
    S: ModelSchemaStore + ?Sized,
{
    let descriptor = store.model_schema(model_id);
    let model_name = descriptor.display_name().unwrap_or(model_id).to_string();
    let items = FeatureKey::ALL
        .into_iter()
        .map(|feature| (feature, build_item(&descriptor, feature, &model_name, locale)))
        .collect();

    CompatibilityResult {
        model_id: model_id.to_string(),
        model_name,
        items,
    }
}

fn build_item(
    descriptor: &ModelDescriptor,
    feature: FeatureKey,
    model_name: &str,
    locale: Locale,
) -> CompatibilityItem {
    let status = classify(descriptor.score(feature));
    CompatibilityItem {
        key: feature,
        status,
        short_label: label_for(status, locale).to_string(),
        tooltip: tooltip_for(feature, status, model_name, locale),
    }
}
