//! Deserializable representation of `schema/models.json`.
//!
//! Descriptors keep capability values as raw JSON so a malformed score never
//! fails the load; classification decides what a value means. Use
//! `ModelSchemaIndex` for validated lookups and these structs when the raw file
//! is needed.

use crate::schema::identity::{FeatureKey, SchemaVersion};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Deserialize)]
/// Full model schema file as stored on disk.
pub struct ModelSchemaFile {
    pub schema_version: SchemaVersion,
    #[serde(default)]
    pub description: Option<String>,
    pub models: Vec<ModelDescriptor>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Record returned by a schema store for one model id.
pub struct ModelDescriptor {
    pub id: String,
    #[serde(default, alias = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub capabilities: BTreeMap<String, Value>,
}

impl ModelDescriptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
            capabilities: BTreeMap::new(),
        }
    }

    /// Default descriptor handed out for ids the store does not know.
    pub fn unknown(id: &str) -> Self {
        Self::new(id)
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_score(mut self, feature: FeatureKey, score: impl Into<Value>) -> Self {
        self.capabilities
            .insert(feature.as_str().to_string(), score.into());
        self
    }

    /// Numeric capability score for `feature`, if the entry exists and is a number.
    pub fn score(&self, feature: FeatureKey) -> Option<f64> {
        self.capabilities
            .get(feature.as_str())
            .and_then(Value::as_f64)
    }

    /// Trimmed display name; `None` when missing or blank.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Capability keys that are not one of the tracked features.
    pub fn unrecognized_keys(&self) -> impl Iterator<Item = &str> {
        self.capabilities
            .keys()
            .map(String::as_str)
            .filter(|key| FeatureKey::parse(key).is_none())
    }
}

/// Read and parse a model schema file from disk without additional validation.
pub fn load_schema_from_path(path: &Path) -> Result<ModelSchemaFile> {
    let data = fs::read_to_string(path)?;
    let file: ModelSchemaFile = serde_json::from_str(&data)?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn score_reads_only_numbers() {
        let descriptor: ModelDescriptor = serde_json::from_value(json!({
            "id": "m",
            "capabilities": {
                "knowledge_base": 2,
                "ontology": "2",
                "terminology": null,
                "workflow": 1.5
            }
        }))
        .unwrap();
        assert_eq!(descriptor.score(FeatureKey::KnowledgeBase), Some(2.0));
        assert_eq!(descriptor.score(FeatureKey::Ontology), None);
        assert_eq!(descriptor.score(FeatureKey::Terminology), None);
        assert_eq!(descriptor.score(FeatureKey::Workflow), Some(1.5));
        assert_eq!(descriptor.score(FeatureKey::Mcp), None);
    }

    #[test]
    fn display_name_accepts_camel_case_alias() {
        let descriptor: ModelDescriptor =
            serde_json::from_value(json!({"id": "m1", "displayName": "Model One"})).unwrap();
        assert_eq!(descriptor.display_name.as_deref(), Some("Model One"));
        assert!(descriptor.capabilities.is_empty());
    }

    #[test]
    fn blank_display_name_counts_as_missing() {
        assert_eq!(ModelDescriptor::new("m2").display_name(), None);
        assert_eq!(
            ModelDescriptor::new("m2").with_display_name("   ").display_name(),
            None
        );
        assert_eq!(
            ModelDescriptor::new("m2")
                .with_display_name(" Model Two ")
                .display_name(),
            Some("Model Two")
        );
    }

    #[test]
    fn unrecognized_keys_skip_feature_keys() {
        let mut descriptor = ModelDescriptor::new("m")
            .with_score(FeatureKey::Mcp, 2)
            .with_score(FeatureKey::Plugins, 0);
        descriptor
            .capabilities
            .insert("vision".to_string(), json!(2));
        let extra: Vec<&str> = descriptor.unrecognized_keys().collect();
        assert_eq!(extra, ["vision"]);
    }
}
