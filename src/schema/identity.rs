use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Versioned key for a model schema file (e.g., `model_schema_v1`).
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaVersion(pub String);

/// One of the six platform features tracked for compatibility.
///
/// The set is closed: deserializing an identifier outside it is an error, and
/// every resolution produces exactly one item per variant. Declaration order is
/// the canonical display order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum FeatureKey {
    KnowledgeBase,
    Ontology,
    Terminology,
    Workflow,
    Plugins,
    Mcp,
}

impl FeatureKey {
    pub const ALL: [FeatureKey; 6] = [
        FeatureKey::KnowledgeBase,
        FeatureKey::Ontology,
        FeatureKey::Terminology,
        FeatureKey::Workflow,
        FeatureKey::Plugins,
        FeatureKey::Mcp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureKey::KnowledgeBase => "knowledge_base",
            FeatureKey::Ontology => "ontology",
            FeatureKey::Terminology => "terminology",
            FeatureKey::Workflow => "workflow",
            FeatureKey::Plugins => "plugins",
            FeatureKey::Mcp => "mcp",
        }
    }

    /// Parse an exact feature identifier; returns `None` outside the closed set.
    pub fn parse(value: &str) -> Option<Self> {
        FeatureKey::ALL
            .into_iter()
            .find(|key| key.as_str() == value)
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FeatureKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FeatureKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        FeatureKey::parse(&value)
            .ok_or_else(|| D::Error::custom(format!("unknown feature key '{value}'")))
    }
}
