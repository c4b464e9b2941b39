//! Indexed view of a model schema file.
//!
//! The index enforces the expected schema version and provides fast lookup by
//! model id. Loading is strict about duplicates and unknown versions so a
//! broken configuration surfaces at startup; lookups afterwards are total.

use crate::schema::load_schema_from_path;
use crate::schema::{ModelDescriptor, ModelSchemaFile, ModelSchemaStore, SchemaVersion};
use crate::schema_loader::{
    ContractSource, EMBEDDED_MODEL_SCHEMA_CONTRACT, SchemaLoadOptions, is_identifier,
    load_json_schema, validate_instance,
};
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub const DEFAULT_SCHEMA_VERSION: &str = "model_schema_v1";
pub const CONTRACT_FILE_NAME: &str = "model_schema.schema.json";

#[derive(Debug)]
/// Model schema file plus a derived index keyed by model id.
pub struct ModelSchemaIndex {
    schema_version: SchemaVersion,
    source: PathBuf,
    by_id: BTreeMap<String, ModelDescriptor>,
}

impl ModelSchemaIndex {
    /// Load and validate a model schema file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        validate_against_schema(path)?;

        let file =
            load_schema_from_path(path).with_context(|| format!("loading {}", path.display()))?;
        validate_schema_version(&file.schema_version)?;
        let by_id = build_index(&file)?;
        log::info!(
            "loaded {} model descriptor(s) from {} ({})",
            by_id.len(),
            path.display(),
            file.schema_version.0
        );
        Ok(Self {
            schema_version: file.schema_version,
            source: path.to_path_buf(),
            by_id,
        })
    }

    pub fn schema_version(&self) -> &SchemaVersion {
        &self.schema_version
    }

    /// Path the index was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Resolve a descriptor by id without falling back.
    pub fn descriptor(&self, model_id: &str) -> Option<&ModelDescriptor> {
        self.by_id.get(model_id)
    }

    /// Iterates model ids in stable order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.by_id.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl ModelSchemaStore for ModelSchemaIndex {
    fn model_schema(&self, model_id: &str) -> Cow<'_, ModelDescriptor> {
        match self.by_id.get(model_id) {
            Some(descriptor) => Cow::Borrowed(descriptor),
            None => {
                log::debug!("model '{model_id}' not in schema store; using default descriptor");
                Cow::Owned(ModelDescriptor::unknown(model_id))
            }
        }
    }
}

fn validate_schema_version(schema_version: &SchemaVersion) -> Result<()> {
    if schema_version.0.is_empty() {
        bail!("schema_version must not be empty");
    }
    if !is_identifier(&schema_version.0) {
        bail!(
            "schema_version must match ^[A-Za-z0-9_.-]+$, got {}",
            schema_version.0
        );
    }

    let allowed = allowed_schema_versions();
    if !allowed.contains(&schema_version.0) {
        bail!(
            "schema_version '{}' not in allowed set {:?}",
            schema_version.0,
            allowed
        );
    }
    Ok(())
}

fn allowed_schema_versions() -> BTreeSet<String> {
    BTreeSet::from_iter([DEFAULT_SCHEMA_VERSION.to_string()])
}

fn build_index(file: &ModelSchemaFile) -> Result<BTreeMap<String, ModelDescriptor>> {
    let mut map = BTreeMap::new();
    for model in &file.models {
        if model.id.trim().is_empty() {
            bail!("encountered model with no id");
        }
        if map.contains_key(&model.id) {
            bail!("duplicate model id {}", model.id);
        }
        for key in model.unrecognized_keys() {
            log::warn!(
                "model {} declares capability '{}' which is not a tracked feature",
                model.id,
                key
            );
        }
        map.insert(model.id.clone(), model.clone());
    }
    Ok(map)
}

fn validate_against_schema(path: &Path) -> Result<()> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let value: Value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;

    let file_version = value
        .get("schema_version")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let contract_path = sibling_contract_path(path);
    let source = match &contract_path {
        Some(contract) => ContractSource::Path(contract),
        None => ContractSource::Embedded(EMBEDDED_MODEL_SCHEMA_CONTRACT),
    };
    let allowed = allowed_schema_versions();
    let schema = load_json_schema(
        source,
        SchemaLoadOptions {
            allowed_versions: Some(&allowed),
            expected_version: Some(&file_version),
            patch_schema_version_const: true,
            ..Default::default()
        },
    )
    .with_context(|| format!("loading contract for {}", path.display()))?;
    log::debug!(
        "validating {} against contract {}",
        path.display(),
        schema.schema_version
    );

    validate_instance(
        &schema.compiled,
        &value,
        &format!("model schema {}", path.display()),
    )
}

fn sibling_contract_path(data_path: &Path) -> Option<PathBuf> {
    let candidate = data_path.parent()?.join(CONTRACT_FILE_NAME);
    candidate.is_file().then_some(candidate)
}
