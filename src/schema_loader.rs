//! Shared JSON Schema loader for model schema contracts.
//!
//! Callers pick where the contract comes from (a file on disk or the copy
//! compiled into the crate), optionally enforce an allowed `schema_version`
//! set, patch the `schema_version` const, and get back a compiled validator.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Contract bundled with the crate; used when no sibling contract file exists.
pub(crate) const EMBEDDED_MODEL_SCHEMA_CONTRACT: &str =
    include_str!("../schema/model_schema.schema.json");

/// Where a JSON Schema contract is read from.
pub(crate) enum ContractSource<'a> {
    Path(&'a Path),
    Embedded(&'static str),
}

impl ContractSource<'_> {
    fn label(&self) -> String {
        match self {
            ContractSource::Path(path) => path.display().to_string(),
            ContractSource::Embedded(_) => "<embedded model schema contract>".to_string(),
        }
    }

    fn read(&self) -> Result<Value> {
        match self {
            ContractSource::Path(path) => {
                let file = File::open(path)
                    .with_context(|| format!("opening schema {}", path.display()))?;
                serde_json::from_reader(BufReader::new(file))
                    .with_context(|| format!("parsing schema {}", path.display()))
            }
            ContractSource::Embedded(raw) => {
                serde_json::from_str(raw).context("parsing embedded model schema contract")
            }
        }
    }
}

/// Result of loading and compiling a JSON Schema.
pub(crate) struct SchemaLoadResult {
    pub schema_version: String,
    pub compiled: JSONSchema,
}

/// Controls how schemas are normalized before compilation.
pub(crate) struct SchemaLoadOptions<'a> {
    /// Where to find the schema_version const inside the schema payload.
    pub schema_version_pointer: &'a str,
    /// Override schema_version when provided (used to align consts).
    pub expected_version: Option<&'a str>,
    /// Allowed schema_version values; enforced when present.
    pub allowed_versions: Option<&'a BTreeSet<String>>,
    /// Patch the schema_version const to match `expected_version`.
    pub patch_schema_version_const: bool,
}

impl Default for SchemaLoadOptions<'_> {
    fn default() -> Self {
        Self {
            schema_version_pointer: "/properties/schema_version/const",
            expected_version: None,
            allowed_versions: None,
            patch_schema_version_const: false,
        }
    }
}

pub(crate) fn load_json_schema(
    source: ContractSource<'_>,
    options: SchemaLoadOptions<'_>,
) -> Result<SchemaLoadResult> {
    let label = source.label();
    let mut schema_value = source.read()?;

    let schema_version = match options.expected_version {
        Some(version) => version.to_string(),
        None => extract_schema_version(&schema_value, options.schema_version_pointer)
            .ok_or_else(|| anyhow!("schema {label} missing schema_version const"))?,
    };

    if let Some(allowed) = options.allowed_versions {
        if !allowed.contains(&schema_version) {
            bail!(
                "schema_version '{}' not in allowed set {:?}",
                schema_version,
                allowed
            );
        }
    }

    if options.patch_schema_version_const {
        let target = schema_value
            .pointer_mut(options.schema_version_pointer)
            .ok_or_else(|| {
                anyhow!(
                    "schema {label} missing pointer {} for schema_version const",
                    options.schema_version_pointer
                )
            })?;
        *target = Value::String(schema_version.clone());
    }

    // The compile error borrows the schema value, so flatten it to text here.
    let compiled = JSONSchema::compile(&schema_value)
        .map_err(|err| anyhow!("compiling schema {label}: {err}"))?;

    Ok(SchemaLoadResult {
        schema_version,
        compiled,
    })
}

/// Validate `instance`, joining every violation into one error.
pub(crate) fn validate_instance(
    compiled: &JSONSchema,
    instance: &Value,
    instance_label: &str,
) -> Result<()> {
    if let Err(errors) = compiled.validate(instance) {
        let details = errors
            .map(|err| format!("{}: {err}", err.instance_path))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("{instance_label} failed schema validation:\n{details}");
    }
    Ok(())
}

fn extract_schema_version(schema: &Value, pointer: &str) -> Option<String> {
    let version = schema.pointer(pointer).and_then(Value::as_str)?;
    if is_identifier(version) {
        Some(version.to_string())
    } else {
        None
    }
}

/// True when `value` is non-empty and matches `^[A-Za-z0-9_.-]+$`.
pub(crate) fn is_identifier(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}
