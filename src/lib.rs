//! Shared library for the model compatibility resolver.
//!
//! The crate exposes the model schema store contract, the capability
//! classifier and presentation mapper, and the resolver that combines them
//! into one `CompatibilityResult` per model. Public functions here form the
//! contract consumed by badge and popover surfaces and by the `model-compat`
//! binary: `resolve` is total and pure, while loading a schema file or
//! resolving configuration returns `anyhow::Result`.

pub mod compat;
pub mod config;
pub mod schema;
mod schema_loader;

pub use compat::{
    CompatibilityItem, CompatibilityMemo, CompatibilityResolver, CompatibilityResult, Locale,
    ModelSelection, SupportLevel, classify, feature_display_name, label_for, resolve,
    resolve_with_locale, tooltip_for,
};
pub use config::{ConfigOverrides, ResolverConfig, find_project_root, split_list};
pub use schema::{
    FeatureKey, ModelDescriptor, ModelSchemaFile, ModelSchemaIndex, ModelSchemaStore,
    SchemaVersion, StaticSchemaStore, load_schema_from_path,
};
