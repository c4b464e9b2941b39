//! Model schema store wiring.
//!
//! The resolver only sees the `ModelSchemaStore` read contract. This module
//! provides that trait, the descriptor types it returns, a file-backed
//! `ModelSchemaIndex` for `schema/models.json`, and an in-memory
//! `StaticSchemaStore` for descriptors built in code.

pub mod identity;
pub mod index;
pub mod model;
pub mod repository;
pub mod store;

pub use identity::{FeatureKey, SchemaVersion};
pub use index::ModelSchemaIndex;
pub use model::{ModelDescriptor, ModelSchemaFile};
pub use repository::StaticSchemaStore;
pub use store::ModelSchemaStore;

pub use model::load_schema_from_path;
