//! In-memory schema store keyed by model id.
//!
//! Used when descriptors come from code rather than a file, and as the
//! substitutable store in tests.

use crate::schema::model::ModelDescriptor;
use crate::schema::store::ModelSchemaStore;
use std::borrow::Cow;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default)]
/// In-memory store for model descriptors keyed by id.
pub struct StaticSchemaStore {
    models: BTreeMap<String, ModelDescriptor>,
}

impl StaticSchemaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from descriptors; later duplicates replace earlier ones.
    pub fn from_descriptors(descriptors: impl IntoIterator<Item = ModelDescriptor>) -> Self {
        let mut store = Self::new();
        for descriptor in descriptors {
            store.register(descriptor);
        }
        store
    }

    /// Register a descriptor, returning the one it replaced.
    pub fn register(&mut self, descriptor: ModelDescriptor) -> Option<ModelDescriptor> {
        self.models.insert(descriptor.id.clone(), descriptor)
    }

    pub fn get(&self, model_id: &str) -> Option<&ModelDescriptor> {
        self.models.get(model_id)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl ModelSchemaStore for StaticSchemaStore {
    fn model_schema(&self, model_id: &str) -> Cow<'_, ModelDescriptor> {
        match self.models.get(model_id) {
            Some(descriptor) => Cow::Borrowed(descriptor),
            None => Cow::Owned(ModelDescriptor::unknown(model_id)),
        }
    }
}
