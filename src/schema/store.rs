//! Read contract the resolver consumes.

use crate::schema::model::ModelDescriptor;
use std::borrow::Cow;

/// Lookup-by-id access to model descriptors.
///
/// Implementations must be total: an id the store does not know yields
/// `ModelDescriptor::unknown(id)` rather than an error. The resolver relies on
/// this and never handles a missing model itself.
pub trait ModelSchemaStore {
    fn model_schema(&self, model_id: &str) -> Cow<'_, ModelDescriptor>;
}

impl<S: ModelSchemaStore + ?Sized> ModelSchemaStore for &S {
    fn model_schema(&self, model_id: &str) -> Cow<'_, ModelDescriptor> {
        (**self).model_schema(model_id)
    }
}

impl<S: ModelSchemaStore + ?Sized> ModelSchemaStore for Box<S> {
    fn model_schema(&self, model_id: &str) -> Cow<'_, ModelDescriptor> {
        (**self).model_schema(model_id)
    }
}
