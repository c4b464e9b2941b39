//! Model capability compatibility.
//!
//! `classifier` turns a capability score into a `SupportLevel`, `presentation`
//! renders labels and tooltips, and `resolver` runs both across every
//! `FeatureKey` for a model. `memo` holds the caller-side caches.

pub mod classifier;
pub mod locale;
pub mod memo;
pub mod presentation;
pub mod resolver;

pub use classifier::{SupportLevel, classify};
pub use locale::Locale;
pub use memo::{CompatibilityMemo, ModelSelection};
pub use presentation::{feature_display_name, label_for, tooltip_for};
pub use resolver::{
    CompatibilityItem, CompatibilityResolver, CompatibilityResult, resolve, resolve_with_locale,
};
