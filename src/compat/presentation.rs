//! Support level to badge label and tooltip text.
//!
//! Wording is uniform across features: `tooltip_for` receives the feature key
//! but never branches on it. A per-feature override would have to be added to
//! this contract explicitly. Every tooltip embeds the model name.

use crate::compat::classifier::SupportLevel;
use crate::compat::locale::Locale;
use crate::schema::FeatureKey;

/// Short badge label; empty exactly when the feature is supported.
pub fn label_for(status: SupportLevel, locale: Locale) -> &'static str {
    match (locale, status) {
        (_, SupportLevel::Supported) => "",
        (Locale::En, SupportLevel::Limited) => "Partially supported",
        (Locale::En, SupportLevel::Unsupported) => "Model not supported",
        (Locale::En, SupportLevel::Unknown) => "Unknown",
        (Locale::ZhCn, SupportLevel::Limited) => "部分支持",
        (Locale::ZhCn, SupportLevel::Unsupported) => "模型不支持",
        (Locale::ZhCn, SupportLevel::Unknown) => "未知",
    }
}

/// Tooltip message for one feature of one model.
pub fn tooltip_for(
    _feature: FeatureKey,
    status: SupportLevel,
    model_name: &str,
    locale: Locale,
) -> String {
    match (locale, status) {
        (Locale::En, SupportLevel::Unsupported) => format!(
            "{model_name} does not support this feature. Recommend disabling it or switching models."
        ),
        (Locale::En, SupportLevel::Limited) => format!(
            "{model_name}'s support for this feature is limited and may be unstable. Use with caution or switch models."
        ),
        (Locale::En, SupportLevel::Supported) => format!("{model_name} supports this feature."),
        (Locale::En, SupportLevel::Unknown) => format!("{model_name}'s compatibility is unknown."),
        (Locale::ZhCn, SupportLevel::Unsupported) => {
            format!("{model_name} 不支持该功能，建议关闭该功能或切换模型。")
        }
        (Locale::ZhCn, SupportLevel::Limited) => {
            format!("{model_name} 对该功能的支持有限，可能不稳定，请谨慎使用或切换模型。")
        }
        (Locale::ZhCn, SupportLevel::Supported) => format!("{model_name} 支持该功能。"),
        (Locale::ZhCn, SupportLevel::Unknown) => format!("{model_name} 的兼容性未知。"),
    }
}

/// Human-readable feature name for badge headers.
pub fn feature_display_name(feature: FeatureKey, locale: Locale) -> &'static str {
    match (locale, feature) {
        (Locale::En, FeatureKey::KnowledgeBase) => "Knowledge base",
        (Locale::En, FeatureKey::Ontology) => "Ontology",
        (Locale::En, FeatureKey::Terminology) => "Terminology",
        (Locale::En, FeatureKey::Workflow) => "Workflow",
        (Locale::En, FeatureKey::Plugins) => "Plugins",
        (Locale::En, FeatureKey::Mcp) => "MCP",
        (Locale::ZhCn, FeatureKey::KnowledgeBase) => "知识库",
        (Locale::ZhCn, FeatureKey::Ontology) => "本体",
        (Locale::ZhCn, FeatureKey::Terminology) => "术语",
        (Locale::ZhCn, FeatureKey::Workflow) => "工作流",
        (Locale::ZhCn, FeatureKey::Plugins) => "插件",
        (Locale::ZhCn, FeatureKey::Mcp) => "MCP",
    }
}

impl FeatureKey {
    pub fn display_name(&self, locale: Locale) -> &'static str {
        feature_display_name(*self, locale)
    }
}
