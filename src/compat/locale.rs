use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Language used for short labels, tooltips and feature names.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-CN")]
    ZhCn,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhCn => "zh-CN",
        }
    }

    /// Parse a locale tag such as `en`, `en-US`, `zh` or `zh_CN`, ignoring case.
    pub fn parse(value: &str) -> Result<Self> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            "zh" | "zh-cn" | "zh-hans" => Ok(Locale::ZhCn),
            _ => bail!("unsupported locale '{value}'; expected one of: en, zh-CN"),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_common_spellings() {
        for tag in ["en", "EN", "en-US", "en_us", " en "] {
            assert_eq!(Locale::parse(tag).unwrap(), Locale::En, "{tag}");
        }
        for tag in ["zh", "zh-CN", "zh_CN", "ZH-cn", "zh-Hans"] {
            assert_eq!(Locale::parse(tag).unwrap(), Locale::ZhCn, "{tag}");
        }
    }

    #[test]
    fn parse_rejects_other_languages() {
        let err = Locale::parse("fr").unwrap_err();
        assert!(err.to_string().contains("fr"));
        assert!(Locale::parse("").is_err());
    }
}
