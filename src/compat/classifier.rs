//! Capability score to support level.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Four-valued support classification derived from a capability score.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportLevel {
    Supported,
    Limited,
    Unsupported,
    Unknown,
}

impl SupportLevel {
    pub const ALL: [SupportLevel; 4] = [
        SupportLevel::Supported,
        SupportLevel::Limited,
        SupportLevel::Unsupported,
        SupportLevel::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SupportLevel::Supported => "supported",
            SupportLevel::Limited => "limited",
            SupportLevel::Unsupported => "unsupported",
            SupportLevel::Unknown => "unknown",
        }
    }

    /// Anything short of full support; these get a badge.
    pub fn is_degraded(&self) -> bool {
        !matches!(self, SupportLevel::Supported)
    }
}

impl fmt::Display for SupportLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a raw capability score to a support level.
///
/// Only exact `2`, `1` and `0` carry meaning. Absent, fractional, negative and
/// out-of-range scores all classify as `Unknown`; no input is an error.
pub fn classify(score: Option<f64>) -> SupportLevel {
    match score {
        Some(s) if s == 2.0 => SupportLevel::Supported,
        Some(s) if s == 1.0 => SupportLevel::Limited,
        Some(s) if s == 0.0 => SupportLevel::Unsupported,
        _ => SupportLevel::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_scores_map_to_levels() {
        assert_eq!(classify(Some(2.0)), SupportLevel::Supported);
        assert_eq!(classify(Some(1.0)), SupportLevel::Limited);
        assert_eq!(classify(Some(0.0)), SupportLevel::Unsupported);
        assert_eq!(classify(Some(-0.0)), SupportLevel::Unsupported);
        assert_eq!(classify(None), SupportLevel::Unknown);
    }

    #[test]
    fn out_of_domain_scores_are_unknown() {
        for score in [3.0, -1.0, 0.5, 1.999, 2.0001, 100.0, f64::NAN, f64::INFINITY] {
            assert_eq!(
                classify(Some(score)),
                SupportLevel::Unknown,
                "score {score} should classify as unknown"
            );
        }
    }

    #[test]
    fn only_supported_is_not_degraded() {
        let degraded: Vec<SupportLevel> = SupportLevel::ALL
            .into_iter()
            .filter(SupportLevel::is_degraded)
            .collect();
        assert_eq!(
            degraded,
            [
                SupportLevel::Limited,
                SupportLevel::Unsupported,
                SupportLevel::Unknown
            ]
        );
        assert_eq!(
            serde_json::to_string(&SupportLevel::Unsupported).unwrap(),
            "\"unsupported\""
        );
    }
}
