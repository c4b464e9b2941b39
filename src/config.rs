//! Resolver configuration from CLI flags, environment and defaults.
//!
//! Precedence is CLI over environment over defaults. Empty environment values
//! are ignored so `MODEL_COMPAT_SCHEMA=` behaves like an unset variable.

use crate::compat::Locale;
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

pub const SCHEMA_PATH_ENV: &str = "MODEL_COMPAT_SCHEMA";
pub const LOCALE_ENV: &str = "MODEL_COMPAT_LOCALE";
pub const ROOT_ENV: &str = "MODEL_COMPAT_ROOT";
pub const DEFAULT_SCHEMA_RELATIVE: &str = "schema/models.json";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolverConfig {
    pub schema_path: PathBuf,
    pub locale: Locale,
}

/// Values supplied on the command line; `None` defers to the next layer.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub schema_path: Option<PathBuf>,
    pub locale: Option<String>,
}

impl ResolverConfig {
    /// Build a config from overrides plus the process environment.
    pub fn load(overrides: ConfigOverrides) -> Result<Self> {
        Self::load_with(overrides, env_non_empty)
    }

    /// Same as `load`, reading environment values through `lookup`.
    pub fn load_with<F>(overrides: ConfigOverrides, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let schema_path = overrides
            .schema_path
            .or_else(|| lookup(SCHEMA_PATH_ENV).map(PathBuf::from))
            .unwrap_or_else(|| default_schema_path(lookup(ROOT_ENV).as_deref()));

        let locale = match overrides.locale.or_else(|| lookup(LOCALE_ENV)) {
            Some(raw) => Locale::parse(&raw).with_context(|| format!("resolving locale '{raw}'"))?,
            None => Locale::default(),
        };

        Ok(Self {
            schema_path,
            locale,
        })
    }
}

/// Default data file under the discovered project root, or the bare relative path.
pub fn default_schema_path(root_hint: Option<&str>) -> PathBuf {
    match find_project_root(root_hint) {
        Some(root) => root.join(DEFAULT_SCHEMA_RELATIVE),
        None => PathBuf::from(DEFAULT_SCHEMA_RELATIVE),
    }
}

/// Locate the project root.
///
/// Honors an explicit hint if it points at a real root, then climbs up from the
/// current executable, then tries the build-time hint.
pub fn find_project_root(root_hint: Option<&str>) -> Option<PathBuf> {
    if let Some(root) = root_hint.and_then(root_from_hint) {
        return Some(root);
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(root) = exe_path.parent().and_then(search_upwards) {
            return Some(root);
        }
    }

    option_env!("MODEL_COMPAT_ROOT_HINT").and_then(root_from_hint)
}

fn is_project_root(candidate: &Path) -> bool {
    candidate.join(DEFAULT_SCHEMA_RELATIVE).is_file()
}

fn root_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !is_project_root(&hint_path) {
        return None;
    }
    hint_path.canonicalize().ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = start.canonicalize().ok()?;
    loop {
        if is_project_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            return None;
        }
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

/// Split comma- or whitespace-delimited lists into tokens.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .replace(',', " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn env_map(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn cli_overrides_environment() -> Result<()> {
        let config = ResolverConfig::load_with(
            ConfigOverrides {
                schema_path: Some(PathBuf::from("/cli/models.json")),
                locale: Some("zh-CN".to_string()),
            },
            env_map(&[(SCHEMA_PATH_ENV, "/env/models.json"), (LOCALE_ENV, "en")]),
        )?;
        assert_eq!(config.schema_path, PathBuf::from("/cli/models.json"));
        assert_eq!(config.locale, Locale::ZhCn);
        Ok(())
    }

    #[test]
    fn environment_fills_missing_flags() -> Result<()> {
        let config = ResolverConfig::load_with(
            ConfigOverrides::default(),
            env_map(&[(SCHEMA_PATH_ENV, "/env/models.json"), (LOCALE_ENV, "zh")]),
        )?;
        assert_eq!(config.schema_path, PathBuf::from("/env/models.json"));
        assert_eq!(config.locale, Locale::ZhCn);
        Ok(())
    }

    #[test]
    fn root_hint_selects_default_schema() -> Result<()> {
        let root = TempDir::new()?;
        std::fs::create_dir_all(root.path().join("schema"))?;
        std::fs::write(root.path().join(DEFAULT_SCHEMA_RELATIVE), "{}")?;
        let hint = root.path().to_string_lossy().to_string();

        let config = ResolverConfig::load_with(
            ConfigOverrides::default(),
            env_map(&[(ROOT_ENV, hint.as_str())]),
        )?;
        assert_eq!(
            config.schema_path,
            root.path().canonicalize()?.join(DEFAULT_SCHEMA_RELATIVE)
        );
        assert_eq!(config.locale, Locale::En);
        Ok(())
    }

    #[test]
    fn unknown_locale_is_an_error() {
        let err = ResolverConfig::load_with(
            ConfigOverrides::default(),
            env_map(&[(LOCALE_ENV, "klingon")]),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("klingon"));
    }

    #[test]
    fn split_list_handles_commas_and_spaces() {
        assert_eq!(
            split_list("mcp, plugins  workflow,,"),
            ["mcp", "plugins", "workflow"]
        );
        assert!(split_list("  ").is_empty());
    }
}
