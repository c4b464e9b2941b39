//! Resolves model compatibility and streams results as NDJSON.
//!
//! Loads the model schema store (`--schema`, `MODEL_COMPAT_SCHEMA`, or the
//! project default), resolves each model id given on the command line, and
//! prints one compact `CompatibilityResult` per line. Log output goes to stderr
//! and is controlled by `RUST_LOG`.

use anyhow::{Result, anyhow, bail};
use model_compat::{
    CompatibilityResolver, ConfigOverrides, FeatureKey, ModelSchemaIndex, ResolverConfig,
    split_list,
};
use serde_json::Value;
use std::{env, path::PathBuf};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_target(false)
        .init();

    if let Err(err) = run() {
        eprintln!("model-compat: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse()?;
    let config = ResolverConfig::load(ConfigOverrides {
        schema_path: cli.schema_path,
        locale: cli.locale,
    })?;
    log::debug!(
        "using schema {} with locale {}",
        config.schema_path.display(),
        config.locale
    );

    let index = ModelSchemaIndex::load(&config.schema_path)?;
    let resolver = CompatibilityResolver::new(index).with_locale(config.locale);

    for model_id in &cli.model_ids {
        let result = resolver.resolve(model_id);
        let mut view = serde_json::to_value(&result)?;
        if let Some(features) = &cli.features {
            filter_items(&mut view, features);
        }
        println!("{}", serde_json::to_string(&view)?);
    }
    Ok(())
}

/// Drop items outside `features` from a serialized result.
fn filter_items(view: &mut Value, features: &[FeatureKey]) {
    if let Some(items) = view.get_mut("items").and_then(Value::as_object_mut) {
        items.retain(|key, _| features.iter().any(|feature| key.as_str() == feature.as_str()));
    }
}

struct Cli {
    schema_path: Option<PathBuf>,
    locale: Option<String>,
    features: Option<Vec<FeatureKey>>,
    model_ids: Vec<String>,
}

impl Cli {
    fn parse() -> Result<Self> {
        let mut args = env::args_os();
        let _program = args.next();
        let mut schema_path = None;
        let mut locale = None;
        let mut features = None;
        let mut model_ids = Vec::new();

        while let Some(arg) = args.next() {
            let arg_str = arg
                .into_string()
                .map_err(|_| anyhow!("invalid UTF-8 in argument"))?;
            match arg_str.as_str() {
                "--schema" => {
                    schema_path = Some(PathBuf::from(next_value("--schema", &mut args)?))
                }
                "--locale" => locale = Some(next_value("--locale", &mut args)?),
                "--features" => {
                    features = Some(parse_features(&next_value("--features", &mut args)?)?)
                }
                "--help" | "-h" => usage(0),
                other if other.starts_with("--") => bail!("unknown argument: {other}"),
                other => model_ids.push(other.to_string()),
            }
        }

        if model_ids.is_empty() {
            bail!("at least one MODEL_ID is required (see --help)");
        }

        Ok(Self {
            schema_path,
            locale,
            features,
            model_ids,
        })
    }
}

fn next_value(flag: &str, args: &mut env::ArgsOs) -> Result<String> {
    let value = args
        .next()
        .ok_or_else(|| anyhow!("{flag} requires a value"))?
        .into_string()
        .map_err(|_| anyhow!("{flag} must be valid UTF-8"))?;
    if value.trim().is_empty() {
        bail!("{flag} must not be empty");
    }
    Ok(value)
}

fn parse_features(raw: &str) -> Result<Vec<FeatureKey>> {
    let mut features = Vec::new();
    for token in split_list(raw) {
        let key = FeatureKey::parse(&token).ok_or_else(|| {
            let known: Vec<&str> = FeatureKey::ALL.iter().map(FeatureKey::as_str).collect();
            anyhow!("unknown feature '{token}'; expected one of: {}", known.join(", "))
        })?;
        if !features.contains(&key) {
            features.push(key);
        }
    }
    if features.is_empty() {
        bail!("--features must name at least one feature");
    }
    Ok(features)
}

fn usage(code: i32) -> ! {
    eprintln!(
        "Usage: model-compat [--schema PATH] [--locale LOCALE] [--features LIST] MODEL_ID...\n\nOptions:\n  --schema PATH             Model schema file (or set MODEL_COMPAT_SCHEMA).\n  --locale LOCALE           Label language: en or zh-CN (or set MODEL_COMPAT_LOCALE).\n  --features LIST           Comma-separated feature keys to print (default: all six).\n  --help                    Show this help text."
    );
    std::process::exit(code);
}
