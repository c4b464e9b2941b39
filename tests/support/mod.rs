use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::NamedTempFile;

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn model_compat_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_model-compat"))
}

/// Write `value` to a temp file shaped like `schema/models.json`.
pub fn write_schema_file(value: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("failed to allocate schema file")?;
    serde_json::to_writer(&mut file, value)?;
    Ok(file)
}

/// Command for the binary with every `MODEL_COMPAT_*` variable cleared.
pub fn model_compat_command(schema: &Path) -> Command {
    let mut cmd = Command::new(model_compat_binary());
    cmd.env_remove("MODEL_COMPAT_SCHEMA")
        .env_remove("MODEL_COMPAT_LOCALE")
        .env_remove("MODEL_COMPAT_ROOT")
        .env("RUST_LOG", "off")
        .arg("--schema")
        .arg(schema);
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

/// Parse one JSON value per non-empty stdout line.
pub fn parse_ndjson(stdout: &[u8]) -> Result<Vec<Value>> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).context("stdout line is not JSON"))
        .collect()
}
