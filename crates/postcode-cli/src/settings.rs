//! Override configuration loading.
//!
//! Reads a YAML [`PostcodeConfig`] and applies it to a registry. The path
//! comes from `--config` or the `POSTCODE_CONFIG` environment variable.

use std::path::Path;

use anyhow::{Context, Result};
use postcode_core::{PostcodeConfig, Registry};

/// Parse a YAML override file.
pub fn load_config(path: &Path) -> Result<PostcodeConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    if text.trim().is_empty() {
        return Ok(PostcodeConfig::default());
    }
    serde_yaml::from_str(&text)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Load `path`, if given, and register its overrides with `registry`.
///
/// Returns the number of overrides applied.
pub fn configure(registry: &Registry, path: Option<&Path>) -> Result<usize> {
    let Some(path) = path else {
        return Ok(0);
    };
    let config = load_config(path)?;
    let applied = config
        .apply(registry)
        .with_context(|| format!("invalid config: {}", path.display()))?;
    tracing::info!(path = %path.display(), applied, "loaded postcode overrides");
    Ok(applied)
}
