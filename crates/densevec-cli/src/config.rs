use std::path::Path;

use anyhow::{Context, Result};
use densevec::GenerateConfig;

/// Load generation parameters from a JSON file. Missing keys take defaults.
///
/// Ranges are checked when the vector is generated, after command-line
/// overrides have been applied.
pub fn load_generate_config<P: AsRef<Path>>(path: P) -> Result<GenerateConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: GenerateConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
