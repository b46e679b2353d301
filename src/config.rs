use crate::error::{Result, ScorecardError};
use crate::types::config::ScorecardConfig;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "scorecard.toml";

/// Loads `scorecard.toml` from the target repository root, if present.
/// Absence is not an error; a file that fails to parse is.
pub fn load_config(root: &Path) -> Result<Option<ScorecardConfig>> {
    let path = root.join(DEFAULT_CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path)?;
    let config = toml::from_str(&content)
        .map_err(|e: toml::de::Error| ScorecardError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    Ok(Some(config))
}
