//! Loading `island.toml` and layering command-line overrides on top.

use crate::app::error::{AppError, Result};
use islandsim_core::config::AppConfig;
use islandsim_data::Species;
use std::path::Path;

/// Reads the config file at `path`, falling back to defaults when it does
/// not exist. The result is not validated yet; overrides come first.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "No config file, using defaults");
        return Ok(AppConfig::default());
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| AppError::from(e).with_context(format!("reading {}", path.display())))?;
    let config = toml::from_str::<AppConfig>(&content)
        .map_err(|e| AppError::from(e).with_context(format!("parsing {}", path.display())))?;
    tracing::info!(path = %path.display(), "Loaded config file");
    Ok(config)
}

/// Runs every driver-side precondition check.
pub fn validate(config: &AppConfig) -> Result<()> {
    config
        .validate()
        .map_err(|e| AppError::validation(format!("{e:#}")))
}

/// Parses a `species=count` pair such as `fox=3` or `mango-tree=12`.
pub fn parse_population(arg: &str) -> Result<(Species, usize)> {
    let (name, count) = arg
        .split_once('=')
        .ok_or_else(|| AppError::config(format!("expected <species>=<count>, got '{arg}'")))?;
    let species = name
        .trim()
        .parse::<Species>()
        .map_err(|e| AppError::config(e.to_string()))?;
    let count = count
        .trim()
        .parse::<usize>()
        .map_err(|e| AppError::config(format!("bad count for {species}: {e}")))?;
    Ok((species, count))
}
