pub mod schema;

pub use schema::{
    ColorMode, DiskConfig, GlanceConfig, GraphConfig, ThemeConfig, WatchConfig,
    DEFAULT_GRAPH_HEIGHT, GRAPH_HEIGHT_RANGE, WATCH_INTERVAL_RANGE,
};

use glance_core::{GlanceError, Result};
use std::path::Path;

/// Load configuration from a TOML file.  Returns `GlanceConfig::default()` if
/// the file doesn't exist so every command still has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<GlanceConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(GlanceConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| GlanceError::Config(format!("cannot read '{}': {e}", path.display())))?;

    let config = parse(&raw)?;
    tracing::debug!("Loaded config from '{}'", path.display());
    Ok(config)
}

/// Parse and validate a TOML document.
pub fn parse(raw: &str) -> Result<GlanceConfig> {
    let config: GlanceConfig =
        toml::from_str(raw).map_err(|e| GlanceError::Config(format!("TOML parse error: {e}")))?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &GlanceConfig) -> Result<()> {
    if !GRAPH_HEIGHT_RANGE.contains(&config.graph.height) {
        return Err(GlanceError::Config(format!(
            "graph.height must be within {}..={}, got {}",
            GRAPH_HEIGHT_RANGE.start(),
            GRAPH_HEIGHT_RANGE.end(),
            config.graph.height
        )));
    }
    if !WATCH_INTERVAL_RANGE.contains(&config.watch.interval_ms) {
        return Err(GlanceError::Config(format!(
            "watch.interval_ms must be within {}..={}, got {}",
            WATCH_INTERVAL_RANGE.start(),
            WATCH_INTERVAL_RANGE.end(),
            config.watch.interval_ms
        )));
    }
    Ok(())
}
