use serde::{Deserialize, Serialize};

/// Graph height used when neither the config file nor `--height` sets one.
pub const DEFAULT_GRAPH_HEIGHT: usize = 10;
/// Smallest and largest accepted graph heights (rows).
pub const GRAPH_HEIGHT_RANGE: std::ops::RangeInclusive<usize> = 1..=100;
/// Smallest and largest accepted watch intervals (milliseconds).
pub const WATCH_INTERVAL_RANGE: std::ops::RangeInclusive<u64> = 100..=60_000;

/// Root configuration structure parsed from a `glance.toml` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlanceConfig {
    /// ASCII graph settings for the snapshot modes.
    pub graph: GraphConfig,
    /// Continuous CPU watch settings.
    pub watch: WatchConfig,
    /// Partition listing settings.
    pub disk: DiskConfig,
    /// Terminal colours.
    pub theme: ThemeConfig,
}

/// ASCII graph settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Graph height in terminal rows.
    pub height: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { height: DEFAULT_GRAPH_HEIGHT }
    }
}

/// Settings for the `cpu` watch subcommand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Delay between two CPU readings.
    pub interval_ms: u64,
    /// Print one figure per core instead of the aggregate.
    pub per_core: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1_000,
            per_core:    false,
        }
    }
}

/// Settings for partition listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiskConfig {
    /// Also report pseudo filesystems (tmpfs, overlay, ...).
    pub include_pseudo: bool,
}

/// When to emit terminal colour codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colour only when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

/// Theme / styling configuration.
///
/// Colours are either ANSI names (`"blue"`, `"dark_yellow"`) or hex
/// strings (`"#89b4fa"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub color: ColorMode,
    /// Title of the CPU graph.
    pub cpu: String,
    /// Title of the memory graph.
    pub memory: String,
    /// Titles of the per-partition disk graphs.
    pub disk: String,
    /// Graph body.
    pub graph: String,
    /// Continuous CPU readout.
    pub watch: String,
    /// "Total" lines in the memory / disk listings.
    pub total: String,
    /// "Free" lines in the memory / disk listings.
    pub free: String,
    /// "Used" lines in the memory / disk listings.
    pub used: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            color:  ColorMode::Auto,
            cpu:    "blue".to_string(),
            memory: "green".to_string(),
            disk:   "red".to_string(),
            graph:  "green".to_string(),
            watch:  "cyan".to_string(),
            total:  "cyan".to_string(),
            free:   "green".to_string(),
            used:   "red".to_string(),
        }
    }
}
