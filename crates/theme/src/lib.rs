pub mod colors;
pub mod style;

pub use colors::parse_color;
pub use style::TextStyle;

use crossterm::style::Color;
use glance_config::{ColorMode, ThemeConfig};
use std::io::IsTerminal;

/// Compiled theme derived from [`ThemeConfig`].
///
/// Calling [`Theme::from_config`] is infallible: unknown colour strings
/// fall back to the built-in palette.  When colour is disabled every
/// `paint` call returns the text unchanged.
#[derive(Debug, Clone)]
pub struct Theme {
    pub enabled: bool,
    pub cpu:     TextStyle,
    pub memory:  TextStyle,
    pub disk:    TextStyle,
    pub graph:   TextStyle,
    pub watch:   TextStyle,
    pub total:   TextStyle,
    pub free:    TextStyle,
    pub used:    TextStyle,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    ///
    /// `is_terminal` reports whether the output sink understands escape
    /// sequences; it only matters for [`ColorMode::Auto`].
    pub fn from_config(cfg: &ThemeConfig, is_terminal: bool) -> Self {
        let enabled = match cfg.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_terminal && std::env::var_os("NO_COLOR").is_none(),
        };

        Self {
            enabled,
            cpu:    TextStyle::bold(color_or(&cfg.cpu, Color::Blue)),
            memory: TextStyle::bold(color_or(&cfg.memory, Color::Green)),
            disk:   TextStyle::bold(color_or(&cfg.disk, Color::Red)),
            graph:  TextStyle::plain(color_or(&cfg.graph, Color::Green)),
            watch:  TextStyle::plain(color_or(&cfg.watch, Color::Cyan)),
            total:  TextStyle::plain(color_or(&cfg.total, Color::Cyan)),
            free:   TextStyle::plain(color_or(&cfg.free, Color::Green)),
            used:   TextStyle::plain(color_or(&cfg.used, Color::Red)),
        }
    }

    /// Build a theme for standard output.
    pub fn for_stdout(cfg: &ThemeConfig) -> Self {
        Self::from_config(cfg, std::io::stdout().is_terminal())
    }

    /// A theme that never emits escape sequences.
    pub fn plain() -> Self {
        Self::from_config(
            &ThemeConfig {
                color: ColorMode::Never,
                ..ThemeConfig::default()
            },
            false,
        )
    }

    /// Apply `style` to `text` when colour is enabled.
    pub fn paint(&self, style: TextStyle, text: &str) -> String {
        if self.enabled {
            style.apply(text)
        } else {
            text.to_string()
        }
    }
}

fn color_or(spec: &str, fallback: Color) -> Color {
    parse_color(spec).unwrap_or_else(|| {
        tracing::warn!("Unknown colour '{spec}'; using {fallback:?}");
        fallback
    })
}
