//! Command dispatcher for `glance`.
//!
//! Wires the parsed command line to the rest of the workspace:
//! - optional config file + command-line overrides
//! - metrics provider (sysinfo)
//! - one-shot display routines (`--info`, `memory`, `diskspace`)
//! - continuous CPU poller (`cpu`)

pub mod args;
pub mod dispatch;
pub mod display;
pub mod poller;
pub mod shutdown;

#[cfg(test)]
mod testing;

pub use args::{Cli, Command};
pub use dispatch::{route, Action, Mode, ModeTable};

use display::DisplayOptions;
use glance_config::GlanceConfig;
use glance_system::SysinfoProvider;
use glance_theme::Theme;
use std::io::Write;
use std::process::ExitCode;
use tracing::debug;

/// Exit status for an unknown `--info` value.
pub const EXIT_INVALID_MODE: u8 = 2;

/// Execute one invocation.
///
/// Provider failures are printed and do not affect the exit status; only
/// an invalid `--info` value (exit 2) and startup failures (returned as
/// errors) do.
pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let table = ModeTable::standard();
    let action = match route(&table, &cli) {
        Ok(action) => action,
        Err(e) => {
            debug!("{e}");
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", table.guidance())?;
            stdout.flush()?;
            return Ok(ExitCode::from(EXIT_INVALID_MODE));
        }
    };
    debug!("Dispatching {action:?}");

    let config = resolve_config(&cli, &action)?;
    let theme = Theme::for_stdout(&config.theme);
    let mut provider = SysinfoProvider::new()?;

    let opts = DisplayOptions {
        theme,
        graph_height: config.graph.height,
        include_pseudo: config.disk.include_pseudo,
    };
    let mut stdout = std::io::stdout().lock();

    match action {
        Action::Snapshot(mode) => display::show_snapshot(mode, &mut provider, &mut stdout, &opts)?,
        Action::MemoryListing => display::show_memory(&mut provider, &mut stdout, &opts)?,
        Action::DiskListing => display::show_disks(&mut provider, &mut stdout, &opts)?,
        Action::WatchCpu(_) => {
            drop(stdout);
            poller::watch_cpu(provider, opts.theme, &config.watch)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Defaults, then the `--config` file, then command-line flags.
fn resolve_config(cli: &Cli, action: &Action) -> glance_core::Result<GlanceConfig> {
    let mut config = match &cli.display.config {
        Some(path) => glance_config::load(path)?,
        None => GlanceConfig::default(),
    };

    cli.display.apply(&mut config);
    if let Action::WatchCpu(watch) = action {
        watch.apply(&mut config);
    }
    Ok(config)
}
