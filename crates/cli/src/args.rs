use clap::builder::RangedU64ValueParser;
use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use glance_config::{ColorMode, GlanceConfig, GRAPH_HEIGHT_RANGE, WATCH_INTERVAL_RANGE};
use std::ffi::OsString;
use std::path::PathBuf;

/// `--info` value used when the flag is absent.
pub const DEFAULT_INFO: &str = "cpu";

/// Command-line interface.
///
/// Without a subcommand glance prints one snapshot selected by `--info`;
/// the subcommands provide the continuous CPU watch and the plain listings.
#[derive(Parser, Debug)]
#[command(name = "glance", version, about = "A CLI tool to display system information")]
pub struct Cli {
    /// Specify the system information to display (cpu, memory, disk) [default: cpu]
    #[arg(short, long, value_name = "MODE")]
    pub info: Option<String>,

    #[command(flatten)]
    pub display: DisplayArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Display and continuously update CPU usage in percentage
    Cpu(WatchArgs),
    /// Display memory usage in GB
    Memory,
    /// Display disk space usage
    Diskspace,
}

/// Options shared by every mode; each one overrides the config file.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayArgs {
    /// Read settings from this TOML file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Graph height in rows
    #[arg(long, global = true, value_parser = height_parser())]
    pub height: Option<usize>,

    /// When to colour the output
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorChoice>,

    /// Include pseudo filesystems (tmpfs, overlay, ...) in disk reports
    #[arg(long, global = true)]
    pub all: bool,
}

/// Options of the `cpu` watch subcommand.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchArgs {
    /// Delay between readings in milliseconds
    #[arg(long, value_parser = interval_parser())]
    pub interval_ms: Option<u64>,

    /// Show one reading per core
    #[arg(long)]
    pub per_core: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => ColorMode::Auto,
            ColorChoice::Always => ColorMode::Always,
            ColorChoice::Never => ColorMode::Never,
        }
    }
}

impl Cli {
    /// Parse `args`, also rejecting `--info` combined with a subcommand.
    pub fn try_parse_checked_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Self::try_parse_from(args)?;
        if cli.info.is_some() && cli.command.is_some() {
            return Err(Self::command().error(
                ErrorKind::ArgumentConflict,
                "'--info' cannot be used together with a subcommand",
            ));
        }
        Ok(cli)
    }

    /// Parse the process arguments, exiting with clap's usage error on failure.
    pub fn parse_checked() -> Self {
        Self::try_parse_checked_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// The `--info` value, or [`DEFAULT_INFO`].
    pub fn info(&self) -> &str {
        self.info.as_deref().unwrap_or(DEFAULT_INFO)
    }
}

fn height_parser() -> RangedU64ValueParser<usize> {
    let (lo, hi) = (*GRAPH_HEIGHT_RANGE.start() as u64, *GRAPH_HEIGHT_RANGE.end() as u64);
    RangedU64ValueParser::new().range(lo..=hi)
}

fn interval_parser() -> RangedU64ValueParser<u64> {
    RangedU64ValueParser::new().range(WATCH_INTERVAL_RANGE)
}

impl DisplayArgs {
    /// Apply command-line overrides on top of `config`.
    pub fn apply(&self, config: &mut GlanceConfig) {
        if let Some(height) = self.height {
            config.graph.height = height;
        }
        if let Some(color) = self.color {
            config.theme.color = color.into();
        }
        if self.all {
            config.disk.include_pseudo = true;
        }
    }
}

impl WatchArgs {
    /// Apply command-line overrides on top of `config`.
    pub fn apply(&self, config: &mut GlanceConfig) {
        if let Some(interval_ms) = self.interval_ms {
            config.watch.interval_ms = interval_ms;
        }
        if self.per_core {
            config.watch.per_core = true;
        }
    }
}
