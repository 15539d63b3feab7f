use crate::args::{Cli, Command, WatchArgs};
use glance_core::{GlanceError, Result};

/// Snapshot selected by `--info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Cpu,
    Memory,
    Disk,
}

/// Table of the values accepted by `--info`.
///
/// Built once in [`ModeTable::standard`] and handed to [`route`]; the
/// order of the entries is the order used in the guidance message.
#[derive(Debug, Clone)]
pub struct ModeTable {
    entries: Vec<(&'static str, Mode)>,
}

impl ModeTable {
    pub fn standard() -> Self {
        Self {
            entries: vec![("cpu", Mode::Cpu), ("memory", Mode::Memory), ("disk", Mode::Disk)],
        }
    }

    pub fn lookup(&self, name: &str) -> Option<Mode> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, mode)| *mode)
    }

    /// Message printed for an unknown `--info` value, e.g.
    /// `Invalid option. Please use 'cpu', 'memory', or 'disk'.`
    pub fn guidance(&self) -> String {
        let quoted: Vec<String> = self
            .entries
            .iter()
            .map(|(name, _)| format!("'{name}'"))
            .collect();
        let choices = match quoted.as_slice() {
            [] => String::new(),
            [only] => only.clone(),
            [first, second] => format!("{first} or {second}"),
            [rest @ .., last] => format!("{}, or {last}", rest.join(", ")),
        };
        format!("Invalid option. Please use {choices}.")
    }
}

/// What one invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// One graph snapshot (`--info`).
    Snapshot(Mode),
    /// Continuous CPU readout until interrupted.
    WatchCpu(WatchArgs),
    /// Total / free / used memory.
    MemoryListing,
    /// Total / free / used space per partition.
    DiskListing,
}

/// Decide what to run for the parsed command line.
///
/// Fails with [`GlanceError::InvalidMode`] when `--info` names no entry of
/// `table`; nothing has been queried at that point.
pub fn route(table: &ModeTable, cli: &Cli) -> Result<Action> {
    let action = match &cli.command {
        Some(Command::Cpu(watch)) => Action::WatchCpu(watch.clone()),
        Some(Command::Memory) => Action::MemoryListing,
        Some(Command::Diskspace) => Action::DiskListing,
        None => table
            .lookup(cli.info())
            .map(Action::Snapshot)
            .ok_or_else(|| GlanceError::InvalidMode(cli.info().to_string()))?,
    };
    Ok(action)
}
