//! Metrics provider: point-in-time CPU, memory and disk queries.
//!
//! [`MetricsProvider`] is the seam the display layer talks to;
//! [`SysinfoProvider`] backs it with the `sysinfo` crate.

pub mod cpu;
pub mod disk;
pub mod memory;

pub use cpu::MINIMUM_WINDOW;

use glance_core::{CpuSample, DiskUsage, GlanceError, MemorySample, Result};
use std::time::Duration;
use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, RefreshKind, System};

/// Point-in-time OS metric queries.
///
/// Every call builds a fresh sample; failures are per query and never
/// poison later calls.
pub trait MetricsProvider {
    /// Measure CPU utilisation over `window`, blocking for roughly that long.
    ///
    /// A zero window returns the usage since the previous CPU query without
    /// blocking.  `per_core` selects one value per logical core instead of
    /// the aggregate.
    fn sample_cpu(&mut self, window: Duration, per_core: bool) -> Result<CpuSample>;

    /// Current virtual memory statistics.
    fn sample_memory(&mut self) -> Result<MemorySample>;

    /// Mount identifiers of every mounted partition.
    fn list_partitions(&mut self, include_pseudo: bool) -> Result<Vec<String>>;

    /// Capacity figures for the partition mounted at `mount`.
    fn sample_disk_usage(&mut self, mount: &str) -> Result<DiskUsage>;
}

/// [`MetricsProvider`] backed by `sysinfo`.
///
/// Keeps one `System` alive so zero-window CPU reads have a previous
/// refresh to diff against.
pub struct SysinfoProvider {
    sys:   System,
    disks: Disks,
}

impl SysinfoProvider {
    pub fn new() -> Result<Self> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(GlanceError::Unsupported);
        }

        let refresh = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
            .with_memory(MemoryRefreshKind::nothing().with_ram());

        Ok(Self {
            sys:   System::new_with_specifics(refresh),
            disks: Disks::new(),
        })
    }
}

impl std::fmt::Debug for SysinfoProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SysinfoProvider")
            .field("cpus", &self.sys.cpus().len())
            .field("disks", &self.disks.list().len())
            .finish()
    }
}

impl MetricsProvider for SysinfoProvider {
    fn sample_cpu(&mut self, window: Duration, per_core: bool) -> Result<CpuSample> {
        let window = cpu::effective_window(window);
        if !window.is_zero() {
            self.sys.refresh_cpu_usage();
            tracing::debug!("Sampling CPU over {window:?}");
            std::thread::sleep(window);
        }
        self.sys.refresh_cpu_usage();
        cpu::read_cpu(&self.sys, per_core)
    }

    fn sample_memory(&mut self) -> Result<MemorySample> {
        self.sys.refresh_memory();
        memory::read_memory(&self.sys)
    }

    fn list_partitions(&mut self, include_pseudo: bool) -> Result<Vec<String>> {
        self.disks = Disks::new_with_refreshed_list();

        let mounts: Vec<String> = self
            .disks
            .list()
            .iter()
            .filter(|d| disk::is_listed(d, include_pseudo))
            .map(disk::mount_of)
            .collect();

        tracing::debug!(
            "Found {} partitions ({} listed)",
            self.disks.list().len(),
            mounts.len()
        );
        Ok(mounts)
    }

    fn sample_disk_usage(&mut self, mount: &str) -> Result<DiskUsage> {
        let known = |disks: &Disks| disks.list().iter().any(|d| disk::mount_of(d) == mount);
        if !known(&self.disks) {
            self.disks = Disks::new_with_refreshed_list();
        }

        self.disks
            .list()
            .iter()
            .find(|d| disk::mount_of(d) == mount)
            .ok_or_else(|| {
                GlanceError::provider(format!("disk usage for {mount}"), "no such mount point")
            })
            .and_then(disk::usage_of)
    }
}
