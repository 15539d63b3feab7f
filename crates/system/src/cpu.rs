use glance_core::{CpuSample, GlanceError, Result};
use std::time::Duration;
use sysinfo::System;

/// Shortest window over which the OS counters yield a usable delta.
pub const MINIMUM_WINDOW: Duration = sysinfo::MINIMUM_CPU_UPDATE_INTERVAL;

/// Clamp a requested sampling window so a non-zero window is never shorter
/// than [`MINIMUM_WINDOW`].  A zero window stays zero.
pub fn effective_window(window: Duration) -> Duration {
    if window.is_zero() {
        window
    } else {
        window.max(MINIMUM_WINDOW)
    }
}

/// Read the CPU usage accumulated since the previous `refresh_cpu_usage`.
pub fn read_cpu(sys: &System, per_core: bool) -> Result<CpuSample> {
    let cpus = sys.cpus();
    if cpus.is_empty() {
        return Err(GlanceError::provider("CPU usage", "no CPUs reported"));
    }

    if per_core {
        Ok(CpuSample::PerCore(
            cpus.iter().map(|c| clamp_percent(c.cpu_usage())).collect(),
        ))
    } else {
        Ok(CpuSample::Aggregate(clamp_percent(sys.global_cpu_usage())))
    }
}

fn clamp_percent(value: f32) -> f64 {
    if value.is_finite() {
        f64::from(value).clamp(0.0, 100.0)
    } else {
        0.0
    }
}
