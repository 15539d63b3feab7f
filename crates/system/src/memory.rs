use glance_core::{GlanceError, MemorySample, Result};
use sysinfo::System;

/// Build a [`MemorySample`] from the last `refresh_memory` call.
pub fn read_memory(sys: &System) -> Result<MemorySample> {
    usage_from_counters(sys.total_memory(), sys.used_memory(), sys.free_memory())
}

/// Combine raw memory counters into a sample with `used + free <= total`.
///
/// `used` follows the OS notion (total minus available) while `free` is
/// memory nobody touches at all.  Available memory can be reported below
/// free memory, so `free` is capped at whatever `used` leaves over.
pub fn usage_from_counters(total: u64, used: u64, free: u64) -> Result<MemorySample> {
    if total == 0 {
        return Err(GlanceError::provider(
            "memory usage",
            "total memory reported as zero",
        ));
    }

    let used = used.min(total);
    Ok(MemorySample {
        total,
        used,
        free: free.min(total - used),
    })
}
