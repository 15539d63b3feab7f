/// One measurement handed from the metrics provider to the formatter.
///
/// Samples are built fresh for every query and dropped once displayed.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricSample {
    Cpu(CpuSample),
    Memory(MemorySample),
    Disk(DiskSample),
}

/// CPU utilisation (0.0 – 100.0) measured over a sampling window.
#[derive(Debug, Clone, PartialEq)]
pub enum CpuSample {
    /// Single figure averaged over every logical core.
    Aggregate(f64),
    /// One figure per logical core, in core order.
    PerCore(Vec<f64>),
}

impl CpuSample {
    /// All values in the sample; an aggregate yields a one-element slice.
    pub fn values(&self) -> &[f64] {
        match self {
            Self::Aggregate(value) => std::slice::from_ref(value),
            Self::PerCore(values) => values,
        }
    }

    /// Mean utilisation across the sample, `0.0` when there are no cores.
    #[must_use]
    pub fn average(&self) -> f64 {
        let values = self.values();
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Virtual memory statistics in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemorySample {
    pub total: u64,
    pub used:  u64,
    pub free:  u64,
}

impl MemorySample {
    /// Used memory as a percentage in `[0, 100]`.
    #[must_use]
    pub fn used_percent(&self) -> f64 {
        percent_of(self.used, self.total)
    }
}

/// Capacity figures for one partition, in bytes.
///
/// `free` is what an unprivileged user can still allocate, so
/// `used + free` may fall short of `total` when blocks are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiskUsage {
    pub total: u64,
    pub used:  u64,
    pub free:  u64,
}

impl DiskUsage {
    /// Used capacity as a percentage in `[0, 100]`.
    #[must_use]
    pub fn used_percent(&self) -> f64 {
        percent_of(self.used, self.total)
    }
}

/// Usage of a single mounted partition.
#[derive(Debug, Clone, PartialEq)]
pub struct DiskSample {
    /// Mount point, e.g. `"/"` or `"/home"`.
    pub mount: String,
    pub usage: DiskUsage,
}

fn percent_of(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
}
