pub mod error;
pub mod sample;

pub use error::{GlanceError, Result};
pub use sample::{CpuSample, DiskSample, DiskUsage, MemorySample, MetricSample};
