//! Test doubles shared by the unit tests of this crate.

use glance_core::{CpuSample, DiskUsage, GlanceError, MemorySample, Result};
use glance_system::MetricsProvider;
use std::collections::{HashMap, VecDeque};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Scripted [`MetricsProvider`] that records every call.
pub struct FakeProvider {
    pub cpu:        std::result::Result<CpuSample, String>,
    /// Consumed front to back before falling back to `cpu`.
    pub cpu_script: VecDeque<std::result::Result<CpuSample, String>>,
    /// Real time each CPU query blocks for.
    pub cpu_delay:  Duration,
    pub memory:     std::result::Result<MemorySample, String>,
    pub partitions: std::result::Result<Vec<String>, String>,
    pub disks:      HashMap<String, std::result::Result<DiskUsage, String>>,
    log:            Arc<Mutex<Vec<String>>>,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            cpu:        Ok(CpuSample::Aggregate(0.0)),
            cpu_script: VecDeque::new(),
            cpu_delay:  Duration::ZERO,
            memory:     Ok(MemorySample::default()),
            partitions: Ok(Vec::new()),
            disks:      HashMap::new(),
            log:        Arc::default(),
        }
    }
}

impl FakeProvider {
    /// Calls made so far, oldest first.
    pub fn calls(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    /// Handle to the call log that stays valid after the provider is moved.
    pub fn call_log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.log)
    }

    fn record(&self, call: String) {
        self.log.lock().unwrap().push(call);
    }
}

fn answer<T: Clone>(what: &str, scripted: &std::result::Result<T, String>) -> Result<T> {
    scripted
        .clone()
        .map_err(|reason| GlanceError::provider(what, reason))
}

impl MetricsProvider for FakeProvider {
    fn sample_cpu(&mut self, window: Duration, per_core: bool) -> Result<CpuSample> {
        self.record(format!("cpu {window:?} per_core={per_core}"));
        if !self.cpu_delay.is_zero() {
            std::thread::sleep(self.cpu_delay);
        }
        match self.cpu_script.pop_front() {
            Some(scripted) => answer("CPU usage", &scripted),
            None => answer("CPU usage", &self.cpu),
        }
    }

    fn sample_memory(&mut self) -> Result<MemorySample> {
        self.record("memory".to_string());
        answer("memory usage", &self.memory)
    }

    fn list_partitions(&mut self, include_pseudo: bool) -> Result<Vec<String>> {
        self.record(format!("partitions include_pseudo={include_pseudo}"));
        answer("disk partitions", &self.partitions)
    }

    fn sample_disk_usage(&mut self, mount: &str) -> Result<DiskUsage> {
        self.record(format!("disk {mount}"));
        let what = format!("disk usage for {mount}");
        match self.disks.get(mount) {
            Some(scripted) => answer(&what, scripted),
            None => Err(GlanceError::provider(what, "no such mount point")),
        }
    }
}

/// `Write` sink whose contents can be read while a task still owns it.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
