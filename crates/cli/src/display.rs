//! One-shot display routines: query the provider, format, write.
//!
//! A failed query prints an `Error fetching …` line in place of its block
//! and never stops sibling queries.

use crate::dispatch::Mode;
use glance_core::{DiskSample, GlanceError, MetricSample};
use glance_renderer::{disk_listing, memory_listing, GraphSection};
use glance_system::MetricsProvider;
use glance_theme::Theme;
use std::io::{self, Write};
use std::time::Duration;

/// Window used for the CPU snapshot.
pub const SNAPSHOT_CPU_WINDOW: Duration = Duration::from_secs(1);

/// Settings for the one-shot routines.
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub theme:          Theme,
    pub graph_height:   usize,
    pub include_pseudo: bool,
}

/// Print the `--info` graph snapshot for `mode`.
pub fn show_snapshot<P, W>(
    mode: Mode,
    provider: &mut P,
    out: &mut W,
    opts: &DisplayOptions,
) -> io::Result<()>
where
    P: MetricsProvider + ?Sized,
    W: Write + ?Sized,
{
    match mode {
        Mode::Cpu => match provider.sample_cpu(SNAPSHOT_CPU_WINDOW, true) {
            Ok(cpu) => write_section(out, opts, &MetricSample::Cpu(cpu))?,
            Err(e) => report_failure(out, "CPU usage", &e)?,
        },
        Mode::Memory => match provider.sample_memory() {
            Ok(mem) => write_section(out, opts, &MetricSample::Memory(mem))?,
            Err(e) => report_failure(out, "memory usage", &e)?,
        },
        Mode::Disk => for_each_disk(provider, out, opts.include_pseudo, |out, disk| {
            write_section(out, opts, &MetricSample::Disk(disk))
        })?,
    }
    out.flush()
}

/// Print total / free / used memory.
pub fn show_memory<P, W>(provider: &mut P, out: &mut W, opts: &DisplayOptions) -> io::Result<()>
where
    P: MetricsProvider + ?Sized,
    W: Write + ?Sized,
{
    match provider.sample_memory() {
        Ok(mem) => out.write_all(memory_listing(&mem, &opts.theme).as_bytes())?,
        Err(e) => report_failure(out, "memory usage", &e)?,
    }
    out.flush()
}

/// Print total / free / used space for every partition.
pub fn show_disks<P, W>(provider: &mut P, out: &mut W, opts: &DisplayOptions) -> io::Result<()>
where
    P: MetricsProvider + ?Sized,
    W: Write + ?Sized,
{
    for_each_disk(provider, out, opts.include_pseudo, |out, disk| {
        out.write_all(disk_listing(&disk, &opts.theme).as_bytes())
    })?;
    out.flush()
}

/// Line printed when a query fails, e.g.
/// `Error fetching memory usage: total memory reported as zero`.
pub fn failure_line(what: &str, err: &GlanceError) -> String {
    match err {
        GlanceError::Provider { reason, .. } => format!("Error fetching {what}: {reason}\n"),
        other => format!("Error fetching {what}: {other}\n"),
    }
}

/// Call `show` for every readable partition, in listing order.
/// Unreadable partitions are reported in place and skipped.
fn for_each_disk<P, W, F>(
    provider: &mut P,
    out: &mut W,
    include_pseudo: bool,
    mut show: F,
) -> io::Result<()>
where
    P: MetricsProvider + ?Sized,
    W: Write + ?Sized,
    F: FnMut(&mut W, DiskSample) -> io::Result<()>,
{
    let mounts = match provider.list_partitions(include_pseudo) {
        Ok(mounts) => mounts,
        Err(e) => return report_failure(out, "disk partitions", &e),
    };
    if mounts.is_empty() {
        tracing::debug!("No partitions to report");
    }

    for mount in mounts {
        match provider.sample_disk_usage(&mount) {
            Ok(usage) => show(out, DiskSample { mount, usage })?,
            Err(e) => report_failure(out, &format!("disk usage for {mount}"), &e)?,
        }
    }
    Ok(())
}

fn write_section<W: Write + ?Sized>(
    out: &mut W,
    opts: &DisplayOptions,
    sample: &MetricSample,
) -> io::Result<()> {
    let section = GraphSection::from_sample(sample);
    out.write_all(section.render(&opts.theme, opts.graph_height).as_bytes())
}

fn report_failure<W: Write + ?Sized>(out: &mut W, what: &str, err: &GlanceError) -> io::Result<()> {
    tracing::debug!("Query for {what} failed: {err}");
    out.write_all(failure_line(what, err).as_bytes())
}
