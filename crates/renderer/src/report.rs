//! Text blocks written to the terminal, one per display cycle.
//!
//! Every function returns a complete block (including the trailing newline)
//! so callers can emit it with a single write.

use crate::{
    format::{format_byte_size, format_gib, format_percent},
    graph::render_graph,
};
use glance_core::{CpuSample, DiskSample, MemorySample, MetricSample};
use glance_theme::{TextStyle, Theme};

/// Which metric a section shows; selects the title colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Cpu,
    Memory,
    Disk,
}

/// Optional `Used: …, Total: …` line printed under a section title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageLine {
    pub used:  String,
    pub total: String,
}

/// A titled graph, optionally with a used/total line.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSection {
    pub kind:   SectionKind,
    pub title:  String,
    pub series: Vec<f64>,
    pub usage:  Option<UsageLine>,
}

impl GraphSection {
    /// Build the snapshot section for a sample.
    ///
    /// CPU sections graph every value in the sample; memory and disk
    /// sections graph the used-percent exactly as the sample reports it.
    pub fn from_sample(sample: &MetricSample) -> Self {
        match sample {
            MetricSample::Cpu(cpu) => Self {
                kind:   SectionKind::Cpu,
                title:  "CPU Usage".to_string(),
                series: cpu.values().to_vec(),
                usage:  None,
            },
            MetricSample::Memory(mem) => Self {
                kind:   SectionKind::Memory,
                title:  "Memory Usage".to_string(),
                series: vec![mem.used_percent()],
                usage:  Some(UsageLine {
                    used:  format_byte_size(mem.used),
                    total: format_byte_size(mem.total),
                }),
            },
            MetricSample::Disk(disk) => Self {
                kind:   SectionKind::Disk,
                title:  format!("Disk Usage ({})", disk.mount),
                series: vec![disk.usage.used_percent()],
                usage:  Some(UsageLine {
                    used:  format_byte_size(disk.usage.used),
                    total: format_byte_size(disk.usage.total),
                }),
            },
        }
    }

    /// Render as a blank line, the title, the usage line and the graph.
    pub fn render(&self, theme: &Theme, height: usize) -> String {
        let title_style = match self.kind {
            SectionKind::Cpu => theme.cpu,
            SectionKind::Memory => theme.memory,
            SectionKind::Disk => theme.disk,
        };

        let mut out = format!("\n{}\n", theme.paint(title_style, &self.title));
        if let Some(usage) = &self.usage {
            out.push_str(&format!("Used: {}, Total: {}\n", usage.used, usage.total));
        }
        out.push_str(&theme.paint(theme.graph, &render_graph(&self.series, height)));
        out.push('\n');
        out
    }
}

/// Single-line CPU readout used by the watch mode.
pub fn cpu_readout(sample: &CpuSample, theme: &Theme) -> String {
    let text = match sample {
        CpuSample::Aggregate(value) => format!("CPU Usage: {}", format_percent(*value)),
        CpuSample::PerCore(values) => {
            let cores: Vec<String> = values.iter().map(|v| format_percent(*v)).collect();
            format!(
                "CPU Usage: {} | {}",
                format_percent(sample.average()),
                cores.join(" ")
            )
        }
    };
    format!("{}\n", theme.paint(theme.watch, &text))
}

/// Total / free / used memory in gigabytes.
pub fn memory_listing(sample: &MemorySample, theme: &Theme) -> String {
    [
        (theme.total, "Total Memory", sample.total),
        (theme.free, "Free Memory", sample.free),
        (theme.used, "Used Memory", sample.used),
    ]
    .into_iter()
    .map(|(style, label, bytes)| listing_line(theme, style, label, bytes))
    .collect()
}

/// Mount point followed by total / free / used space in gigabytes.
pub fn disk_listing(sample: &DiskSample, theme: &Theme) -> String {
    let mut out = format!("Disk: {}\n", sample.mount);
    for (style, label, bytes) in [
        (theme.total, "Total Space", sample.usage.total),
        (theme.free, "Free Space", sample.usage.free),
        (theme.used, "Used Space", sample.usage.used),
    ] {
        out.push_str(&listing_line(theme, style, label, bytes));
    }
    out.push('\n');
    out
}

fn listing_line(theme: &Theme, style: TextStyle, label: &str, bytes: u64) -> String {
    format!("{}\n", theme.paint(style, &format!("{label}: {}", format_gib(bytes))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glance_core::DiskUsage;

    const GIB: u64 = 1 << 30;

    #[test]
    fn memory_section_reports_provider_percent() {
        let mem = MemorySample { total: 16 * GIB, used: 4 * GIB, free: 10 * GIB };
        let section = GraphSection::from_sample(&MetricSample::Memory(mem));
        assert_eq!(section.series, vec![mem.used_percent()]);
        assert_eq!(
            section.usage,
            Some(UsageLine { used: "4.0 GB".into(), total: "16.0 GB".into() })
        );
    }

    #[test]
    fn disk_section_title_names_mount() {
        let disk = DiskSample {
            mount: "/home".into(),
            usage: DiskUsage { total: 100 * GIB, used: 25 * GIB, free: 75 * GIB },
        };
        let section = GraphSection::from_sample(&MetricSample::Disk(disk));
        assert_eq!(section.title, "Disk Usage (/home)");
        assert_eq!(section.kind, SectionKind::Disk);
    }

    #[test]
    fn plain_section_layout() {
        let section = GraphSection::from_sample(&MetricSample::Memory(MemorySample {
            total: 2048,
            used:  1024,
            free:  1024,
        }));
        let text = section.render(&Theme::plain(), 3);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "Memory Usage");
        assert_eq!(lines[2], "Used: 1.0 KB, Total: 2.0 KB");
        assert_eq!(lines.len(), 3 + 3);
        assert!(text.ends_with('\n'));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn cpu_section_graphs_every_core() {
        let sample = MetricSample::Cpu(CpuSample::PerCore(vec![10.0, 20.0, 30.0]));
        let section = GraphSection::from_sample(&sample);
        assert_eq!(section.series.len(), 3);
        assert!(section.usage.is_none());
        assert!(!section.render(&Theme::plain(), 5).contains("Used:"));
    }

    #[test]
    fn aggregate_readout() {
        let line = cpu_readout(&CpuSample::Aggregate(12.346), &Theme::plain());
        assert_eq!(line, "CPU Usage: 12.35%\n");
    }

    #[test]
    fn per_core_readout() {
        let line = cpu_readout(&CpuSample::PerCore(vec![10.0, 30.0]), &Theme::plain());
        assert_eq!(line, "CPU Usage: 20.00% | 10.00% 30.00%\n");
    }

    #[test]
    fn memory_listing_lines() {
        let mem = MemorySample { total: 8 * GIB, used: 3 * GIB, free: GIB / 2 };
        assert_eq!(
            memory_listing(&mem, &Theme::plain()),
            "Total Memory: 8.00 GB\nFree Memory: 0.50 GB\nUsed Memory: 3.00 GB\n"
        );
    }

    #[test]
    fn disk_listing_block() {
        let disk = DiskSample {
            mount: "/".into(),
            usage: DiskUsage { total: 4 * GIB, used: GIB, free: 3 * GIB },
        };
        assert_eq!(
            disk_listing(&disk, &Theme::plain()),
            "Disk: /\nTotal Space: 4.00 GB\nFree Space: 3.00 GB\nUsed Space: 1.00 GB\n\n"
        );
    }
}
