//! Formatter: turns samples into the text glance prints.
//!
//! - [`format`]: byte sizes and percentages
//! - [`graph`]: fixed-height ASCII line charts
//! - [`report`]: complete, optionally coloured output blocks

pub mod format;
pub mod graph;
pub mod report;

pub use format::{format_byte_size, format_gib, format_percent};
pub use graph::render_graph;
pub use report::{cpu_readout, disk_listing, memory_listing, GraphSection, SectionKind, UsageLine};
