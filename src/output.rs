//! CLI output formatting.
//!
//! Output is information-first: each generated file leads with its
//! positional index and name, with geometry shown on indented context lines.
//!
//! ```text
//! Slices (3 panels)
//! 001 pano_slice_1.jpg
//!     Columns: 0..800 (800px)
//! 002 pano_slice_2.jpg
//!     Columns: 800..1600 (800px)
//! 003 pano_slice_3.jpg
//!     Columns: 1600..2400 (800px)
//!
//! Overview
//!     pano_overview.jpg
//!     Canvas: 2640x3300, border 120px, offset (120, 1150)
//! ```
//!
//! [`format_split_output`] is pure and returns lines for testability;
//! [`print_split_output`] writes them to stdout.

use crate::split::SplitReport;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: u32) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Format the result of a split run.
pub fn format_split_output(report: &SplitReport) -> Vec<String> {
    let mut lines = vec![format!("Slices ({} panels)", report.mode.panel_count())];

    for slice in &report.slices {
        lines.push(format!(
            "{} {}",
            format_index(slice.index),
            file_name(&slice.path)
        ));
        lines.push(format!(
            "{}Columns: {}..{} ({}px)",
            indent(1),
            slice.columns.left,
            slice.columns.right,
            slice.columns.width()
        ));
    }

    let g = &report.overview.geometry;
    lines.push(String::new());
    lines.push("Overview".to_string());
    lines.push(format!("{}{}", indent(1), file_name(&report.overview.path)));
    lines.push(format!(
        "{}Canvas: {}x{}, border {}px, offset ({}, {})",
        indent(1),
        g.canvas_width,
        g.canvas_height,
        g.border,
        g.offset.x,
        g.offset.y
    ));

    lines
}

pub fn print_split_output(report: &SplitReport) {
    for line in format_split_output(report) {
        println!("{}", line);
    }
}
