use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::stats::{NameReport, RunSummary};
use crate::utils::format_number;

/// Writes the flat unique-name report to the output target.
pub fn write_report(path: &Path, report: &NameReport) -> Result<()> {
    let start_time = Instant::now();
    info!(action = "start", component = "report_writer", path = ?path, "Writing unique-name report");

    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {:?}", path))?;
    let mut out = BufWriter::new(file);

    write!(out, "Unique FQDNs: {}", report.unique_hosts)?;
    write!(out, "\nUnique 2DLs: {}", report.unique_second_level)?;
    write!(out, "\nUnique TDLs: {}", report.unique_top_level)?;
    out.flush()
        .with_context(|| format!("Failed to write output file {:?}", path))?;

    let write_time = start_time.elapsed();
    info!(
        action = "complete",
        component = "report_writer",
        duration_ms = write_time.as_millis(),
        "Report written"
    );
    Ok(())
}

pub fn print_summary(summary: &RunSummary, output: &Path) {
    let report = &summary.report;

    println!(
        "Found {} FQDNs, {} unique FQDNs, {} unique 2LDs, and {} unique TLDs",
        format_number(report.total_fqdns),
        format_number(report.unique_hosts.len() as u64),
        format_number(report.unique_second_level.len() as u64),
        format_number(report.unique_top_level.len() as u64)
    );
    println!(
        "Unique FQDNs, 2LDs, and TLDs written to: {}",
        output.display()
    );
    println!("Time to complete: {} msec", summary.elapsed_ms);
}
