use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::stats::RunSummary;
use crate::{classify, report, Args};

/// Runs the full classify-and-report phase: read the name file, classify
/// every line, write the report, and measure the wall-clock duration of
/// the whole phase.
pub fn process_names(args: &Args) -> Result<RunSummary> {
    let start_time = Instant::now();
    info!(
        action = "start",
        component = "name_processing",
        "Starting domain name processing"
    );

    let lines = read_name_file(&args.input)?;
    let report = classify::classify(lines, args.set_kind());

    info!(
        action = "classify",
        component = "name_processing",
        total_fqdns = report.total_fqdns,
        unique_hosts = report.unique_hosts.len(),
        unique_second_level = report.unique_second_level.len(),
        unique_top_level = report.unique_top_level.len(),
        "Classification completed"
    );

    report::write_report(&args.output, &report)?;

    let elapsed = start_time.elapsed();
    info!(
        action = "complete",
        component = "name_processing",
        duration_ms = elapsed.as_millis(),
        "Processing completed"
    );

    Ok(RunSummary {
        report,
        elapsed_ms: elapsed.as_millis(),
    })
}

fn read_name_file(path: &Path) -> Result<Vec<String>> {
    let start_time = Instant::now();
    info!(action = "start", component = "name_reader", path = ?path, "Reading domain name file");

    let file =
        File::open(path).with_context(|| format!("Failed to open input file {:?}", path))?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<io::Result<Vec<String>>>()
        .with_context(|| format!("Failed to read input file {:?}", path))?;

    let read_time = start_time.elapsed();
    info!(
        action = "complete",
        component = "name_reader",
        line_count = lines.len(),
        duration_ms = read_time.as_millis(),
        "Read domain name file"
    );
    Ok(lines)
}
