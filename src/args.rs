use clap::Parser;
use std::path::PathBuf;

use crate::set::SetKind;

#[derive(Parser, Debug)]
#[command(
    name = "fqdnstat",
    about = "Classify domain names as FQDNs, 2LDs, and TLDs and report the unique members of each",
    version,
    long_about = None
)]
pub struct Args {
    /// Keep unique names in first-insertion order
    #[arg(short = 'd', conflicts_with = "sorted")]
    pub insertion: bool,

    /// Keep unique names in ascending sorted order
    #[arg(short = 's')]
    pub sorted: bool,

    /// Input file with one domain name per line
    #[arg(short, long, default_value = "names.txt")]
    pub input: PathBuf,

    /// Output file for the unique-name report
    #[arg(short, long, default_value = "results.txt")]
    pub output: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn set_kind(&self) -> SetKind {
        if self.sorted {
            SetKind::Sorted
        } else {
            SetKind::Insertion
        }
    }
}
