use crate::set::{SetKind, UniqueSet};

/// Accumulated classification results for one pass over an input file.
///
/// Built empty per invocation and handed to the reporting stage read-only;
/// nothing is shared across runs.
#[derive(Debug)]
pub struct NameReport {
    /// Total qualifying FQDN lines, duplicates included.
    pub total_fqdns: u64,
    pub unique_hosts: UniqueSet,
    pub unique_second_level: UniqueSet,
    pub unique_top_level: UniqueSet,
}

impl NameReport {
    pub fn new(kind: SetKind) -> Self {
        NameReport {
            total_fqdns: 0,
            unique_hosts: UniqueSet::new(kind),
            unique_second_level: UniqueSet::new(kind),
            unique_top_level: UniqueSet::new(kind),
        }
    }
}

#[derive(Debug)]
pub struct RunSummary {
    pub report: NameReport,
    pub elapsed_ms: u128,
}
