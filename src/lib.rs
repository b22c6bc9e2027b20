pub mod args;
pub mod classify;
pub mod process;
pub mod report;
pub mod set;
pub mod stats;
pub mod utils;

pub use args::Args;
pub use classify::classify;
pub use process::process_names;
pub use set::{SetKind, UniqueSet};
pub use stats::{NameReport, RunSummary};
