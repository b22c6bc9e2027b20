use clap::Parser;
use tracing::error;

use fqdnstat::{process, report, utils, Args};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);

    utils::validate_args(&args)?;

    match process::process_names(&args) {
        Ok(summary) => {
            report::print_summary(&summary, &args.output);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Processing failed");
            std::process::exit(1);
        }
    }
}
