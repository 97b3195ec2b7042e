//! metric-batch CLI entry point.

use metric_batch::cli::{self, Cli};
use metric_batch::core::Result;

fn main() -> Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Execute the command
    cli::execute(&cli)
}
