use clap::Parser;

use measure::cli::{init_tracing, run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    run(&cli.command.unwrap_or_default())
}
