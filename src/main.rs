use clap::Parser;
use gridfit::cli::Cli;
use gridfit::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose)?;

    let stdout = std::io::stdout();
    gridfit::cli::run(&cli, &mut stdout.lock())
}
