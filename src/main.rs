use clap::Parser;
use tracing_subscriber::EnvFilter;

mod aligner;
mod cli;
mod core;
mod parsing;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("exomap=debug,info")
    } else {
        EnvFilter::new("exomap=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Align(args) => {
            cli::align::run(&args, cli.format, cli.verbose)?;
        }
        cli::Commands::Hits(args) => {
            cli::hits::run(&args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
