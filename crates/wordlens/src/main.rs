mod cli;
mod commands;
mod input;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing; logs go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = input::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Keywords { count, input, json } => {
            commands::keywords::run(&config, count, &input, json)
        }
        Commands::Rank { input, json } => commands::rank::run(&input, json),
        Commands::Analyze { input, json } => commands::analyze::run(config, &input, json),
        Commands::Languages => commands::languages::run(),
        Commands::About => commands::about::run(),
        Commands::Version => commands::version::run(),
    }
}
