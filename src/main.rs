//! Portacode - portable executable bundles
//!
//! Command line front end for storing, validating and exporting bundles.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

/// Environment variable holding a `tracing` filter directive
const LOG_ENV: &str = "PORTACODE_LOG";

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let _ = miette::set_hook(Box::new(|_| {
        Box::new(miette::MietteHandlerOpts::new().wrap_lines(false).build())
    }));

    let result = match cli.command {
        Commands::Create(args) => commands::create::run(cli.store, args),
        Commands::Show(args) => commands::show::run(cli.store, args),
        Commands::List => commands::list::run(cli.store),
        Commands::Validate(args) => commands::validate::run(cli.store, args),
        Commands::CheckWorkdir(args) => commands::check_workdir::run(cli.store, args),
        Commands::SetExecutable(args) => commands::set_executable::run(cli.store, args),
        Commands::Export(args) => commands::export::run(cli.store, args),
        Commands::Delete(args) => commands::delete::run(cli.store, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {:?}", miette::Report::new(e));
        std::process::exit(1);
    }
}
