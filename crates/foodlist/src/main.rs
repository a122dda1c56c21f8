mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use foodlist_core::ListController;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose, cli.global.quiet);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8, quiet: bool) {
    let filter = match (quiet, verbosity) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut global = cli.global;
    match cli.command {
        // Config commands don't need the catalog
        Command::Config(args) => commands::config_cmd::handle(args, &global),

        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "foodlist", &mut std::io::stdout());
            Ok(())
        }

        // Everything else talks to the collection
        cmd => {
            let cfg = config::load_config()?;
            config::apply_defaults(&mut global, &cfg);
            let catalog_config = config::resolve_catalog_config(&cfg, &global)?;
            let catalog = ListController::from_config(&catalog_config)?;

            tracing::debug!(command = ?cmd, url = %catalog_config.url, "dispatching command");
            commands::dispatch(cmd, &catalog, &global).await
        }
    }
}
