mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lumo_core::Controller;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Shell completions generation needs no credential
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "lumo", &mut std::io::stdout());
            Ok(())
        }

        // Reserved color controls: recognized and acknowledged, but no
        // request is ever constructed -- they always succeed.
        Command::Hue(_) => acknowledge_reserved("hue", &cli.global),
        Command::Kel(_) => acknowledge_reserved("kel", &cli.global),
        Command::Sat(_) => acknowledge_reserved("sat", &cli.global),

        // Everything else talks to the service
        cmd => {
            let controller_config = config::resolve(&cli.global)?;
            let controller = Controller::new(&controller_config)?;

            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &controller, &cli.global).await
        }
    }
}

fn acknowledge_reserved(name: &str, global: &cli::GlobalOpts) -> Result<(), CliError> {
    if !global.quiet {
        eprintln!("{name}: not implemented yet; no request was sent");
    }
    Ok(())
}
