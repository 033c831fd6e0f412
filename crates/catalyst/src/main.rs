mod cli;
mod error;
mod routes;
mod tools;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use catalyst_config::Settings;
use catalyst_core::Gateway;

use crate::cli::{Cli, Command, GlobalOpts};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

// stdout belongs to the MCP transport; logs always go to stderr.
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
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "catalyst", &mut std::io::stdout());
            Ok(())
        }

        Command::Mcp => {
            let settings = load_settings(&cli.global)?;
            let gateway = build_gateway(&settings)?;
            tools::serve_stdio(gateway).await
        }

        Command::Serve(args) => {
            let mut settings = load_settings(&cli.global)?;
            if let Some(listen) = args.listen {
                settings.listen = listen;
            }
            let addr = settings.listen_addr()?;
            let gateway = build_gateway(&settings)?;
            routes::serve(gateway, addr).await
        }
    }
}

/// Layered settings with command-line flags applied last.
fn load_settings(global: &GlobalOpts) -> Result<Settings, CliError> {
    let mut settings = catalyst_config::load_settings(global.config.as_deref())?;
    if let Some(ref url) = global.base_url {
        settings.api_base_url.clone_from(url);
    }
    if global.insecure {
        settings.insecure = true;
    }
    if let Some(timeout) = global.timeout {
        settings.timeout = timeout;
    }
    Ok(settings)
}

fn build_gateway(settings: &Settings) -> Result<Arc<Gateway>, CliError> {
    let config = settings.to_gateway_config()?;
    tracing::debug!(base_url = %config.base_url, tls = ?config.tls, "connecting to Catalyst Center");
    Ok(Arc::new(Gateway::new(&config)?))
}
