//! `saree-admin` entry point.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use saree_admin::app;
use saree_admin::config::AdminSettings;
use saree_admin::domain::ErrorBroadcast;
use saree_admin::inbound::cli::{self, AdminContext, Cli, CliError, ConsoleNotifier};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let args = Cli::parse();
    let settings = app::apply_cli_overrides(AdminSettings::load()?, &args);
    init_tracing(settings.log_json);

    let context = app::bootstrap(&settings, ErrorBroadcast::global(), Arc::new(ConsoleNotifier))?;
    if args.command.requires_session() {
        context.session.boot().await;
    }

    let mut stdout = io::stdout().lock();
    match cli::run(args.command, &context, &mut stdout).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(error) => {
            report(&context, &error).wrap_err("failed to report command error")?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_tracing(json: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

/// Write the server's last error and the command failure to stderr.
///
/// View failures were already reported through the notifier.
fn report(context: &AdminContext, error: &CliError) -> io::Result<()> {
    let mut stderr = io::stderr().lock();
    if let Some(message) = context.errors.current().message {
        writeln!(stderr, "server: {message}")?;
    }
    if !matches!(error, CliError::View(_)) {
        writeln!(stderr, "error: {error}")?;
    }
    Ok(())
}
