//! Command-line surface of the admin client.
//!
//! Every resource command requires a session restored at boot; only
//! `login` and `logout` run signed out. Command output goes to the writer
//! passed in (stdout in the binary) and notices go to the notifier.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pagination::PageRequestError;
use thiserror::Error;

use crate::domain::views::ViewError;

mod auth;
mod catalogs;
mod collections;
mod console;
mod context;
mod contacts;
mod dashboard;
mod image;
mod render;
mod reviews;
mod sarees;
mod settings;
mod testimonials;

pub use console::ConsoleNotifier;
pub use context::AdminContext;

/// `saree-admin` arguments.
#[derive(Debug, Parser)]
#[command(
    name = "saree-admin",
    about = "Back-office client for the saree storefront",
    version
)]
pub struct Cli {
    /// Root of the admin REST API. Overrides `SAREE_ADMIN_BASE_URL`.
    #[arg(long = "base-url", value_name = "url", global = true)]
    pub base_url: Option<String>,
    /// Directory holding the bearer token. Overrides `SAREE_ADMIN_TOKEN_DIR`.
    #[arg(long = "token-dir", value_name = "path", global = true)]
    pub token_dir: Option<PathBuf>,
    /// Action to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level actions.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and store the issued token.
    Login(auth::LoginArgs),
    /// Forget the stored token.
    Logout,
    /// Show the signed-in admin.
    Whoami,
    /// Edit the signed-in admin's profile.
    Profile {
        #[command(subcommand)]
        action: auth::ProfileCommand,
    },
    /// Show store-wide counters.
    Dashboard,
    /// Manage the saree inventory.
    Sarees {
        #[command(subcommand)]
        action: sarees::SareeCommand,
    },
    /// Manage collections.
    Collections {
        #[command(subcommand)]
        action: collections::CollectionCommand,
    },
    /// Manage catalogs and their sarees.
    Catalogs {
        #[command(subcommand)]
        action: catalogs::CatalogCommand,
    },
    /// Manage testimonials.
    Testimonials {
        #[command(subcommand)]
        action: testimonials::TestimonialCommand,
    },
    /// Moderate customer reviews.
    Reviews {
        #[command(subcommand)]
        action: reviews::ReviewCommand,
    },
    /// Handle contact enquiries.
    Contacts {
        #[command(subcommand)]
        action: contacts::ContactCommand,
    },
    /// Show or change store settings.
    Settings {
        #[command(subcommand)]
        action: settings::SettingsCommand,
    },
}

impl Command {
    /// Whether the command needs an authenticated session.
    pub const fn requires_session(&self) -> bool {
        !matches!(self, Self::Login(_) | Self::Logout)
    }
}

/// Reasons a command did not complete.
#[derive(Debug, Error)]
pub enum CliError {
    /// A protected command ran without a session.
    #[error("login required")]
    LoginRequired,
    /// The server refused the credentials or returned no token.
    #[error("login failed")]
    LoginFailed,
    /// The view rejected or failed the action.
    #[error(transparent)]
    View(#[from] ViewError),
    /// A page argument is out of range.
    #[error(transparent)]
    Page(#[from] PageRequestError),
    /// An image file could not be read.
    #[error("could not read image {path}: {source}")]
    ReadImage {
        /// Path given on the command line.
        path: PathBuf,
        /// Underlying failure.
        source: io::Error,
    },
    /// Output could not be written.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Run `command` against a booted context.
///
/// # Errors
///
/// Returns [`CliError::LoginRequired`] for protected commands without a
/// session, otherwise the failure of the command itself.
pub async fn run(
    command: Command,
    context: &AdminContext,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if command.requires_session() && !context.session.snapshot().is_authenticated {
        return Err(CliError::LoginRequired);
    }
    match command {
        Command::Login(args) => auth::login(args, context, out).await,
        Command::Logout => auth::logout(context, out),
        Command::Whoami => auth::whoami(context, out),
        Command::Profile { action } => auth::profile(action, context, out).await,
        Command::Dashboard => dashboard::run(context, out).await,
        Command::Sarees { action } => sarees::run(action, context, out).await,
        Command::Collections { action } => collections::run(action, context, out).await,
        Command::Catalogs { action } => catalogs::run(action, context, out).await,
        Command::Testimonials { action } => testimonials::run(action, context, out).await,
        Command::Reviews { action } => reviews::run(action, context, out).await,
        Command::Contacts { action } => contacts::run(action, context, out).await,
        Command::Settings { action } => settings::run(action, context, out).await,
    }
}

#[cfg(test)]
mod tests;
