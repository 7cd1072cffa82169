//! `settings` commands.

use std::io::Write;

use clap::{Args, Subcommand};

use crate::domain::StoreSettings;
use crate::domain::views::SettingsView;

use super::{AdminContext, CliError, render};

/// `settings` actions.
#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Show the current settings.
    Show,
    /// Change settings. Omitted fields keep their current value.
    Set(SettingsArgs),
}

/// Editable store settings.
#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[arg(long)]
    store_name: Option<String>,
    #[arg(long)]
    tagline: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    address: Option<String>,
    /// WhatsApp number shown to customers.
    #[arg(long)]
    whatsapp: Option<String>,
}

impl SettingsArgs {
    fn apply(self, draft: &mut StoreSettings) {
        let fields = [
            (self.store_name, &mut draft.store_name),
            (self.tagline, &mut draft.tagline),
            (self.email, &mut draft.email),
            (self.phone, &mut draft.phone),
            (self.address, &mut draft.address),
            (self.whatsapp, &mut draft.whatsapp),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

pub(super) async fn run(
    action: SettingsCommand,
    context: &AdminContext,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut view = SettingsView::new(context.settings.clone(), context.notifier.clone());
    view.load().await?;
    match action {
        SettingsCommand::Show => render::settings(out, view.saved())?,
        SettingsCommand::Set(args) => {
            view.edit(|draft| args.apply(draft));
            if !view.is_dirty() {
                writeln!(out, "settings unchanged")?;
                return Ok(());
            }
            let saved = view.save().await?;
            render::settings(out, saved)?;
        }
    }
    Ok(())
}
