//! `contacts` commands.

use std::io::Write;

use clap::Subcommand;
use pagination::PageRequest;

use crate::domain::ContactStatus;
use crate::domain::views::ContactsView;

use super::{AdminContext, CliError, render};

/// `contacts` actions.
#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// List one page of enquiries.
    List {
        /// `pending`, `in-progress` or `resolved`; omitted shows all.
        #[arg(long)]
        status: Option<ContactStatus>,
        /// Fragment matched by the server.
        #[arg(long)]
        search: Option<String>,
        /// One-based page number.
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Show one enquiry in full.
    Show {
        /// Enquiry identifier.
        id: String,
    },
    /// Move an enquiry to another handling state.
    SetStatus {
        /// Enquiry identifier.
        id: String,
        /// `pending`, `in-progress` or `resolved`.
        status: ContactStatus,
    },
    /// Replace the internal note.
    Note {
        /// Enquiry identifier.
        id: String,
        /// Note text.
        text: String,
    },
}

pub(super) async fn run(
    action: ContactCommand,
    context: &AdminContext,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut view = ContactsView::new(context.contacts.clone(), context.notifier.clone());
    match action {
        ContactCommand::List {
            status,
            search,
            page,
        } => {
            view.set_status(status);
            if let Some(search) = search {
                view.set_search(search);
            }
            view.set_page(PageRequest::first().with_page(page)?);
            view.load().await?;
            render::contacts(out, view.list().items())?;
            render::pagination(out, view.list().pagination())?;
        }
        ContactCommand::Show { id } => {
            let contact = view.view_details(&id).await?;
            render::contact(out, contact)?;
        }
        ContactCommand::SetStatus { id, status } => {
            view.update_status(&id, status).await?;
            writeln!(out, "{id} is now {status}")?;
        }
        ContactCommand::Note { id, text } => {
            view.update_note(&id, &text).await?;
            writeln!(out, "note saved for {id}")?;
        }
    }
    Ok(())
}
