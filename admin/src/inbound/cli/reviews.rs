//! `reviews` commands.

use std::io::Write;

use clap::Subcommand;
use pagination::PageRequest;

use crate::domain::views::{ReviewStatusFilter, ReviewsView};

use super::{AdminContext, CliError, render};

/// `reviews` actions.
#[derive(Debug, Subcommand)]
pub enum ReviewCommand {
    /// List one page of reviews.
    List {
        /// `all`, `approved` or `pending`.
        #[arg(long, default_value = "all")]
        status: ReviewStatusFilter,
        /// One-based page number.
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Fragment of the name, email, product or text.
        #[arg(long)]
        search: Option<String>,
    },
    /// Approve a review for display.
    Approve {
        /// Review identifier.
        id: String,
    },
    /// Withdraw approval.
    Reject {
        /// Review identifier.
        id: String,
    },
    /// Flip the featured flag.
    Feature {
        /// Review identifier.
        id: String,
    },
    /// Delete a review.
    Delete {
        /// Review identifier.
        id: String,
    },
}

pub(super) async fn run(
    action: ReviewCommand,
    context: &AdminContext,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut view = ReviewsView::new(context.reviews.clone(), context.notifier.clone());
    match action {
        ReviewCommand::List {
            status,
            page,
            search,
        } => {
            view.set_status(status);
            view.set_search(search.unwrap_or_default());
            view.set_page(PageRequest::first().with_page(page)?);
            view.load().await?;
            render::reviews(out, view.visible())?;
            render::pagination(out, view.list().pagination())?;
        }
        ReviewCommand::Approve { id } => {
            view.set_approved(&id, true).await?;
            writeln!(out, "approved {id}")?;
        }
        ReviewCommand::Reject { id } => {
            view.set_approved(&id, false).await?;
            writeln!(out, "rejected {id}")?;
        }
        ReviewCommand::Feature { id } => {
            view.toggle_featured(&id).await?;
            writeln!(out, "toggled featured for {id}")?;
        }
        ReviewCommand::Delete { id } => {
            view.delete(&id).await?;
            writeln!(out, "deleted {id}")?;
        }
    }
    Ok(())
}
