//! `collections` commands.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::domain::CollectionFields;
use crate::domain::views::CollectionsView;

use super::image::read_optional;
use super::{AdminContext, CliError, render};

/// `collections` actions.
#[derive(Debug, Subcommand)]
pub enum CollectionCommand {
    /// List collections.
    List,
    /// Add a collection.
    Create(CollectionArgs),
    /// Change a collection. Omitted fields keep their current value.
    Update {
        /// Collection identifier.
        id: String,
        #[command(flatten)]
        fields: CollectionArgs,
    },
    /// Flip the featured flag.
    Feature {
        /// Collection identifier.
        id: String,
    },
    /// Delete a collection.
    Delete {
        /// Collection identifier.
        id: String,
    },
}

/// Collection form fields.
#[derive(Debug, Args)]
pub struct CollectionArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// Show on the storefront's featured shelf.
    #[arg(long, value_name = "true|false")]
    featured: Option<bool>,
    /// Image file to upload.
    #[arg(long, value_name = "path")]
    image: Option<PathBuf>,
}

impl CollectionArgs {
    fn apply(self, form: &mut CollectionFields) -> Result<(), CliError> {
        if self.name.is_some() {
            form.name = self.name;
        }
        if self.description.is_some() {
            form.description = self.description;
        }
        if self.featured.is_some() {
            form.featured = self.featured;
        }
        if let Some(image) = read_optional(self.image)? {
            form.image = Some(image);
        }
        Ok(())
    }
}

pub(super) async fn run(
    action: CollectionCommand,
    context: &AdminContext,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut view = CollectionsView::new(context.collections.clone(), context.notifier.clone());
    view.load().await?;
    match action {
        CollectionCommand::List => render::collections(out, view.list().items())?,
        CollectionCommand::Create(args) => {
            let mut form = view.begin_create();
            args.apply(&mut form)?;
            let collection = view.submit(form).await?;
            writeln!(out, "created {} ({})", collection.name, collection.id)?;
        }
        CollectionCommand::Update { id, fields } => {
            let mut form = view.begin_edit(&id)?;
            fields.apply(&mut form)?;
            let collection = view.submit(form).await?;
            writeln!(out, "updated {} ({})", collection.name, collection.id)?;
        }
        CollectionCommand::Feature { id } => {
            let collection = view.toggle_featured(&id).await?;
            let state = if collection.featured { "featured" } else { "not featured" };
            writeln!(out, "{} is now {state}", collection.name)?;
        }
        CollectionCommand::Delete { id } => {
            view.delete(&id).await?;
            writeln!(out, "deleted {id}")?;
        }
    }
    Ok(())
}
