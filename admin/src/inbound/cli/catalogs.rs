//! `catalogs` commands, including saree membership.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::domain::views::CatalogsView;
use crate::domain::{CatalogFields, CatalogStatus};

use super::image::read_optional;
use super::{AdminContext, CliError, render};

/// `catalogs` actions.
#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    /// List catalogs.
    List {
        /// Show the sarees of this catalog. Repeatable.
        #[arg(long, value_name = "id")]
        expand: Vec<String>,
    },
    /// Add a catalog.
    Create(CatalogArgs),
    /// Change a catalog. Omitted fields keep their current value.
    Update {
        /// Catalog identifier.
        id: String,
        #[command(flatten)]
        fields: CatalogArgs,
    },
    /// Delete a catalog.
    Delete {
        /// Catalog identifier.
        id: String,
    },
    /// Put a saree into a catalog.
    AddSaree {
        /// Catalog identifier.
        catalog: String,
        /// Saree identifier.
        saree: String,
    },
    /// Take a saree out of a catalog.
    RemoveSaree {
        /// Catalog identifier.
        catalog: String,
        /// Saree identifier.
        saree: String,
    },
}

/// Catalog form fields.
#[derive(Debug, Args)]
pub struct CatalogArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// `draft`, `active` or `archived`.
    #[arg(long)]
    status: Option<CatalogStatus>,
    /// Cover image to upload.
    #[arg(long, value_name = "path")]
    image: Option<PathBuf>,
}

impl CatalogArgs {
    fn apply(self, form: &mut CatalogFields) -> Result<(), CliError> {
        if self.name.is_some() {
            form.name = self.name;
        }
        if self.description.is_some() {
            form.description = self.description;
        }
        if self.status.is_some() {
            form.status = self.status;
        }
        if let Some(image) = read_optional(self.image)? {
            form.image = Some(image);
        }
        Ok(())
    }
}

pub(super) async fn run(
    action: CatalogCommand,
    context: &AdminContext,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut view = CatalogsView::new(
        context.catalogs.clone(),
        context.sarees.clone(),
        context.notifier.clone(),
    );
    view.load().await?;
    match action {
        CatalogCommand::List { expand } => {
            for id in &expand {
                if !view.is_expanded(id) {
                    view.toggle_expanded(id);
                }
            }
            let rows = view
                .list()
                .items()
                .iter()
                .map(|catalog| (catalog, view.is_expanded(&catalog.id)));
            render::catalogs(out, rows)?;
        }
        CatalogCommand::Create(args) => {
            let mut form = view.begin_create();
            args.apply(&mut form)?;
            let catalog = view.submit(form).await?;
            writeln!(out, "created {} ({})", catalog.name, catalog.id)?;
        }
        CatalogCommand::Update { id, fields } => {
            let mut form = view.begin_edit(&id)?;
            fields.apply(&mut form)?;
            let catalog = view.submit(form).await?;
            writeln!(out, "updated {} ({})", catalog.name, catalog.id)?;
        }
        CatalogCommand::Delete { id } => {
            view.delete(&id).await?;
            writeln!(out, "deleted {id}")?;
        }
        CatalogCommand::AddSaree { catalog, saree } => {
            view.add_saree(&catalog, &saree).await?;
            let rows = view
                .list()
                .get(&catalog)
                .map(|catalog| (catalog, true));
            render::catalogs(out, rows)?;
        }
        CatalogCommand::RemoveSaree { catalog, saree } => {
            view.remove_saree(&catalog, &saree).await?;
            let rows = view
                .list()
                .get(&catalog)
                .map(|catalog| (catalog, true));
            render::catalogs(out, rows)?;
        }
    }
    Ok(())
}
