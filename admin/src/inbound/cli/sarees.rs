//! `sarees` commands.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::domain::views::{SareeFilter, SareeForm, SareesView};

use super::image::read_optional;
use super::{AdminContext, CliError, render};

/// `sarees` actions.
#[derive(Debug, Subcommand)]
pub enum SareeCommand {
    /// List sarees.
    List {
        /// Case-insensitive name fragment.
        #[arg(long)]
        search: Option<String>,
        /// Catalog name; `all` shows every saree.
        #[arg(long, value_name = "name")]
        catalog: Option<String>,
    },
    /// Add a saree.
    Create(SareeArgs),
    /// Change a saree. Omitted fields keep their current value.
    Update {
        /// Saree identifier.
        id: String,
        #[command(flatten)]
        fields: SareeArgs,
    },
    /// Delete a saree.
    Delete {
        /// Saree identifier.
        id: String,
    },
}

/// Saree form fields.
#[derive(Debug, Args)]
pub struct SareeArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// Price in rupees.
    #[arg(long)]
    price: Option<f64>,
    /// Catalog name the saree belongs to.
    #[arg(long, value_name = "catalog")]
    category: Option<String>,
    #[arg(long)]
    fabric: Option<String>,
    #[arg(long)]
    color: Option<String>,
    #[arg(long)]
    work: Option<String>,
    /// Image file to upload.
    #[arg(long, value_name = "path")]
    image: Option<PathBuf>,
}

impl SareeArgs {
    fn into_form(self) -> Result<SareeForm, CliError> {
        Ok(SareeForm {
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            fabric: self.fabric,
            color: self.color,
            work: self.work,
            image: read_optional(self.image)?,
        })
    }
}

pub(super) async fn run(
    action: SareeCommand,
    context: &AdminContext,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut view = SareesView::new(
        context.sarees.clone(),
        context.catalogs.clone(),
        context.notifier.clone(),
    );
    view.load().await?;
    match action {
        SareeCommand::List { search, catalog } => {
            view.set_filter(SareeFilter {
                search: search.unwrap_or_default(),
                catalog,
            });
            let rows = view
                .visible()
                .into_iter()
                .map(|saree| (saree, view.catalog_name_of(saree)));
            render::sarees(out, rows)?;
        }
        SareeCommand::Create(args) => {
            let form = view.begin_create().merged(args.into_form()?);
            let saree = view.submit(form).await?;
            writeln!(out, "created {} ({})", saree.name, saree.id)?;
        }
        SareeCommand::Update { id, fields } => {
            let form = view.begin_edit(&id)?.merged(fields.into_form()?);
            let saree = view.submit(form).await?;
            writeln!(out, "updated {} ({})", saree.name, saree.id)?;
        }
        SareeCommand::Delete { id } => {
            view.delete(&id).await?;
            writeln!(out, "deleted {id}")?;
        }
    }
    Ok(())
}
