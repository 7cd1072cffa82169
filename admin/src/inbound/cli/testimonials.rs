//! `testimonials` commands.

use std::io::Write;

use clap::{Args, Subcommand};

use crate::domain::TestimonialFields;
use crate::domain::views::{ActivityFilter, FeaturedFilter, TestimonialFilter, TestimonialsView};

use super::{AdminContext, CliError, render};

/// `testimonials` actions.
#[derive(Debug, Subcommand)]
pub enum TestimonialCommand {
    /// List testimonials.
    List {
        /// Fragment of the name or review text.
        #[arg(long)]
        search: Option<String>,
        /// `all`, `active` or `inactive`.
        #[arg(long, default_value = "all")]
        status: ActivityFilter,
        /// `all`, `featured` or `not-featured`.
        #[arg(long, default_value = "all")]
        featured: FeaturedFilter,
    },
    /// Add a testimonial. The rating defaults to five stars.
    Create(TestimonialArgs),
    /// Change a testimonial. Omitted fields keep their current value.
    Update {
        /// Testimonial identifier.
        id: String,
        #[command(flatten)]
        fields: TestimonialArgs,
    },
    /// Delete a testimonial.
    Delete {
        /// Testimonial identifier.
        id: String,
    },
}

/// Testimonial form fields.
#[derive(Debug, Args)]
pub struct TestimonialArgs {
    /// Customer name.
    #[arg(long)]
    name: Option<String>,
    /// Testimonial text.
    #[arg(long)]
    review: Option<String>,
    /// Stars, 1 to 5.
    #[arg(long)]
    rating: Option<u8>,
    #[arg(long, value_name = "true|false")]
    featured: Option<bool>,
    /// Published on the storefront.
    #[arg(long, value_name = "true|false")]
    active: Option<bool>,
}

impl TestimonialArgs {
    fn apply(self, form: &mut TestimonialFields) {
        if self.name.is_some() {
            form.name = self.name;
        }
        if self.review.is_some() {
            form.review = self.review;
        }
        if self.rating.is_some() {
            form.rating = self.rating;
        }
        if self.featured.is_some() {
            form.is_featured = self.featured;
        }
        if self.active.is_some() {
            form.is_active = self.active;
        }
    }
}

pub(super) async fn run(
    action: TestimonialCommand,
    context: &AdminContext,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut view = TestimonialsView::new(context.testimonials.clone(), context.notifier.clone());
    view.load().await?;
    match action {
        TestimonialCommand::List {
            search,
            status,
            featured,
        } => {
            view.set_filter(TestimonialFilter {
                search: search.unwrap_or_default(),
                activity: status,
                featured,
            });
            render::testimonials(out, view.visible())?;
        }
        TestimonialCommand::Create(args) => {
            let mut form = view.begin_create();
            args.apply(&mut form);
            let testimonial = view.submit(form).await?;
            writeln!(out, "created testimonial from {} ({})", testimonial.name, testimonial.id)?;
        }
        TestimonialCommand::Update { id, fields } => {
            let mut form = view.begin_edit(&id)?;
            fields.apply(&mut form);
            let testimonial = view.submit(form).await?;
            writeln!(out, "updated testimonial from {} ({})", testimonial.name, testimonial.id)?;
        }
        TestimonialCommand::Delete { id } => {
            view.delete(&id).await?;
            writeln!(out, "deleted {id}")?;
        }
    }
    Ok(())
}
