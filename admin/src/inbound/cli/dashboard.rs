//! `dashboard` command.

use std::io::Write;

use crate::domain::views::DashboardView;

use super::{AdminContext, CliError, render};

pub(super) async fn run(context: &AdminContext, out: &mut dyn Write) -> Result<(), CliError> {
    let mut view = DashboardView::new(context.dashboard.clone(), context.notifier.clone());
    let stats = view.load().await?;
    render::dashboard(out, stats)?;
    Ok(())
}
