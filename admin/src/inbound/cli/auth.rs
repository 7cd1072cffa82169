//! Sign-in, sign-out and profile commands.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::domain::ProfileUpdate;
use crate::domain::views::ProfileView;

use super::image::read_optional;
use super::{AdminContext, CliError, render};

/// `login` arguments.
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Admin email address.
    #[arg(long, value_name = "email")]
    email: String,
    /// Admin password.
    #[arg(long, value_name = "password")]
    password: String,
}

/// `profile` actions.
#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Change profile fields. Omitted fields are left untouched.
    Update(ProfileArgs),
}

/// Editable profile fields.
#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[arg(long, value_name = "name")]
    full_name: Option<String>,
    #[arg(long, value_name = "number")]
    mobile_number: Option<String>,
    #[arg(long)]
    gender: Option<String>,
    #[arg(long)]
    address: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    state: Option<String>,
    #[arg(long)]
    country: Option<String>,
    #[arg(long)]
    pincode: Option<String>,
    /// Profile picture to upload.
    #[arg(long, value_name = "path")]
    profile_image: Option<PathBuf>,
}

impl ProfileArgs {
    fn into_update(self) -> Result<ProfileUpdate, CliError> {
        Ok(ProfileUpdate {
            full_name: self.full_name,
            mobile_number: self.mobile_number,
            gender: self.gender,
            address: self.address,
            city: self.city,
            state: self.state,
            country: self.country,
            pincode: self.pincode,
            profile_image: read_optional(self.profile_image)?,
        })
    }
}

pub(super) async fn login(
    args: LoginArgs,
    context: &AdminContext,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if !context.session.login(&args.email, &args.password).await {
        return Err(CliError::LoginFailed);
    }
    match context.session.current_user() {
        Some(user) => writeln!(out, "signed in as {}", user.display_name())?,
        None => writeln!(out, "signed in")?,
    }
    Ok(())
}

pub(super) fn logout(context: &AdminContext, out: &mut dyn Write) -> Result<(), CliError> {
    context.session.logout();
    writeln!(out, "signed out")?;
    Ok(())
}

pub(super) fn whoami(context: &AdminContext, out: &mut dyn Write) -> Result<(), CliError> {
    let user = context
        .session
        .current_user()
        .ok_or(CliError::LoginRequired)?;
    render::user(out, &user)?;
    Ok(())
}

pub(super) async fn profile(
    action: ProfileCommand,
    context: &AdminContext,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    match action {
        ProfileCommand::Update(args) => {
            let update = args.into_update()?;
            let view = ProfileView::new(context.session.clone(), context.notifier.clone());
            let user = view.submit(&update).await?;
            render::user(out, &user)?;
        }
    }
    Ok(())
}
