//! Unit tests for the architecture lint.

use std::path::PathBuf;

use rstest::fixture;
use rstest::rstest;

use super::*;

#[derive(Clone, Copy)]
struct LintSingle;

impl LintSingle {
    fn lint(self, file: &str, contents: &str) -> Result<(), ArchitectureLintError> {
        lint_sources(&[LintSource {
            file: PathBuf::from(file),
            contents: contents.to_owned(),
        }])
    }
}

#[fixture]
fn lint_single() -> LintSingle {
    LintSingle
}

#[rstest]
#[case::inbound_uses_domain(
    "inbound/cli/sarees.rs",
    "use crate::domain::views::SareesView; fn run() { let _ = SareesView::new; }",
    true
)]
#[case::inbound_reads_files(
    "inbound/cli/image.rs",
    "use cap_std::fs::Dir; fn read() { let _ = Dir::open_ambient_dir; }",
    true
)]
#[case::inbound_uses_outbound(
    "inbound/cli/sarees.rs",
    "use crate::outbound::http::HttpSareeService; fn run() { let _ = HttpSareeService::new; }",
    false
)]
#[case::inbound_uses_bare_outbound(
    "inbound/cli/sarees.rs",
    "use outbound::http::ApiClient; fn run() {}",
    false
)]
#[case::inbound_uses_outbound_by_crate_name(
    "inbound/cli/sarees.rs",
    "use saree_admin::outbound::token_store::FileTokenStore; fn run() {}",
    false
)]
#[case::inbound_uses_reqwest(
    "inbound/cli/sarees.rs",
    "fn run() { let _ = reqwest::Client::new(); }",
    false
)]
#[case::domain_uses_inbound(
    "domain/session.rs",
    "use crate::inbound::cli; fn thing() { let _ = 1; }",
    false
)]
#[case::domain_uses_reqwest(
    "domain/error.rs",
    "use reqwest::StatusCode; fn thing() {}",
    false
)]
#[case::domain_uses_clap(
    "domain/views/reviews.rs",
    "#[derive(clap::ValueEnum)] enum Filter { All }",
    false
)]
#[case::domain_uses_tokio(
    "domain/error_channel.rs",
    "use tokio::sync::watch; fn thing() {}",
    true
)]
#[case::outbound_uses_inbound(
    "outbound/http/client.rs",
    "use crate::inbound::cli::ConsoleNotifier; fn thing() {}",
    false
)]
#[case::outbound_uses_clap(
    "outbound/token_store.rs",
    "use clap::Parser; fn thing() {}",
    false
)]
fn detects_boundary_violations(
    lint_single: LintSingle,
    #[case] file: &str,
    #[case] contents: &str,
    #[case] ok: bool,
) {
    let result = lint_single.lint(file, contents);
    assert_eq!(result.is_ok(), ok, "result: {result:?}");
}

#[rstest]
fn files_outside_the_layers_are_rejected(lint_single: LintSingle) {
    let result = lint_single.lint("config.rs", "fn thing() {}");
    assert!(matches!(result, Err(ArchitectureLintError::Parse { .. })));
}
