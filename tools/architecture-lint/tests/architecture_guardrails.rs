//! Guardrail tests running the lint over source trees on disk.

use std::fs;
use std::path::{Path, PathBuf};

use architecture_lint::{ArchitectureLintError, LintSource, Violation, lint_admin_sources};
use rstest::{fixture, rstest};
use tempfile::TempDir;

fn source(file: &str, contents: &str) -> LintSource {
    LintSource {
        file: PathBuf::from(file),
        contents: contents.to_owned(),
    }
}

fn valid_modules() -> Vec<LintSource> {
    vec![
        source(
            "domain/saree.rs",
            "pub struct Saree { pub id: String } impl Saree { pub fn new(id: &str) -> Self { Self { id: id.to_owned() } } }",
        ),
        source(
            "inbound/cli/sarees.rs",
            "use crate::domain::saree::Saree; fn run() { let _saree = Saree::new(\"s1\"); }",
        ),
        source(
            "outbound/http/sarees.rs",
            "use crate::domain::saree::Saree; pub struct Service; impl Service { pub fn save(&self, _saree: Saree) {} }",
        ),
    ]
}

#[fixture]
fn workspace() -> TempDir {
    TempDir::new().expect("tempdir")
}

fn write_tree(root: &Path, sources: &[LintSource]) -> PathBuf {
    let admin_dir = root.join("admin");
    let src_dir = admin_dir.join("src");
    for source in sources {
        let path = src_dir.join(&source.file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directories");
        }
        fs::write(&path, &source.contents).expect("write source file");
    }
    fs::write(src_dir.join("main.rs"), "fn main() {}").expect("write entry point");
    admin_dir
}

fn violations(result: Result<(), ArchitectureLintError>) -> Vec<Violation> {
    match result {
        Err(ArchitectureLintError::Violations(violations)) => violations,
        other => panic!("expected violations, got {other:?}"),
    }
}

#[rstest]
fn clean_tree_passes(workspace: TempDir) {
    let admin_dir = write_tree(workspace.path(), &valid_modules());
    lint_admin_sources(&admin_dir).expect("clean tree lints");
}

#[rstest]
fn every_violation_is_reported(workspace: TempDir) {
    let mut sources = valid_modules();
    sources.push(source(
        "inbound/cli/bad.rs",
        "use saree_admin::outbound::http::ApiClient; fn run() {}",
    ));
    sources.push(source(
        "domain/bad.rs",
        "use reqwest::Client; fn run() { let _ = Client::new(); }",
    ));
    let admin_dir = write_tree(workspace.path(), &sources);

    let found = violations(lint_admin_sources(&admin_dir));

    let messages: Vec<String> = found.iter().map(ToString::to_string).collect();
    assert_eq!(found.len(), 2, "violations: {messages:?}");
    assert!(
        messages
            .iter()
            .any(|m| m.contains("inbound must not use crate::outbound"))
    );
    assert!(
        messages
            .iter()
            .any(|m| m.contains("domain must not use crate `reqwest`"))
    );
}

#[rstest]
fn outbound_may_not_reach_into_the_cli(workspace: TempDir) {
    let mut sources = valid_modules();
    sources.push(source(
        "outbound/http/bad.rs",
        "use crate::inbound::cli::ConsoleNotifier; fn run() {}",
    ));
    let admin_dir = write_tree(workspace.path(), &sources);

    let found = violations(lint_admin_sources(&admin_dir));

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].file, PathBuf::from("outbound/http/bad.rs"));
}

#[test]
fn admin_crate_respects_its_boundaries() {
    let admin_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../admin");
    lint_admin_sources(&admin_dir).expect("admin sources respect the hexagon");
}
