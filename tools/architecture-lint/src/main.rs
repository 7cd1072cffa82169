//! Command-line entry point: lints `admin/src` of the enclosing workspace.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    let Some(root) = workspace_root() else {
        return fail("no enclosing Cargo workspace found");
    };
    match architecture_lint::lint_admin_sources(&root.join("admin")) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => fail(&error.to_string()),
    }
}

fn fail(message: &str) -> ExitCode {
    let _ = writeln!(io::stderr().lock(), "{message}");
    ExitCode::FAILURE
}

/// First ancestor holding a workspace manifest, searched from
/// `CARGO_WORKSPACE_DIR`, the working directory and this package in turn.
fn workspace_root() -> Option<PathBuf> {
    let starts = [
        std::env::var_os("CARGO_WORKSPACE_DIR").map(PathBuf::from),
        std::env::current_dir().ok(),
        Some(PathBuf::from(env!("CARGO_MANIFEST_DIR"))),
    ];
    starts.into_iter().flatten().find_map(|start| {
        start
            .ancestors()
            .find(|dir| declares_workspace(dir))
            .map(Path::to_path_buf)
    })
}

fn declares_workspace(dir: &Path) -> bool {
    std::fs::read_to_string(dir.join("Cargo.toml"))
        .is_ok_and(|manifest| manifest.contains("[workspace]"))
}
