//! Architecture lint for the saree admin crate.
//!
//! `admin/src` is split into `domain`, `inbound` and `outbound` modules. The
//! lint parses every file under those directories with `syn`, collects the
//! paths each file names and reports the ones that cross a boundary:
//!
//! - `domain` may not name `inbound` or `outbound`, nor the HTTP, filesystem,
//!   CLI and process-setup crates the adapters use;
//! - `inbound` may not name `outbound` or the HTTP client;
//! - `outbound` may not name `inbound` or clap.
//!
//! Run it with `cargo run -p architecture-lint` from anywhere in the
//! workspace.

use std::collections::BTreeSet;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use cap_std::ambient_authority;
use cap_std::fs::Dir;
use syn::punctuated::Punctuated;
use syn::visit::{self, Visit};
use thiserror::Error;

/// Library name of the linted crate, as it appears in absolute paths.
const CRATE_NAME: &str = "saree_admin";
const RELATIVE_ROOTS: [&str; 3] = ["crate", "self", "super"];

/// One forbidden dependency found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// File path relative to `admin/src`.
    pub file: PathBuf,
    /// The broken rule.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file.display(), self.message)
    }
}

/// Reasons a lint run did not pass.
#[derive(Debug, Error)]
pub enum ArchitectureLintError {
    /// Sources could not be listed or read.
    #[error("could not read admin sources: {0}")]
    Io(#[from] io::Error),
    /// A file sits outside the layers or is not valid Rust.
    #[error("could not lint {}: {message}", file.display())]
    Parse {
        /// File path relative to `admin/src`.
        file: PathBuf,
        /// Parser or layout diagnostic.
        message: String,
    },
    /// At least one boundary was crossed.
    #[error("architecture boundary violations:{}", bullet_list(.0))]
    Violations(Vec<Violation>),
}

fn bullet_list(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|violation| format!("\n- {violation}"))
        .collect()
}

/// A Rust source file to be linted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintSource {
    /// Path relative to `admin/src`.
    pub file: PathBuf,
    /// Rust source text.
    pub contents: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Domain,
    Inbound,
    Outbound,
}

const LAYERS: [Layer; 3] = [Layer::Domain, Layer::Inbound, Layer::Outbound];

impl Layer {
    const fn dir(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
        }
    }

    fn named(segment: &str) -> Option<Self> {
        LAYERS.into_iter().find(|layer| layer.dir() == segment)
    }

    fn of_file(file: &Path) -> Option<Self> {
        let first = file.components().next()?;
        Self::named(first.as_os_str().to_str()?)
    }

    const fn forbidden_layers(self) -> &'static [Self] {
        match self {
            Self::Domain => &[Self::Inbound, Self::Outbound],
            Self::Inbound => &[Self::Outbound],
            Self::Outbound => &[Self::Inbound],
        }
    }

    const fn forbidden_crates(self) -> &'static [&'static str] {
        match self {
            Self::Domain => &[
                "cap_std",
                "clap",
                "color_eyre",
                "ortho_config",
                "reqwest",
                "tracing_subscriber",
                "wiremock",
            ],
            Self::Inbound => &["reqwest", "wiremock"],
            Self::Outbound => &["clap", "color_eyre"],
        }
    }
}

/// What a path points at, as far as the lint cares.
enum Target<'a> {
    Layer(Layer),
    Crate(&'a str),
}

fn classify(segments: &[String]) -> Option<Target<'_>> {
    let mut rest = segments.iter().map(String::as_str);
    let first = rest.next()?;
    if first == CRATE_NAME || RELATIVE_ROOTS.contains(&first) {
        let root = rest.find(|segment| !RELATIVE_ROOTS.contains(segment))?;
        return Layer::named(root).map(Target::Layer);
    }
    Some(Layer::named(first).map_or(Target::Crate(first), Target::Layer))
}

/// Lint the admin crate sources on disk.
///
/// `admin_dir` must be the `admin/` directory at the repository root.
///
/// # Errors
///
/// Returns [`ArchitectureLintError`] when sources cannot be read or parsed,
/// or when any boundary is crossed.
pub fn lint_admin_sources(admin_dir: &Path) -> Result<(), ArchitectureLintError> {
    let src = Dir::open_ambient_dir(admin_dir.join("src"), ambient_authority())?;
    let mut sources = Vec::new();
    for layer in LAYERS {
        match src.open_dir(layer.dir()) {
            Ok(dir) => collect_sources(&dir, Path::new(layer.dir()), &mut sources)?,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {}
            Err(error) => return Err(error.into()),
        }
    }
    lint_sources(&sources)
}

fn collect_sources(dir: &Dir, relative: &Path, sources: &mut Vec<LintSource>) -> io::Result<()> {
    let mut entries = dir.entries()?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(cap_std::fs::DirEntry::file_name);
    for entry in entries {
        let name = entry.file_name();
        let file = relative.join(&name);
        if entry.file_type()?.is_dir() {
            collect_sources(&entry.open_dir()?, &file, sources)?;
        } else if file.extension().is_some_and(|ext| ext == "rs") {
            let contents = dir.read_to_string(&name)?;
            sources.push(LintSource { file, contents });
        }
    }
    Ok(())
}

/// Lint in-memory sources whose paths are relative to `admin/src`.
///
/// # Errors
///
/// Returns [`ArchitectureLintError::Parse`] for files outside the layers or
/// that fail to parse, and [`ArchitectureLintError::Violations`] listing
/// every crossed boundary.
pub fn lint_sources(sources: &[LintSource]) -> Result<(), ArchitectureLintError> {
    let mut violations = Vec::new();
    for source in sources {
        let parse_error = |message: String| ArchitectureLintError::Parse {
            file: source.file.clone(),
            message,
        };
        let layer = Layer::of_file(&source.file)
            .ok_or_else(|| parse_error("file is not under domain, inbound or outbound".to_owned()))?;
        let parsed = syn::parse_file(&source.contents).map_err(|err| parse_error(err.to_string()))?;
        violations.extend(
            check_file(layer, &parsed)
                .into_iter()
                .map(|message| Violation {
                    file: source.file.clone(),
                    message,
                }),
        );
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ArchitectureLintError::Violations(violations))
    }
}

fn check_file(layer: Layer, parsed: &syn::File) -> BTreeSet<String> {
    let mut collector = PathCollector::default();
    collector.visit_file(parsed);

    let mut messages = BTreeSet::new();
    for segments in &collector.paths {
        match classify(segments) {
            Some(Target::Layer(target)) if layer.forbidden_layers().contains(&target) => {
                messages.insert(format!("{} must not use crate::{}", layer.dir(), target.dir()));
            }
            Some(Target::Crate(name)) if layer.forbidden_crates().contains(&name) => {
                messages.insert(format!("{} must not use crate `{name}`", layer.dir()));
            }
            _ => {}
        }
    }
    messages
}

/// Every path a file names, from `use` trees and expressions alike.
#[derive(Default)]
struct PathCollector {
    paths: BTreeSet<Vec<String>>,
}

impl PathCollector {
    fn record_use(&mut self, tree: &syn::UseTree, prefix: &mut Vec<String>) {
        match tree {
            syn::UseTree::Path(path) => {
                prefix.push(path.ident.to_string());
                self.record_use(&path.tree, prefix);
                prefix.pop();
            }
            syn::UseTree::Name(name) => self.record_leaf(prefix, &name.ident),
            syn::UseTree::Rename(rename) => self.record_leaf(prefix, &rename.ident),
            syn::UseTree::Glob(_) => {
                if !prefix.is_empty() {
                    self.paths.insert(prefix.clone());
                }
            }
            syn::UseTree::Group(group) => {
                for item in &group.items {
                    self.record_use(item, prefix);
                }
            }
        }
    }

    fn record_leaf(&mut self, prefix: &[String], ident: &syn::Ident) {
        let mut segments = prefix.to_vec();
        segments.push(ident.to_string());
        self.paths.insert(segments);
    }
}

impl<'ast> Visit<'ast> for PathCollector {
    fn visit_path(&mut self, node: &'ast syn::Path) {
        let segments: Vec<String> = node
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect();
        if !segments.is_empty() {
            self.paths.insert(segments);
        }
        visit::visit_path(self, node);
    }

    fn visit_item_use(&mut self, node: &'ast syn::ItemUse) {
        self.record_use(&node.tree, &mut Vec::new());
    }

    fn visit_attribute(&mut self, node: &'ast syn::Attribute) {
        // Derive arguments are opaque tokens to the visitor.
        if node.path().is_ident("derive") {
            if let Ok(derives) = node.parse_args_with(
                Punctuated::<syn::Path, syn::Token![,]>::parse_terminated,
            ) {
                for derive in &derives {
                    self.visit_path(derive);
                }
            }
        }
        visit::visit_attribute(self, node);
    }
}

#[cfg(test)]
mod tests;
