//! Image files named on the command line.

use std::io;
use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};

use crate::domain::ImageUpload;

use super::CliError;

/// Read `path` into an upload named after the file.
pub(super) fn read_image(path: &Path) -> Result<ImageUpload, CliError> {
    let unreadable = |source: io::Error| CliError::ReadImage {
        path: path.to_path_buf(),
        source,
    };
    let file_name = path.file_name().ok_or_else(|| {
        unreadable(io::Error::new(
            io::ErrorKind::InvalidInput,
            "image path must name a file",
        ))
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let directory = Dir::open_ambient_dir(parent, ambient_authority()).map_err(unreadable)?;
    let bytes = directory.read(file_name).map_err(unreadable)?;
    Ok(ImageUpload::new(file_name.to_string_lossy(), bytes))
}

/// Read an optional image argument.
pub(super) fn read_optional(path: Option<PathBuf>) -> Result<Option<ImageUpload>, CliError> {
    path.as_deref().map(read_image).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_named_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("pallu.jpg");
        std::fs::write(&path, [0xff, 0xd8]).expect("seed");

        let upload = read_image(&path).expect("image reads");
        assert_eq!(upload.file_name(), "pallu.jpg");
        assert_eq!(upload.content_type(), "image/jpeg");
        assert_eq!(upload.bytes(), &[0xff, 0xd8]);
    }

    #[test]
    fn missing_file_is_reported_with_its_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.png");
        let err = read_image(&path).expect_err("missing");
        assert!(err.to_string().contains("absent.png"));
    }
}
