//! File-backed bearer token storage.
//!
//! The token lives in a single file named `token` inside the configured
//! directory. Writes go through a staging file and a rename so a crash never
//! leaves a half-written token behind. On unix the file is readable by its
//! owner only.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[cfg(unix)]
use cap_std::fs::OpenOptionsExt;
use cap_std::{
    ambient_authority,
    fs::{Dir, OpenOptions},
};
use tracing::debug;

use crate::domain::BearerToken;
use crate::domain::ports::{TokenStore, TokenStoreError};

const TOKEN_FILENAME: &str = "token";
const STAGING_FILENAME: &str = ".token.tmp";
#[cfg(unix)]
const TOKEN_FILE_MODE: u32 = 0o600;

/// [`TokenStore`] persisting the token under one directory.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    directory: PathBuf,
}

impl FileTokenStore {
    /// Store rooted at `directory`. The directory is created on first save.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Directory holding the token file.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn token_path(&self) -> PathBuf {
        self.directory.join(TOKEN_FILENAME)
    }

    fn open_existing(&self) -> io::Result<Option<Dir>> {
        match Dir::open_ambient_dir(&self.directory, ambient_authority()) {
            Ok(dir) => Ok(Some(dir)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error),
        }
    }
}

/// Create `name` afresh with owner-only permissions and fill it.
///
/// A leftover file is removed first; reopening it would keep its old mode.
fn write_private(dir: &Dir, name: &str, contents: &[u8]) -> io::Result<()> {
    match dir.remove_file(name) {
        Ok(()) => {}
        Err(error) if error.kind() == io::ErrorKind::NotFound => {}
        Err(error) => return Err(error),
    }
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    options.mode(TOKEN_FILE_MODE);
    let mut file = dir.open_with(name, &options)?;
    file.write_all(contents)?;
    file.sync_all()
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<BearerToken>, TokenStoreError> {
        let read_error = |error: io::Error| {
            TokenStoreError::read(format!("{}: {error}", self.token_path().display()))
        };
        let Some(dir) = self.open_existing().map_err(read_error)? else {
            return Ok(None);
        };
        let raw = match dir.read_to_string(TOKEN_FILENAME) {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(read_error(error)),
        };
        if raw.trim().is_empty() {
            debug!(path = %self.token_path().display(), "token file is empty");
            return Ok(None);
        }
        BearerToken::new(raw.trim())
            .map(Some)
            .map_err(|error| TokenStoreError::corrupt(error.to_string()))
    }

    fn save(&self, token: &BearerToken) -> Result<(), TokenStoreError> {
        let write_error = |error: io::Error| {
            TokenStoreError::write(format!("{}: {error}", self.token_path().display()))
        };
        Dir::create_ambient_dir_all(&self.directory, ambient_authority()).map_err(write_error)?;
        let dir = Dir::open_ambient_dir(&self.directory, ambient_authority()).map_err(write_error)?;
        write_private(&dir, STAGING_FILENAME, token.expose().as_bytes()).map_err(write_error)?;
        dir.rename(STAGING_FILENAME, &dir, TOKEN_FILENAME)
            .map_err(write_error)
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        let write_error = |error: io::Error| {
            TokenStoreError::write(format!("{}: {error}", self.token_path().display()))
        };
        let Some(dir) = self.open_existing().map_err(write_error)? else {
            return Ok(());
        };
        match dir.remove_file(TOKEN_FILENAME) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(write_error(error)),
        }
    }
}
