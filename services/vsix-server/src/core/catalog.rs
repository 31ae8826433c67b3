//! Extension catalog
//!
//! Lists the `.vsix` files in the extension directory and resolves
//! requested names to files inside it. Containment is checked on the
//! canonical path, so a name can never reach outside the directory
//! or into a subdirectory, whatever its suffix.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::error::{Result, VsixError};
use crate::core::types::ExtensionRecord;

/// Suffix every served file must carry (compared case-insensitively)
pub const VSIX_SUFFIX: &str = ".vsix";

/// Check whether `name` ends with `.vsix`, ignoring ASCII case
pub fn has_vsix_suffix(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() >= VSIX_SUFFIX.len()
        && bytes[bytes.len() - VSIX_SUFFIX.len()..].eq_ignore_ascii_case(VSIX_SUFFIX.as_bytes())
}

/// Read-only view of the extension directory
///
/// Created once at startup and shared by every handler.
#[derive(Debug, Clone)]
pub struct ExtensionCatalog {
    dir: PathBuf,
}

impl ExtensionCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The configured directory, as given
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// List every `.vsix` file directly inside the directory
    ///
    /// Records are sorted by name. Entries that are not regular files
    /// (after following symlinks) and names that are not valid UTF-8
    /// are skipped.
    ///
    /// # Errors
    ///
    /// - `DirectoryNotFound`: the directory does not exist
    /// - `IoError`: any other failure reading the directory
    pub async fn list(&self) -> Result<Vec<ExtensionRecord>> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                return Err(VsixError::DirectoryNotFound(self.dir.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let Ok(name) = entry.file_name().into_string() else {
                tracing::debug!("Skipping non UTF-8 entry: {:?}", entry.path());
                continue;
            };

            if !has_vsix_suffix(&name) {
                continue;
            }

            // Follows symlinks; a dangling link is skipped
            match tokio::fs::metadata(entry.path()).await {
                Ok(meta) if meta.is_file() => records.push(ExtensionRecord::new(name)),
                _ => continue,
            }
        }

        records.sort_by(|a, b| a.name.cmp(&b.name));

        tracing::debug!(
            dir = %self.dir.display(),
            count = records.len(),
            "Listed extensions"
        );

        Ok(records)
    }

    /// Resolve a requested name to a file directly inside the directory
    ///
    /// # Errors
    ///
    /// `ExtensionNotFound` when the suffix is wrong, the file is absent,
    /// is not a regular file, or its canonical path is not a direct
    /// child of the canonical directory.
    pub async fn resolve(&self, name: &str) -> Result<PathBuf> {
        if !has_vsix_suffix(name) {
            return Err(VsixError::ExtensionNotFound(name.to_string()));
        }

        let not_found = || VsixError::ExtensionNotFound(name.to_string());

        let root = tokio::fs::canonicalize(&self.dir)
            .await
            .map_err(|_| not_found())?;
        let candidate = tokio::fs::canonicalize(self.dir.join(name))
            .await
            .map_err(|_| not_found())?;

        if candidate.parent() != Some(root.as_path()) {
            tracing::warn!(
                requested = %name,
                resolved = %candidate.display(),
                "Rejected extension path outside directory"
            );
            return Err(not_found());
        }

        let meta = tokio::fs::metadata(&candidate)
            .await
            .map_err(|_| not_found())?;
        if !meta.is_file() {
            return Err(not_found());
        }

        Ok(candidate)
    }

    /// Resolve `name` and read the whole file
    pub async fn read(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.resolve(name).await?;

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            // Removed between resolve and read
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(VsixError::ExtensionNotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
