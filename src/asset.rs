//! Resolution of logical asset paths against the configured asset root.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use log::debug;
use thiserror::Error;

/// Failure raised while resolving an asset reference.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The resolved path does not exist on disk. A missing asset is a
    /// configuration defect, not a transient condition, so it is never
    /// retried and no markup is produced for it.
    #[error("asset file not found: {0}")]
    NotFound(PathBuf),

    /// Metadata for an existing path could not be read (permissions and the
    /// like). Distinct from [`AssetError::NotFound`] so callers can tell a
    /// bad reference from a faulty filesystem.
    #[error("failed to read metadata for {path}")]
    Metadata {
        /// Path whose metadata read failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// A static file resolved against an asset root directory.
///
/// Constructed fresh per helper call and discarded immediately after; the
/// modification timestamp is read once at construction and never refreshed.
#[derive(Debug, Clone)]
pub struct Asset {
    filename: String,
    full_path: PathBuf,
    timestamp: u64,
}

impl Asset {
    /// Resolve `filename` against `asset_dir`, reading the file's mtime.
    ///
    /// The logical filename is joined onto the root with any leading
    /// separator stripped so that URL-style references (`/images/foo.png`)
    /// land inside the root rather than at the filesystem root.
    pub fn resolve(filename: &str, asset_dir: &Path) -> Result<Self, AssetError> {
        let full_path = join_asset_path(asset_dir, filename);

        let metadata = fs::metadata(&full_path).map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                AssetError::NotFound(full_path.clone())
            } else {
                AssetError::Metadata {
                    path: full_path.clone(),
                    source: err,
                }
            }
        })?;

        let timestamp = metadata
            .modified()
            .map_err(|err| AssetError::Metadata {
                path: full_path.clone(),
                source: err,
            })?
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0);

        debug!(
            "resolved asset {} -> {} (ts={})",
            filename,
            full_path.display(),
            timestamp
        );

        Ok(Self {
            filename: filename.to_string(),
            full_path,
            timestamp,
        })
    }

    /// Logical path exactly as the caller supplied it.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Resolved on-disk location of the asset.
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// Last-modification time as whole Unix epoch seconds.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }
}

/// Assets compare by logical filename, not by resolved path or timestamp.
impl PartialEq for Asset {
    fn eq(&self, other: &Self) -> bool {
        self.filename == other.filename
    }
}

impl Eq for Asset {}

impl PartialEq<str> for Asset {
    fn eq(&self, other: &str) -> bool {
        self.filename == other
    }
}

impl PartialEq<&str> for Asset {
    fn eq(&self, other: &&str) -> bool {
        self.filename == *other
    }
}

/// Join an asset root and a logical filename without doubled separators.
fn join_asset_path(asset_dir: &Path, filename: &str) -> PathBuf {
    asset_dir.join(filename.trim_start_matches(['/', '\\']))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn resolves_existing_file_with_its_mtime() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("image.jpg");
        fs::write(&file, b"jpeg bytes").unwrap();

        let asset = Asset::resolve("image.jpg", dir.path()).unwrap();
        assert_eq!(asset.full_path(), file.as_path());

        let expected = fs::metadata(&file)
            .unwrap()
            .modified()
            .unwrap()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        assert_eq!(asset.timestamp(), expected);
    }

    #[test]
    fn strips_leading_separator_before_joining() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("images")).unwrap();
        fs::write(dir.path().join("images/foo.png"), b"png").unwrap();

        let asset = Asset::resolve("/images/foo.png", dir.path()).unwrap();
        assert_eq!(asset.full_path(), dir.path().join("images/foo.png"));
        assert_eq!(asset.filename(), "/images/foo.png");
    }

    #[test]
    fn missing_file_fails_with_not_found() {
        let dir = tempdir().unwrap();
        let err = Asset::resolve("/stylesheets/absent.css", dir.path()).unwrap_err();
        match err {
            AssetError::NotFound(path) => {
                assert_eq!(path, dir.path().join("stylesheets/absent.css"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn equality_is_by_logical_filename() {
        let dir_a = tempdir().unwrap();
        let dir_b = tempdir().unwrap();
        fs::write(dir_a.path().join("image.jpg"), b"a").unwrap();
        fs::write(dir_b.path().join("image.jpg"), b"bb").unwrap();

        let first = Asset::resolve("image.jpg", dir_a.path()).unwrap();
        let second = Asset::resolve("image.jpg", dir_b.path()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "image.jpg");
        assert_ne!(first.full_path(), second.full_path());
    }
}
