//! Writing output files.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Error writing an output file.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The temporary file could not be moved into place.
    #[error("failed to replace {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

/// Write `contents` to `path`, replacing any existing file.
///
/// The contents go to a temporary file in the same directory which is then
/// renamed over `path`, so readers never see a partial page. Missing parent
/// directories are created. On failure the temporary file is removed and any
/// previous file at `path` is left as it was.
///
/// # Errors
///
/// Returns an error if the directory, the temporary file or the rename fails.
pub fn write_page(path: &Path, contents: &str) -> Result<(), PageError> {
    let io_error = |source| PageError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(io_error)?;

    let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;
    file.write_all(contents.as_bytes()).map_err(io_error)?;
    file.flush().map_err(io_error)?;
    file.persist(path).map_err(|source| PageError::Persist {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_writes_new_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rules.html");

        write_page(&path, "<p>rules</p>").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>rules</p>");
        assert_eq!(entries(dir.path()), ["rules.html"]);
    }

    #[test]
    fn test_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rules.html");
        std::fs::write(&path, "old and much longer content").unwrap();

        write_page(&path, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("public/mtg/rules.html");

        write_page(&path, "x").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_failed_persist_leaves_no_file() {
        let dir = TempDir::new().unwrap();
        // A directory at the target path makes the rename fail.
        let path = dir.path().join("rules.html");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "").unwrap();

        let err = write_page(&path, "<p>rules</p>").unwrap_err();

        assert!(matches!(err, PageError::Persist { .. }));
        drop(err);
        assert_eq!(entries(dir.path()), ["rules.html"]);
    }
}
