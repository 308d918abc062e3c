//! Reading the rules text from disk.

use std::path::PathBuf;

use crate::RulesSource;
use crate::decode::decode_utf8_sig;
use crate::error::SourceError;

/// Rules text stored in a local file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RulesSource for FileSource {
    fn fetch(&self) -> Result<String, SourceError> {
        let bytes = std::fs::read(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "Read rules text");
        decode_utf8_sig(bytes)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_reads_file_without_byte_order_mark() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("MagicCompRules.txt");
        std::fs::write(&path, b"\xef\xbb\xbfMagic: The Gathering Comprehensive Rules\r\n").unwrap();

        let text = FileSource::new(&path).fetch().unwrap();
        assert_eq!(text, "Magic: The Gathering Comprehensive Rules\r\n");
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let source = FileSource::new(dir.path().join("missing.txt"));

        let err = source.fetch().unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rules.txt");
        std::fs::write(&path, [0xc3, 0x28]).unwrap();

        let err = FileSource::new(&path).fetch().unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));
    }
}
