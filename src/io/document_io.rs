use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::Document;
use crate::parse::{parse_document, serialize_document};

/// Error type for document I/O operations
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: io::Error,
    },
}

/// Load a todo document from disk.
///
/// A missing file is not an error: it yields an empty document, and the
/// first save creates the file. Any other read failure is fatal to the
/// session since there is no outline to operate on.
pub fn load_document(path: &Path) -> Result<Document, DocumentError> {
    if !path.exists() {
        return Ok(Document::default());
    }
    let text = fs::read_to_string(path).map_err(|e| DocumentError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(parse_document(&text))
}

/// Save a document back to its file via atomic write-and-rename.
pub fn save_document(path: &Path, doc: &Document) -> Result<(), DocumentError> {
    let content = serialize_document(doc);
    atomic_write(path, content.as_bytes()).map_err(|e| DocumentError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write `content` to `path` through a temp file in the same directory,
/// so readers never observe a half-written document.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let dir = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_yields_empty_document() {
        let tmp = TempDir::new().unwrap();
        let doc = load_document(&tmp.path().join("todo.md")).unwrap();
        assert!(doc.items.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("todo.md");

        let mut doc = Document::default();
        doc.items.push(crate::model::Item::new("Water plants"));
        doc.items.push(crate::model::Item {
            label: "Front garden".to_string(),
            completed: true,
            level: 1,
        });

        save_document(&path, &doc).unwrap();
        let loaded = load_document(&path).unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn test_save_overwrites_existing_content() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("todo.md");
        fs::write(&path, "# Old\n\n- [ ] Stale\n").unwrap();

        let doc = Document::default();
        save_document(&path, &doc).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# TODO\n");
    }

    #[test]
    fn test_load_unreadable_path_is_an_error() {
        let tmp = TempDir::new().unwrap();
        // A directory where a file is expected
        let err = load_document(tmp.path()).unwrap_err();
        assert!(matches!(err, DocumentError::Read { .. }));
    }
}
