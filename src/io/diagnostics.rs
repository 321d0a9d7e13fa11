//! Append-only failure log kept beside the todo file.
//!
//! Saves are fire-and-forget relative to the interactive loop, so a failed
//! write must not take the session down — but it also must not lose data
//! silently. Each failure is recorded here together with the serialized
//! document, so nothing typed into the list is ever unrecoverable.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const FILE_HEADER: &str = "# sprig recovery log\n\n\
    Entries below record saves that could not reach the todo file.\n";

/// A single diagnostics entry
#[derive(Debug)]
pub struct FailureEntry {
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub error: String,
    /// The serialized document that failed to write
    pub content: String,
}

impl FailureEntry {
    fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "\n## {} — save failed\n\n",
            self.timestamp
                .to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
        ));
        out.push_str(&format!("Error: {}\n\n", self.error));
        out.push_str("```markdown\n");
        out.push_str(&self.content);
        if !self.content.ends_with('\n') {
            out.push('\n');
        }
        out.push_str("```\n");
        out
    }
}

/// Path of the recovery log for a given document: `todo.md` →
/// `todo.md.recovery.md` in the same directory.
pub fn log_path(document_path: &Path) -> PathBuf {
    let mut name = document_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "todo.md".to_string());
    name.push_str(".recovery.md");
    document_path.with_file_name(name)
}

/// Record a failed save. Logging problems degrade to a stderr warning:
/// diagnostics never escalate into session errors.
pub fn log_save_failure(document_path: &Path, entry: FailureEntry) {
    if let Err(e) = log_save_failure_inner(document_path, entry) {
        eprintln!("warning: could not write to recovery log: {}", e);
    }
}

fn log_save_failure_inner(document_path: &Path, entry: FailureEntry) -> io::Result<()> {
    let path = log_path(document_path);
    let needs_header = !path.exists();

    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    if needs_header {
        file.write_all(FILE_HEADER.as_bytes())?;
    }
    file.write_all(entry.to_markdown().as_bytes())?;
    Ok(())
}
