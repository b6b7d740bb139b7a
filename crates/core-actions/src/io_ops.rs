//! File IO helpers kept out of the dispatcher.
//!
//! Load never fails: a missing, unreadable, or non-UTF-8 file degrades to an
//! empty document and the reason is logged. Save writes `Document::serialize`
//! verbatim and reports failures as `SaveError`.

use std::io;
use std::path::{Path, PathBuf};

use core_text::Document;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read `path` into a document. `None` yields an empty document.
pub fn load_file(path: Option<&Path>) -> Document {
    let Some(path) = path else {
        return Document::empty();
    };
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let doc = Document::load(Some(&content));
            tracing::info!(target: "io", path = %path.display(), lines = doc.line_count(), bytes = content.len(), "file_loaded");
            doc
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!(target: "io", path = %path.display(), "file_not_found_new_buffer");
            Document::empty()
        }
        Err(e) => {
            tracing::warn!(target: "io", path = %path.display(), error = %e, "file_load_failed_empty_buffer");
            Document::empty()
        }
    }
}

/// Write the serialized document to `path`, returning the byte count written.
pub fn write_file(doc: &Document, path: &Path) -> Result<usize, SaveError> {
    let content = doc.serialize();
    match std::fs::write(path, content.as_bytes()) {
        Ok(()) => {
            tracing::info!(target: "io", path = %path.display(), bytes = content.len(), "file_written");
            Ok(content.len())
        }
        Err(source) => {
            tracing::error!(target: "io", path = %path.display(), error = %source, "file_write_error");
            Err(SaveError::Write {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
