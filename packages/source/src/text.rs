//! Plain-text document source.
//!
//! Reads pre-extracted page text, with pages separated by form feeds.
//! Bytes run through the decode fallback chain first, so legacy-encoded
//! exports work unchanged. Used by tests and for re-running the parser
//! on text captured from an earlier extraction.

use std::path::PathBuf;

use crate::{DocumentSource, SourceError, decode};

/// Form feed separating pages in a text export.
const PAGE_SEPARATOR: char = '\u{0c}';

/// Reads a text file from disk as one document.
#[derive(Debug)]
pub struct TextFileSource {
    path: PathBuf,
    id: String,
}

impl TextFileSource {
    /// Creates a source for the text file at `path`.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let id = path.file_name().map_or_else(
            || path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        );
        Self { path, id }
    }
}

impl DocumentSource for TextFileSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn pages(&self) -> Result<Vec<Vec<String>>, SourceError> {
        let bytes = std::fs::read(&self.path)?;
        let text = decode::decode_lossy(&bytes);

        Ok(text
            .split(PAGE_SEPARATOR)
            .map(|page| page.lines().map(str::to_owned).collect())
            .collect())
    }
}
