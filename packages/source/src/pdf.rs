//! Local registry PDF source.
//!
//! Extracts the text layer of a PDF with [`pdf_extract`], one string per
//! page. Scanned copies without a text layer extract as empty pages; OCR
//! is out of scope here.

use std::path::PathBuf;

use crate::{DocumentSource, SourceError};

/// Reads a registry PDF from disk and extracts its text per page.
#[derive(Debug)]
pub struct PdfFileSource {
    path: PathBuf,
    id: String,
}

impl PdfFileSource {
    /// Creates a source for the PDF at `path`. The file is not touched
    /// until [`DocumentSource::pages`] runs.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let id = path.file_name().map_or_else(
            || path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        );
        Self { path, id }
    }
}

impl DocumentSource for PdfFileSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn pages(&self) -> Result<Vec<Vec<String>>, SourceError> {
        let bytes = std::fs::read(&self.path)?;
        log::debug!("{}: read {} bytes", self.id, bytes.len());

        let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes).map_err(|e| {
            SourceError::Extraction(format!("failed to extract text from {}: {e}", self.id))
        })?;

        log::debug!("{}: extracted {} page(s) of text", self.id, pages.len());

        Ok(pages
            .into_iter()
            .map(|page| page.lines().map(str::to_owned).collect())
            .collect())
    }
}
