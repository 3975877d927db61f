#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Registry document sources.
//!
//! Each input file implements the [`DocumentSource`] trait to define how
//! its text is extracted as ordered pages of lines. The parser needs
//! nothing beyond lines in order — no coordinates, no font metadata — so
//! this is the entire boundary to the text-extraction step.
//!
//! Two sources are provided: [`pdf::PdfFileSource`] extracts the text
//! layer of a local registry PDF, and [`text::TextFileSource`] reads
//! pre-extracted page text (used by tests and for re-running the parser
//! without the PDF step).

pub mod decode;
pub mod pdf;
pub mod text;

use std::path::Path;

/// Errors that can occur while turning a source file into text lines.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PDF text extraction failed.
    #[error("PDF extraction error: {0}")]
    Extraction(String),
}

/// A single input document yielding ordered pages of raw text lines.
pub trait DocumentSource: Send + Sync {
    /// Identifier used in logs, reports, and error messages (typically
    /// the file name).
    fn id(&self) -> &str;

    /// Extracts the document text as ordered pages of lines.
    ///
    /// An empty page is valid and contributes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the file cannot be read or its text
    /// cannot be extracted at all.
    fn pages(&self) -> Result<Vec<Vec<String>>, SourceError>;
}

/// Enumerates extractable files in `dir` in lexicographic path order.
///
/// Recognizes `.pdf` files (any case) and `.txt` files. Other entries are
/// ignored. The returned order is the deterministic document order used
/// by the batch aggregator.
///
/// # Errors
///
/// Returns [`SourceError::Io`] when the directory cannot be listed.
pub fn scan_sources(dir: &Path) -> Result<Vec<Box<dyn DocumentSource>>, SourceError> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        paths.push(entry?.path());
    }
    paths.sort();

    let mut sources: Vec<Box<dyn DocumentSource>> = Vec::new();
    for path in paths {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("pdf") => sources.push(Box::new(pdf::PdfFileSource::new(path))),
            Some("txt") => sources.push(Box::new(text::TextFileSource::new(path))),
            _ => {}
        }
    }

    log::debug!(
        "{}: found {} extractable file(s)",
        dir.display(),
        sources.len()
    );
    Ok(sources)
}
