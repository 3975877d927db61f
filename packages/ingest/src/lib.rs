#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Batch extraction of registry owner lists.
//!
//! Runs the parser over an ordered list of source documents, combines the
//! records in source order, and computes the validation summary. One
//! document yielding nothing is a soft failure (logged, reported); a
//! batch yielding nothing overall is a hard failure, as is an unreadable
//! source under the default policy.

pub mod export;

use rayon::prelude::*;

use tohon_extract_parser::assembler::ParseStats;
use tohon_extract_parser::document::{self, DocumentParse, ParseOptions};
use tohon_extract_record_models::{OwnerRecord, ValidationSummary};
use tohon_extract_source::{DocumentSource, SourceError};

/// Errors that abort a batch extraction.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// No document in the batch produced any records.
    #[error("no data extracted from any source")]
    NoDataExtracted,

    /// A source could not be turned into text lines at all.
    #[error("source {source} is unreadable: {cause}")]
    SourceUnreadable {
        /// Identifier of the offending source file.
        source: String,
        /// The underlying extraction failure.
        #[source]
        cause: SourceError,
    },
}

/// How the batch reacts to an unreadable source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OnUnreadable {
    /// Abort the whole batch, naming the offending source.
    #[default]
    Abort,
    /// Record the failure in the batch report and continue with the
    /// remaining sources.
    SkipAndReport,
}

/// Options controlling a batch run.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregateOptions {
    /// Parser options applied to every document.
    pub parse: ParseOptions,
    /// Unreadable-source policy.
    pub on_unreadable: OnUnreadable,
    /// Parse documents on the rayon thread pool. Records are still
    /// combined in source order.
    pub parallel: bool,
}

/// Outcome of one document within a batch.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DocumentReport {
    /// Source identifier.
    pub source: String,
    /// Records extracted from this document.
    pub record_count: usize,
    /// Jurisdiction found in this document's header (may be empty).
    pub location: String,
    /// Parser counters for this document.
    pub stats: ParseStats,
    /// Extraction failure, present when the source was skipped.
    pub error: Option<String>,
}

/// Result of a whole batch extraction.
#[derive(Debug)]
pub struct Extraction {
    /// All records, in document order then emission order.
    pub records: Vec<OwnerRecord>,
    /// Summary computed over the combined sequence.
    pub summary: ValidationSummary,
    /// One report per source, in source order.
    pub reports: Vec<DocumentReport>,
}

/// Parses every source in order and combines the results.
///
/// # Errors
///
/// Returns [`IngestError::SourceUnreadable`] when a source fails to yield
/// lines under the default policy, and [`IngestError::NoDataExtracted`]
/// when the combined record sequence ends up empty.
pub fn aggregate(
    sources: &[Box<dyn DocumentSource>],
    options: &AggregateOptions,
) -> Result<Extraction, IngestError> {
    let parse_one = |source: &Box<dyn DocumentSource>| {
        let parsed = source
            .pages()
            .map(|pages| document::parse_document(&pages, options.parse));
        (source.id().to_owned(), parsed)
    };

    let parsed: Vec<(String, Result<DocumentParse, SourceError>)> = if options.parallel {
        sources.par_iter().map(parse_one).collect()
    } else {
        sources.iter().map(parse_one).collect()
    };

    let mut records: Vec<OwnerRecord> = Vec::new();
    let mut reports: Vec<DocumentReport> = Vec::new();

    for (source, outcome) in parsed {
        match outcome {
            Ok(mut document) => {
                if document.records.is_empty() {
                    log::warn!("{source}: no data extracted");
                } else {
                    log::info!("{source}: {} record(s) extracted", document.records.len());
                }
                reports.push(DocumentReport {
                    source,
                    record_count: document.records.len(),
                    location: document.location,
                    stats: document.stats,
                    error: None,
                });
                records.append(&mut document.records);
            }
            Err(cause) => match options.on_unreadable {
                OnUnreadable::Abort => {
                    return Err(IngestError::SourceUnreadable { source, cause });
                }
                OnUnreadable::SkipAndReport => {
                    log::error!("{source}: skipped unreadable source: {cause}");
                    reports.push(DocumentReport {
                        source,
                        record_count: 0,
                        location: String::new(),
                        stats: ParseStats::default(),
                        error: Some(cause.to_string()),
                    });
                }
            },
        }
    }

    if records.is_empty() {
        return Err(IngestError::NoDataExtracted);
    }

    let summary = ValidationSummary::compute(&records);
    log::info!(
        "batch complete: {} record(s) from {} source(s)",
        summary.total_records,
        reports.len(),
    );

    Ok(Extraction {
        records,
        summary,
        reports,
    })
}

/// Sums the per-document parser counters of a batch.
#[must_use]
pub fn combined_stats(reports: &[DocumentReport]) -> ParseStats {
    let mut total = ParseStats::default();
    for report in reports {
        total.merge(report.stats);
    }
    total
}
