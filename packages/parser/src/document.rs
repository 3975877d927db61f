//! Whole-document parsing.
//!
//! A document is an ordered sequence of pages, each an ordered sequence of
//! raw text lines. The jurisdiction is resolved over the whole document
//! first, then every line of every page runs through one
//! [`RecordAssembler`], so each emitted record carries the jurisdiction
//! even when records appear on pages before the header page.

use tohon_extract_record_models::OwnerRecord;

use crate::assembler::{ParseStats, RecordAssembler};
use crate::line;
use crate::location;

/// What happens to a record still under construction when a page ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageBoundary {
    /// Finalize the pending record at the end of every page. An address
    /// wrapping onto the next page loses its remaining lines; the
    /// fragments on the next page are ownerless and dropped.
    #[default]
    Flush,
    /// Keep the pending record open across page boundaries within one
    /// document, so a cross-page address stays whole.
    Carry,
}

/// Options controlling document parsing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Page-boundary handling for a record under construction.
    pub page_boundary: PageBoundary,
}

/// Result of parsing one document.
#[derive(Debug, Clone)]
pub struct DocumentParse {
    /// Records in emission order.
    pub records: Vec<OwnerRecord>,
    /// Jurisdiction found in the header, empty when absent.
    pub location: String,
    /// Parser counters for this document.
    pub stats: ParseStats,
}

/// Parses one document.
#[must_use]
pub fn parse_document(pages: &[Vec<String>], options: ParseOptions) -> DocumentParse {
    let location =
        location::find_location(pages.iter().flatten().map(String::as_str)).unwrap_or_default();

    let mut assembler = RecordAssembler::new(location.clone());
    let mut records = Vec::new();

    for page in pages {
        for raw in page {
            records.extend(assembler.push_line(line::classify(raw)));
        }
        if options.page_boundary == PageBoundary::Flush {
            records.extend(assembler.flush());
        }
    }
    records.extend(assembler.flush());

    let stats = assembler.stats();
    log::debug!(
        "document parsed: {} records, location {location:?}, {}/{} data lines",
        records.len(),
        stats.data_lines,
        stats.lines_seen,
    );

    DocumentParse {
        records,
        location,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(pages: &[&[&str]]) -> Vec<Vec<String>> {
        pages
            .iter()
            .map(|page| page.iter().map(|&line| line.to_owned()).collect())
            .collect()
    }

    fn header_page() -> Vec<&'static str> {
        vec![
            "令和6年4月1日現在の情報です。",
            "東京都千代田区丸の内一丁目 所有者一覧表",
            "┃ 住 所 │ 氏 名 ┃",
            "┠────┼────┨",
        ]
    }

    #[test]
    fn records_from_every_page_carry_the_header_location() {
        let mut first = header_page();
        first.push("┃東京都千代田区│山田太郎┃");
        let document = pages(&[&first, &["┃大阪府大阪市│佐藤花子┃"]]);

        let parsed = parse_document(&document, ParseOptions::default());
        assert_eq!(parsed.location, "東京都千代田区丸の内一丁目");
        assert_eq!(parsed.records.len(), 2);
        for record in &parsed.records {
            assert_eq!(record.location, "東京都千代田区丸の内一丁目");
        }
    }

    #[test]
    fn location_on_a_later_page_still_stamps_earlier_records() {
        let document = pages(&[
            &["┃東京都千代田区│山田太郎┃"],
            &[
                "令和6年4月1日現在の情報です。",
                "大阪府大阪市北区 所有者一覧表",
            ],
        ]);

        let parsed = parse_document(&document, ParseOptions::default());
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].location, "大阪府大阪市北区");
    }

    #[test]
    fn missing_marker_yields_empty_location_on_every_record() {
        let document = pages(&[&["┃東京都千代田区│山田太郎┃", "┃大阪府大阪市│佐藤花子┃"]]);

        let parsed = parse_document(&document, ParseOptions::default());
        assert_eq!(parsed.location, "");
        assert_eq!(parsed.records.len(), 2);
        assert!(parsed.records.iter().all(|r| r.location.is_empty()));
    }

    #[test]
    fn page_flush_splits_a_cross_page_address() {
        let document = pages(&[
            &["┃東京都千代田区│山田太郎┃"],
            &["┃丸の内一丁目│┃", "┃大阪府大阪市│佐藤花子┃"],
        ]);

        let parsed = parse_document(&document, ParseOptions::default());
        assert_eq!(parsed.records.len(), 2);
        // The page flush closed the first record before its continuation,
        // which then has no owner and is dropped.
        assert_eq!(parsed.records[0].address, "東京都千代田区");
        assert_eq!(parsed.stats.orphan_continuations, 1);
    }

    #[test]
    fn carry_joins_a_cross_page_address() {
        let document = pages(&[
            &["┃東京都千代田区│山田太郎┃"],
            &["┃丸の内一丁目│┃", "┃大阪府大阪市│佐藤花子┃"],
        ]);

        let parsed = parse_document(
            &document,
            ParseOptions {
                page_boundary: PageBoundary::Carry,
            },
        );
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[0].address, "東京都千代田区 丸の内一丁目");
        assert_eq!(parsed.records[1].address, "大阪府大阪市");
    }

    #[test]
    fn empty_pages_contribute_nothing() {
        let document = pages(&[&[], &["┃東京都千代田区│山田太郎┃"], &[]]);
        let parsed = parse_document(&document, ParseOptions::default());
        assert_eq!(parsed.records.len(), 1);
    }

    #[test]
    fn empty_document_yields_no_records() {
        let parsed = parse_document(&[], ParseOptions::default());
        assert!(parsed.records.is_empty());
        assert_eq!(parsed.stats, ParseStats::default());
    }

    #[test]
    fn stats_count_all_pages() {
        let document = pages(&[&["┃東京都千代田区│山田太郎┃", "┠──┨"], &["", "x│ y"]]);
        let parsed = parse_document(&document, ParseOptions::default());
        assert_eq!(parsed.stats.lines_seen, 4);
        assert_eq!(parsed.stats.data_lines, 2);
    }
}
