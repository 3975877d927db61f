//! Record assembly state machine.
//!
//! Consumes classified lines in source order and emits completed owner
//! records. At most one record is under construction at a time: a data
//! line whose trailing cell cleans to a name opens a new record (emitting
//! the previous one), and every other data line extends the open record's
//! address. Separator, header, and blank lines are ignored entirely, so
//! any number of them between two data lines has no effect.
//!
//! The assembler never fails. Content it cannot attach anywhere is
//! dropped and counted in [`ParseStats`].

use serde::Serialize;

use tohon_extract_record_models::OwnerRecord;

use crate::line::LineClass;

/// Per-document parser counters.
///
/// Replaces silent suppression of odd lines with an observable channel:
/// nothing here ever aborts a parse, but a batch report can show how much
/// input was dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Raw lines fed to the assembler.
    pub lines_seen: u64,
    /// Lines classified as table row content.
    pub data_lines: u64,
    /// Data lines whose cells all cleaned to nothing.
    pub empty_data_lines: u64,
    /// Continuation content dropped because no record was open.
    pub orphan_continuations: u64,
}

impl ParseStats {
    /// Adds another document's counters into this one.
    pub const fn merge(&mut self, other: Self) {
        self.lines_seen += other.lines_seen;
        self.data_lines += other.data_lines;
        self.empty_data_lines += other.empty_data_lines;
        self.orphan_continuations += other.orphan_continuations;
    }
}

/// An owner record under construction.
#[derive(Debug)]
struct PendingRecord {
    /// Cleaned name from the row that opened the record.
    name: String,
    /// Cleaned address cells in line order; empty cells are never stored.
    address_parts: Vec<String>,
}

/// Streaming assembler turning classified lines into [`OwnerRecord`]s.
///
/// The jurisdiction must be resolved before the first line is fed, since
/// it is stamped onto each record at finalize time.
#[derive(Debug)]
pub struct RecordAssembler {
    location: String,
    pending: Option<PendingRecord>,
    stats: ParseStats,
}

impl RecordAssembler {
    /// Creates an assembler stamping `location` onto every emitted record.
    #[must_use]
    pub const fn new(location: String) -> Self {
        Self {
            location,
            pending: None,
            stats: ParseStats {
                lines_seen: 0,
                data_lines: 0,
                empty_data_lines: 0,
                orphan_continuations: 0,
            },
        }
    }

    /// Feeds one classified line, returning a record completed by it.
    ///
    /// A record is completed when a later row opens the next one; the last
    /// record of a page or document is only emitted by [`Self::flush`].
    pub fn push_line(&mut self, class: LineClass) -> Option<OwnerRecord> {
        self.stats.lines_seen += 1;

        let LineClass::Data(segments) = class else {
            return None;
        };
        self.stats.data_lines += 1;

        let name = segments.last().map(String::as_str).unwrap_or_default();
        if segments.len() >= 2 && !name.is_empty() {
            // Row boundary: the name cell is populated.
            let finished = self.finalize_pending();
            let mut address_parts = Vec::new();
            if !segments[0].is_empty() {
                address_parts.push(segments[0].clone());
            }
            self.pending = Some(PendingRecord {
                name: name.to_owned(),
                address_parts,
            });
            return finished;
        }

        // Continuation row: only the address cell may carry content.
        let continuation = segments.first().map(String::as_str).unwrap_or_default();
        if continuation.is_empty() {
            self.stats.empty_data_lines += 1;
        } else if let Some(pending) = &mut self.pending {
            pending.address_parts.push(continuation.to_owned());
        } else {
            // No owner to attach the address to.
            self.stats.orphan_continuations += 1;
            log::debug!("dropping ownerless continuation: {continuation}");
        }
        None
    }

    /// Finalizes any record under construction and resets to idle.
    ///
    /// Called at the end of each page and again at the end of the
    /// document. Returns `None` when nothing was pending or the pending
    /// record accumulated no address.
    pub fn flush(&mut self) -> Option<OwnerRecord> {
        self.finalize_pending()
    }

    /// Whether a record is currently under construction.
    #[must_use]
    pub const fn is_accumulating(&self) -> bool {
        self.pending.is_some()
    }

    /// Counters accumulated so far.
    #[must_use]
    pub const fn stats(&self) -> ParseStats {
        self.stats
    }

    fn finalize_pending(&mut self) -> Option<OwnerRecord> {
        let pending = self.pending.take()?;
        if pending.address_parts.is_empty() {
            return None;
        }
        Some(OwnerRecord::new(
            pending.name,
            pending.address_parts.join(" "),
            self.location.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::classify;

    fn feed(assembler: &mut RecordAssembler, lines: &[&str]) -> Vec<OwnerRecord> {
        let mut records = Vec::new();
        for line in lines {
            records.extend(assembler.push_line(classify(line)));
        }
        records.extend(assembler.flush());
        records
    }

    #[test]
    fn continuation_attaches_to_the_earlier_record() {
        let mut assembler = RecordAssembler::new(String::new());
        let records = feed(
            &mut assembler,
            &["AA│ Taro Yamada", " cont line│", "BB│ Hanako Sato"],
        );
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Taro Yamada");
        assert_eq!(records[0].address, "AA cont line");
        assert_eq!(records[1].name, "Hanako Sato");
        assert_eq!(records[1].address, "BB");
    }

    #[test]
    fn separator_lines_between_rows_have_no_effect() {
        let lines_with = ["AA│ Taro Yamada", "━━━━", "BB│ Hanako Sato"];
        let lines_without = ["AA│ Taro Yamada", "BB│ Hanako Sato"];

        let mut with = RecordAssembler::new(String::new());
        let mut without = RecordAssembler::new(String::new());
        assert_eq!(
            feed(&mut with, &lines_with),
            feed(&mut without, &lines_without),
        );
    }

    #[test]
    fn noise_lines_never_touch_the_pending_record() {
        let mut assembler = RecordAssembler::new(String::new());
        let records = feed(
            &mut assembler,
            &[
                "┃東京都千代田区│山田太郎┃",
                "┠────┼────┨",
                "",
                "┃ 住 所 │ 氏 名 ┃",
                "┃丸の内一丁目│┃",
            ],
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].address, "東京都千代田区 丸の内一丁目");
    }

    #[test]
    fn frame_only_name_cell_is_a_continuation() {
        let mut assembler = RecordAssembler::new(String::new());
        let records = feed(&mut assembler, &["AA│ Taro Yamada", "BB│ ┃"]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].address, "AA BB");
    }

    #[test]
    fn ownerless_continuations_are_dropped_and_counted() {
        let mut assembler = RecordAssembler::new(String::new());
        let records = feed(&mut assembler, &["orphan address│", "AA│ Taro Yamada"]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].address, "AA");
        assert_eq!(assembler.stats().orphan_continuations, 1);
    }

    #[test]
    fn pending_record_without_address_is_discarded() {
        let mut assembler = RecordAssembler::new(String::new());
        let records = feed(&mut assembler, &["│ Taro Yamada"]);
        assert!(records.is_empty());
    }

    #[test]
    fn flush_resets_to_idle() {
        let mut assembler = RecordAssembler::new(String::new());
        assembler.push_line(classify("AA│ Taro Yamada"));
        assert!(assembler.is_accumulating());
        assert!(assembler.flush().is_some());
        assert!(!assembler.is_accumulating());
        assert!(assembler.flush().is_none());
    }

    #[test]
    fn records_carry_the_assembler_location() {
        let mut assembler = RecordAssembler::new("東京都千代田区".to_owned());
        let records = feed(&mut assembler, &["AA│ Taro Yamada"]);
        assert_eq!(records[0].location, "東京都千代田区");
    }

    #[test]
    fn records_never_exceed_name_bearing_data_lines() {
        let lines = [
            "AA│ Taro Yamada",
            "cont│",
            "BB│ Hanako Sato",
            "CC│ Jiro Suzuki",
            "cont 2│",
        ];
        let name_bearing = 3;
        let mut assembler = RecordAssembler::new(String::new());
        let records = feed(&mut assembler, &lines);
        assert!(records.len() <= name_bearing);
    }

    #[test]
    fn stats_merge_adds_counters() {
        let mut a = ParseStats {
            lines_seen: 2,
            data_lines: 1,
            empty_data_lines: 0,
            orphan_continuations: 1,
        };
        let b = ParseStats {
            lines_seen: 3,
            data_lines: 2,
            empty_data_lines: 1,
            orphan_continuations: 0,
        };
        a.merge(b);
        assert_eq!(a.lines_seen, 5);
        assert_eq!(a.data_lines, 3);
        assert_eq!(a.empty_data_lines, 1);
        assert_eq!(a.orphan_continuations, 1);
    }
}
