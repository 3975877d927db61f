//! Line classification and segment cleaning for box-drawing table text.
//!
//! A rendered owner-list table uses three kinds of glyphs: horizontal rule
//! and junction characters drawing the borders between rows, a light
//! vertical divider between the address and name columns, and heavy
//! verticals along the outer frame. This module decides per raw line
//! whether it is table noise or data, and strips the glyphs from data
//! cells down to bare text.

/// Light vertical divider between the address column and the name column.
pub const COLUMN_DIVIDER: char = '│';

/// Heavy vertical used for the outer table frame. Appears alone in the
/// name cell of rows that only continue an address.
const FRAME_GLYPH: char = '┃';

/// Rule and junction glyphs drawing the borders between table rows. A
/// line containing any of these carries no data.
const RULE_GLYPHS: [char; 12] = [
    '┠', '┨', '┝', '┥', '━', '┿', '╂', '╋', '├', '┼', '┤', '─',
];

/// Column-header labels as printed in the table. The typesetting spaces
/// the characters out, so the spaced forms are matched verbatim.
const HEADER_LABELS: [&str; 5] = ["住 所", "持 分", "氏 名", "所 有 者", "共 有 者"];

/// Full-width space, mapped to an ASCII space during cleaning.
const FULL_WIDTH_SPACE: char = '\u{3000}';

/// Classification of one raw line from a registry page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Row border or junction line. Carries no data.
    Separator,
    /// Column-header row. Carries no data.
    HeaderLabel,
    /// Empty after trimming.
    Blank,
    /// Table row content: the ordered cell segments obtained by splitting
    /// on the column divider, each cleaned by [`clean_segment`].
    Data(Vec<String>),
}

/// Classifies a raw line.
#[must_use]
pub fn classify(raw: &str) -> LineClass {
    if raw.chars().any(|c| RULE_GLYPHS.contains(&c)) {
        return LineClass::Separator;
    }
    if HEADER_LABELS.iter().any(|label| raw.contains(label)) {
        return LineClass::HeaderLabel;
    }
    if raw.trim().is_empty() {
        return LineClass::Blank;
    }
    LineClass::Data(raw.split(COLUMN_DIVIDER).map(clean_segment).collect())
}

/// Cleans one cell segment.
///
/// A segment composed solely of drawing glyphs becomes the empty string.
/// Otherwise the frame and divider glyphs are removed, full-width spaces
/// become ASCII spaces, whitespace runs collapse to a single space, and
/// the ends are trimmed. Idempotent: cleaning already-clean text returns
/// it unchanged.
#[must_use]
pub fn clean_segment(segment: &str) -> String {
    if is_pure_separator(segment) {
        return String::new();
    }
    let stripped: String = segment
        .chars()
        .filter(|&c| c != FRAME_GLYPH && c != COLUMN_DIVIDER && c != '┨')
        .map(|c| if c == FULL_WIDTH_SPACE { ' ' } else { c })
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether `segment` contains only drawing glyphs and whitespace (and at
/// least one glyph).
fn is_pure_separator(segment: &str) -> bool {
    let trimmed = segment.trim();
    !trimmed.is_empty()
        && trimmed.chars().all(|c| {
            c == FRAME_GLYPH || c == COLUMN_DIVIDER || c.is_whitespace() || RULE_GLYPHS.contains(&c)
        })
}
