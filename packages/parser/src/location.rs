//! Jurisdiction recovery from the document header.
//!
//! A certified copy opens with a header block whose last line states the
//! data currency (`…現在の情報です。`). The line after it names the
//! jurisdiction followed by the list title, e.g.
//! `東京都千代田区丸の内一丁目　所有者一覧表`. The jurisdiction is the
//! text before the title.

/// Marker on the line preceding the jurisdiction line.
const CURRENCY_MARKER: &str = "現在の情報です。";

/// List title terminating the jurisdiction text.
const OWNER_LIST_TITLE: &str = "所有者一覧表";

/// Scans `lines` in order for the header marker and returns the
/// jurisdiction from the following line.
///
/// Returns `None` when the marker never appears or appears on the final
/// line. The returned string may be empty when the following line starts
/// with the list title.
#[must_use]
pub fn find_location<'a, I>(lines: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut lines = lines.into_iter();
    while let Some(line) = lines.next() {
        if line.contains(CURRENCY_MARKER) {
            let candidate = lines.next()?;
            let location = candidate
                .split(OWNER_LIST_TITLE)
                .next()
                .unwrap_or_default()
                .trim();
            return Some(location.to_owned());
        }
    }
    None
}
