//! Lossy-safe text decoding for source file bytes.
//!
//! Registry text exported by municipal systems arrives in UTF-8 or one of
//! the legacy Japanese encodings (CP932, EUC-JP). Decoding tries each in
//! turn and never fails: on total failure the bytes are decoded as lossy
//! UTF-8, so one badly-encoded file degrades to replacement characters
//! instead of aborting a batch.

use std::borrow::Cow;

use encoding_rs::{EUC_JP, SHIFT_JIS};

/// Decodes `bytes` with the fallback chain UTF-8 → CP932 → EUC-JP →
/// lossy UTF-8.
#[must_use]
pub fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(text);
    }

    // encoding_rs's Shift_JIS implementation covers the CP932 superset.
    for encoding in [SHIFT_JIS, EUC_JP] {
        let (text, _, had_errors) = encoding.decode(bytes);
        if !had_errors {
            log::debug!("decoded {} byte(s) as {}", bytes.len(), encoding.name());
            return text;
        }
    }

    log::warn!("no encoding decoded cleanly; falling back to lossy UTF-8");
    String::from_utf8_lossy(bytes)
}
