pub mod groups;
pub mod ledger;

use unicode_width::UnicodeWidthStr;

/// Pad `text` on the left to `width` terminal columns.
pub(crate) fn pad_left(text: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(text);
    format!("{}{}", " ".repeat(width.saturating_sub(w)), text)
}

/// Pad `text` on the right to `width` terminal columns.
pub(crate) fn pad_right(text: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(w)))
}
