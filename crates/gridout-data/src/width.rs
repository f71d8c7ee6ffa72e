//! Display-width measurement and padding helpers.
//!
//! Widths are measured in terminal display columns, not characters, so
//! CJK and other wide characters count as 2 and padded cells line up in
//! monospaced output.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_width::UnicodeWidthStr;

use crate::typecode::Align;

static LINE_BREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new("[\0\t\r\n]+").unwrap());

/// Display width of a string in terminal columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Pads `text` with spaces to the given display width.
///
/// A width of 0 (or any width the text already exceeds) returns the
/// text unpadded.
pub fn pad_cell(text: &str, width: usize, align: Align) -> String {
    let current = display_width(text);
    if width <= current {
        return text.to_string();
    }
    let pad = width - current;
    match align {
        Align::Left => format!("{}{}", text, " ".repeat(pad)),
        Align::Right => format!("{}{}", " ".repeat(pad), text),
        Align::Center => {
            let left = pad / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
        }
    }
}

/// Collapses runs of control/line-break characters to a single space.
pub fn remove_line_breaks(s: &str) -> Cow<'_, str> {
    LINE_BREAK_RE.replace_all(s, " ")
}
