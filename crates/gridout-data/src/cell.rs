//! Classified cells: the output of the value classifier.

use crate::typecode::{Align, TypeCode};
use crate::width::display_width;

/// One classified cell: a type tag plus a display-ready string.
///
/// Immutable once produced; the owning writer recomputes cells whenever
/// the underlying matrix changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellValue {
    /// Semantic type tag.
    pub type_code: TypeCode,
    /// Display string, already quote-wrapped when the classifier's
    /// quoting flags say so.
    pub text: String,
    /// Display width of `text` in terminal columns.
    pub width: usize,
    /// Alignment derived from the type tag.
    pub align: Align,
}

impl CellValue {
    /// Build a cell from a type tag and its final display string.
    pub fn new(type_code: TypeCode, text: String) -> Self {
        let width = display_width(&text);
        CellValue {
            type_code,
            width,
            align: type_code.align(),
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_measures_display_width() {
        let cell = CellValue::new(TypeCode::String, "日本".to_string());
        assert_eq!(cell.width, 4);
        assert_eq!(cell.align, Align::Left);
    }

    #[test]
    fn test_numeric_cell_right_aligns() {
        let cell = CellValue::new(TypeCode::Integer, "42".to_string());
        assert_eq!(cell.align, Align::Right);
    }
}
