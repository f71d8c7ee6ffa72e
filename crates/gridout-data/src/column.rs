//! Column descriptors and the column type resolver.

use crate::cell::CellValue;
use crate::typecode::{Align, TypeCode};

/// Minimum padding width of any resolved column.
const MIN_COLUMN_WIDTH: usize = 1;

/// Aggregate per-column metadata derived from every classified cell in
/// the column (header included).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Resolved type tag: the most specific common supertype of the
    /// non-null cells, or the hinted type when a hint applied.
    pub type_code: TypeCode,
    /// Padding width: the widest display width observed in the column.
    pub width: usize,
    /// Column alignment, derived from the resolved type.
    pub align: Align,
}

impl ColumnDescriptor {
    /// Resolve one column from its header cell (if any) and its value
    /// cells. Absent data yields a width-1 string column.
    pub fn resolve<'a>(
        header: Option<&CellValue>,
        cells: impl Iterator<Item = &'a CellValue>,
    ) -> Self {
        let mut type_code: Option<TypeCode> = None;
        let mut width = header.map(|h| h.width).unwrap_or(0);
        for cell in cells {
            width = width.max(cell.width);
            if !cell.type_code.is_null() {
                type_code = Some(match type_code {
                    Some(code) => code.unify(cell.type_code),
                    None => cell.type_code,
                });
            }
        }
        let type_code = type_code.unwrap_or(TypeCode::String);
        ColumnDescriptor {
            type_code,
            width: width.max(MIN_COLUMN_WIDTH),
            align: type_code.align(),
        }
    }

    /// Merge with a descriptor resolved from a newer chunk: the type is
    /// re-unified and the width only ever grows.
    pub fn merge(&self, newer: &ColumnDescriptor) -> ColumnDescriptor {
        let type_code = self.type_code.unify(newer.type_code);
        ColumnDescriptor {
            type_code,
            width: self.width.max(newer.width),
            align: type_code.align(),
        }
    }

    /// Extend the padding width in place. Used once per writer reset to
    /// add visual breathing room.
    pub fn extend_width(&mut self, extra: usize) {
        self.width += extra;
    }
}

/// Resolve all `column_count` columns of a classified matrix.
pub fn resolve_columns(
    header: &[CellValue],
    rows: &[Vec<CellValue>],
    column_count: usize,
) -> Vec<ColumnDescriptor> {
    (0..column_count)
        .map(|col| {
            ColumnDescriptor::resolve(
                header.get(col),
                rows.iter().filter_map(move |row| row.get(col)),
            )
        })
        .collect()
}

/// Merge a previously accumulated descriptor list with one resolved
/// from a newer chunk. Widths grow monotonically; extra columns from
/// either side are kept as-is.
pub fn merge_columns(
    previous: &[ColumnDescriptor],
    fresh: Vec<ColumnDescriptor>,
) -> Vec<ColumnDescriptor> {
    let count = previous.len().max(fresh.len());
    (0..count)
        .map(|col| match (previous.get(col), fresh.get(col)) {
            (Some(prev), Some(new)) => prev.merge(new),
            (Some(prev), None) => prev.clone(),
            (None, Some(new)) => new.clone(),
            (None, None) => unreachable!("column index within max of both lengths"),
        })
        .collect()
}
