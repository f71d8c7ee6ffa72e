//! Typed cell classification and column resolution for tabular output.
//!
//! This crate is the value layer underneath the `gridout` table writers.
//! It turns raw, heterogeneous cell values into classified cells carrying
//! a semantic type tag, a display string, a Unicode-aware display width,
//! and an alignment, and aggregates classified cells into per-column
//! descriptors (resolved type, padding width, alignment).
//!
//! The crate performs no I/O and never fails: unrecognized values fall
//! back to the generic string type.

pub mod cell;
pub mod classify;
pub mod column;
pub mod typecode;
pub mod value;
pub mod width;

pub use cell::CellValue;
pub use classify::{Classifier, QuotingFlags};
pub use column::{merge_columns, resolve_columns, ColumnDescriptor};
pub use typecode::{Align, TypeCode};
pub use value::Value;
pub use width::{display_width, pad_cell, remove_line_breaks};
