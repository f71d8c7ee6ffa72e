//! Table writers with typed preprocessing and iterative emission.
//!
//! `gridout` renders an in-memory tabular dataset (a name, a header
//! row, and a matrix of raw values) into one of several text formats.
//! Cell values are classified per type, columns resolve to a dominant
//! type with a shared padding width, and the rendered grids are cached
//! until the table data changes. Large tables can be emitted
//! iteratively, one row-group chunk at a time, with column widths
//! growing monotonically across chunks.
//!
//! ```rust
//! use gridout::{TableWriter, TextTableFormat};
//!
//! let mut writer = TableWriter::new(TextTableFormat::new());
//! writer.set_header(["a", "b"]);
//! writer.set_value_matrix(vec![
//!     vec![1.into(), 2.into()],
//!     vec![3.into(), 4.into()],
//! ]);
//! let rendered = writer.dumps().unwrap();
//! assert!(rendered.contains("| 1 | 2 |"));
//! ```

pub mod config;
pub mod error;
pub mod format;
mod pipeline;
pub mod stream;
pub mod writer;

pub use config::{QuotingFlags, WriterConfig};
pub use error::{Error, Result};
pub use format::{
    DelimitedFormat, EmitFlags, HtmlFormat, JsonFormat, MarkdownFormat, PreparedTable,
    TableFormat, TextTableFormat,
};
pub use stream::Output;
pub use writer::{TableWriter, WriteCallback};

// The value layer, re-exported so callers need only one crate.
pub use gridout_data::{Align, CellValue, ColumnDescriptor, TypeCode, Value};
