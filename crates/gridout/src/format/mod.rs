//! The format interface and the built-in renderers.
//!
//! A format consumes the prepared header/value string grids (already
//! typed, aligned, padded, and line-break-cleaned by the preprocessing
//! pipeline) and serializes them with format-specific framing. Formats
//! do not validate their own output grammar; that responsibility stays
//! with each renderer's consumers.

mod delimited;
mod html;
mod json;
mod markdown;
mod text;

pub use delimited::DelimitedFormat;
pub use html::HtmlFormat;
pub use json::JsonFormat;
pub use markdown::MarkdownFormat;
pub use text::TextTableFormat;

use std::io::{self, Write};

use gridout_data::ColumnDescriptor;

use crate::config::WriterConfig;

/// Snapshot of the emission flags for one render call.
///
/// During iterative writing the writer rewrites these between chunks
/// (header and opening row only on the first chunk, closing row only on
/// the final one), so renderers must consult the snapshot rather than
/// the writer configuration.
#[derive(Clone, Copy, Debug)]
pub struct EmitFlags {
    pub header: bool,
    pub header_separator: bool,
    pub value_separator: bool,
    pub opening_row: bool,
    pub closing_row: bool,
}

/// Everything a renderer receives: the prepared string grids plus the
/// resolved column metadata for formats that need width, alignment, or
/// type information directly (e.g. to draw borders).
#[derive(Clone, Copy, Debug)]
pub struct PreparedTable<'a> {
    pub name: Option<&'a str>,
    pub header: &'a [String],
    pub rows: &'a [Vec<String>],
    pub columns: &'a [ColumnDescriptor],
    pub margin: usize,
    pub flags: EmitFlags,
}

/// Capability interface implemented once per output format.
pub trait TableFormat {
    /// Short format name, used in capability errors and logs.
    fn name(&self) -> &'static str;

    /// Whether the format can split a table across multiple render
    /// calls (iterative writing).
    fn supports_iter(&self) -> bool {
        false
    }

    /// Whether a blank table name is a configuration error.
    fn requires_table_name(&self) -> bool {
        false
    }

    /// Whether an absent header is a configuration error.
    fn requires_header(&self) -> bool {
        false
    }

    /// The writer configuration this format starts from.
    fn default_config(&self) -> WriterConfig {
        WriterConfig::default()
    }

    /// Serialize one prepared table (or one chunk of it).
    fn render(&self, out: &mut dyn Write, table: &PreparedTable<'_>) -> io::Result<()>;

    /// Separator emitted between the chunks of an iterative write.
    fn render_row_separator(
        &self,
        _out: &mut dyn Write,
        _table: &PreparedTable<'_>,
    ) -> io::Result<()> {
        Ok(())
    }
}

/// Writes one `|`-framed row with `margin` spaces inside each rule.
pub(crate) fn write_framed_row(
    out: &mut dyn Write,
    cells: &[String],
    margin: usize,
) -> io::Result<()> {
    let pad = " ".repeat(margin);
    write!(out, "|")?;
    for cell in cells {
        write!(out, "{pad}{cell}{pad}|")?;
    }
    writeln!(out)
}
