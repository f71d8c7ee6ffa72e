//! GitHub-flavored Markdown tables.

use std::io::{self, Write};

use gridout_data::Align;

use crate::config::WriterConfig;

use super::{write_framed_row, PreparedTable, TableFormat};

/// Markdown table renderer.
///
/// A table name renders as an ATX heading above the table. The
/// alignment rule row encodes each column's resolved alignment
/// (`---`, `--:`, `:-:`). Headers are mandatory in this format.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkdownFormat;

impl MarkdownFormat {
    pub fn new() -> Self {
        MarkdownFormat
    }

    fn write_alignment_rule(
        &self,
        out: &mut dyn Write,
        table: &PreparedTable<'_>,
    ) -> io::Result<()> {
        write!(out, "|")?;
        for column in table.columns {
            // The rule cell spans the margins too, and needs at least
            // three characters to stay valid Markdown.
            let span = (column.width + 2 * table.margin).max(3);
            let cell = match column.align {
                Align::Left => "-".repeat(span),
                Align::Right => format!("{}:", "-".repeat(span - 1)),
                Align::Center => format!(":{}:", "-".repeat(span - 2)),
            };
            write!(out, "{cell}|")?;
        }
        writeln!(out)
    }
}

impl TableFormat for MarkdownFormat {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn supports_iter(&self) -> bool {
        true
    }

    fn requires_header(&self) -> bool {
        true
    }

    fn default_config(&self) -> WriterConfig {
        WriterConfig::default()
    }

    fn render(&self, out: &mut dyn Write, table: &PreparedTable<'_>) -> io::Result<()> {
        if table.flags.header {
            if let Some(name) = table.name {
                writeln!(out, "# {name}")?;
            }
            write_framed_row(out, table.header, table.margin)?;
            if table.flags.header_separator {
                self.write_alignment_rule(out, table)?;
            }
        }
        for row in table.rows {
            write_framed_row(out, row, table.margin)?;
        }
        Ok(())
    }
}
