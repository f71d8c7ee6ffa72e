//! JSON array-of-objects output.

use std::io::{self, Write};

use crate::config::WriterConfig;

use super::{PreparedTable, TableFormat};

/// Renders each row as a JSON object keyed by the header names.
///
/// The opening `[` and closing `]` are ordinary framing rows, and the
/// chunk separator is a `,`, which is what makes this format
/// iterable: only the first chunk opens the array and only the final
/// chunk (when the iteration length is known) closes it. Booleans and
/// numbers are emitted bare; everything else is JSON-escaped.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonFormat;

impl JsonFormat {
    pub fn new() -> Self {
        JsonFormat
    }

    fn write_row(
        &self,
        out: &mut dyn Write,
        header: &[String],
        row: &[String],
    ) -> io::Result<()> {
        write!(out, "{{")?;
        for (i, (key, cell)) in header.iter().zip(row).enumerate() {
            if i > 0 {
                write!(out, ", ")?;
            }
            write!(out, "{}: {}", json_string(key), json_value(cell))?;
        }
        write!(out, "}}")
    }
}

impl TableFormat for JsonFormat {
    fn name(&self) -> &'static str {
        "json"
    }

    fn supports_iter(&self) -> bool {
        true
    }

    fn requires_header(&self) -> bool {
        true
    }

    fn default_config(&self) -> WriterConfig {
        WriterConfig {
            is_write_header_separator_row: false,
            is_write_opening_row: true,
            is_write_closing_row: true,
            is_padding: false,
            margin: 0,
            ..WriterConfig::default()
        }
    }

    fn render(&self, out: &mut dyn Write, table: &PreparedTable<'_>) -> io::Result<()> {
        if table.flags.opening_row {
            writeln!(out, "[")?;
        }
        for (i, row) in table.rows.iter().enumerate() {
            if i > 0 {
                writeln!(out, ",")?;
            }
            self.write_row(out, table.header, row)?;
        }
        if table.flags.closing_row {
            writeln!(out)?;
            writeln!(out, "]")?;
        }
        Ok(())
    }

    fn render_row_separator(
        &self,
        out: &mut dyn Write,
        _table: &PreparedTable<'_>,
    ) -> io::Result<()> {
        writeln!(out, ",")
    }
}

/// JSON-escape a string.
fn json_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

/// Pick the JSON form for one prepared cell: empty cells are `null`,
/// booleans and parseable numbers stay bare, the rest is escaped.
fn json_value(cell: &str) -> String {
    if cell.is_empty() {
        return "null".to_string();
    }
    if cell == "true" || cell == "false" {
        return cell.to_string();
    }
    if cell.parse::<i64>().is_ok() {
        return cell.to_string();
    }
    if let Ok(f) = cell.parse::<f64>() {
        if f.is_finite() {
            return cell.to_string();
        }
    }
    json_string(cell)
}
