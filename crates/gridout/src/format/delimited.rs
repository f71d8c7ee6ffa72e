//! Delimited text: CSV and TSV.

use std::io::{self, Write};

use crate::config::{QuotingFlags, WriterConfig};

use super::{PreparedTable, TableFormat};

/// Character-delimited renderer built on the `csv` crate.
///
/// Quoting is handled upstream by the classifier's per-type quoting
/// flags (text-like types are quote-wrapped, numbers stay bare), so the
/// underlying writer is configured to never re-quote. Padding is off:
/// delimited output is column-width-free.
#[derive(Clone, Copy, Debug)]
pub struct DelimitedFormat {
    name: &'static str,
    delimiter: u8,
}

impl DelimitedFormat {
    /// Comma-separated values.
    pub fn csv() -> Self {
        DelimitedFormat {
            name: "csv",
            delimiter: b',',
        }
    }

    /// Tab-separated values.
    pub fn tsv() -> Self {
        DelimitedFormat {
            name: "tsv",
            delimiter: b'\t',
        }
    }
}

impl TableFormat for DelimitedFormat {
    fn name(&self) -> &'static str {
        self.name
    }

    fn supports_iter(&self) -> bool {
        true
    }

    fn default_config(&self) -> WriterConfig {
        WriterConfig {
            is_write_header_separator_row: false,
            is_padding: false,
            margin: 0,
            quoting: QuotingFlags::text_types(),
            ..WriterConfig::default()
        }
    }

    fn render(&self, out: &mut dyn Write, table: &PreparedTable<'_>) -> io::Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(out);
        if table.flags.header && !table.header.is_empty() {
            writer
                .write_record(table.header)
                .map_err(io::Error::other)?;
        }
        for row in table.rows {
            writer.write_record(row).map_err(io::Error::other)?;
        }
        writer.flush()
    }
}
