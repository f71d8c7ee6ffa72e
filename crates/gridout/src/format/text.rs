//! Character-framed plain-text tables.

use std::io::{self, Write};

use crate::config::WriterConfig;

use super::{write_framed_row, PreparedTable, TableFormat};

/// The rule characters framing a text table.
#[derive(Clone, Copy, Debug)]
pub struct RuleChars {
    /// Fill character of horizontal rules.
    pub horizontal: char,
    /// Column separator inside data rows.
    pub vertical: char,
    /// Junction character where rules meet.
    pub cross: char,
}

impl Default for RuleChars {
    fn default() -> Self {
        RuleChars {
            horizontal: '-',
            vertical: '|',
            cross: '+',
        }
    }
}

/// Character-framed text table:
///
/// ```text
/// +---+---+
/// | a | b |
/// +---+---+
/// | 1 | 2 |
/// | 3 | 4 |
/// +---+---+
/// ```
///
/// Opening and closing rows, the header rule, and per-row rules are all
/// controlled by the writer configuration. Supports iterative writing;
/// only the first chunk carries the opening row and header.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextTableFormat {
    rule: RuleChars,
}

impl TextTableFormat {
    pub fn new() -> Self {
        TextTableFormat::default()
    }

    /// Override the rule characters.
    pub fn with_rule(rule: RuleChars) -> Self {
        TextTableFormat { rule }
    }

    /// One horizontal rule row sized to the column widths.
    fn write_rule(&self, out: &mut dyn Write, table: &PreparedTable<'_>) -> io::Result<()> {
        write!(out, "{}", self.rule.cross)?;
        for column in table.columns {
            let span = column.width + 2 * table.margin;
            for _ in 0..span {
                write!(out, "{}", self.rule.horizontal)?;
            }
            write!(out, "{}", self.rule.cross)?;
        }
        writeln!(out)
    }
}

impl TableFormat for TextTableFormat {
    fn name(&self) -> &'static str {
        "text"
    }

    fn supports_iter(&self) -> bool {
        true
    }

    fn default_config(&self) -> WriterConfig {
        WriterConfig {
            is_write_opening_row: true,
            is_write_closing_row: true,
            ..WriterConfig::default()
        }
    }

    fn render(&self, out: &mut dyn Write, table: &PreparedTable<'_>) -> io::Result<()> {
        if table.flags.header {
            if let Some(name) = table.name {
                writeln!(out, "# {name}")?;
            }
        }
        if table.flags.opening_row {
            self.write_rule(out, table)?;
        }
        if table.flags.header && !table.header.is_empty() {
            write_framed_row(out, table.header, table.margin)?;
            if table.flags.header_separator {
                self.write_rule(out, table)?;
            }
        }
        for (i, row) in table.rows.iter().enumerate() {
            if i > 0 && table.flags.value_separator {
                self.write_rule(out, table)?;
            }
            write_framed_row(out, row, table.margin)?;
        }
        if table.flags.closing_row {
            self.write_rule(out, table)?;
        }
        Ok(())
    }

    fn render_row_separator(
        &self,
        out: &mut dyn Write,
        table: &PreparedTable<'_>,
    ) -> io::Result<()> {
        if table.flags.value_separator {
            self.write_rule(out, table)?;
        }
        Ok(())
    }
}
