//! Writer configuration.

pub use gridout_data::QuotingFlags;

/// Configuration shared by all table formats.
///
/// Each format supplies its own defaults via
/// [`TableFormat::default_config`](crate::format::TableFormat::default_config);
/// [`WriterConfig::default`] matches the character-framed text table.
/// Reassigning the config on a writer invalidates its preprocessing
/// cache.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriterConfig {
    /// Include the rendered header block.
    pub is_write_header: bool,
    /// Include a rule row between header and body.
    pub is_write_header_separator_row: bool,
    /// Include rule rows between body rows.
    pub is_write_value_separator_row: bool,
    /// Include the leading framing row.
    pub is_write_opening_row: bool,
    /// Include the trailing framing row.
    pub is_write_closing_row: bool,
    /// Pad cell strings to the column width.
    pub is_padding: bool,
    /// Canonicalize real-number display instead of preserving source
    /// formatting.
    pub is_formatting_float: bool,
    /// Collapse embedded control/line-break characters to one space.
    pub is_remove_line_break: bool,
    /// Spaces inserted on each side of a cell, inside the column rules.
    pub margin: usize,
    /// Which value types get quote-wrapped display strings.
    pub quoting: QuotingFlags,
    /// Expected chunk count for iterative writes; -1 means indefinite.
    pub iteration_length: i64,
}

impl Default for WriterConfig {
    fn default() -> Self {
        WriterConfig {
            is_write_header: true,
            is_write_header_separator_row: true,
            is_write_value_separator_row: false,
            is_write_opening_row: false,
            is_write_closing_row: false,
            is_padding: true,
            is_formatting_float: true,
            is_remove_line_break: false,
            margin: 1,
            quoting: QuotingFlags::none(),
            iteration_length: -1,
        }
    }
}
