//! HTML tables via the quick-xml event writer.

use std::io::{self, Write};

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer as XmlWriter;

use gridout_data::Align;

use crate::config::WriterConfig;

use super::{PreparedTable, TableFormat};

/// `<table>`/`<thead>`/`<tbody>` renderer.
///
/// The table name becomes the `id` attribute of the `<table>` element.
/// Right- and center-aligned columns carry an `align` attribute on
/// their cells. HTML cannot be split mid-table, so this format does not
/// support iterative writing.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlFormat;

impl HtmlFormat {
    pub fn new() -> Self {
        HtmlFormat
    }
}

fn emit(writer: &mut XmlWriter<&mut dyn Write>, event: Event<'_>) -> io::Result<()> {
    writer.write_event(event).map_err(io::Error::other)
}

fn cell_start(tag: &'static str, align: Align) -> BytesStart<'static> {
    let mut start = BytesStart::new(tag);
    match align {
        Align::Right => start.push_attribute(("align", "right")),
        Align::Center => start.push_attribute(("align", "center")),
        Align::Left => {}
    }
    start
}

impl TableFormat for HtmlFormat {
    fn name(&self) -> &'static str {
        "html"
    }

    fn default_config(&self) -> WriterConfig {
        WriterConfig {
            is_padding: false,
            margin: 0,
            ..WriterConfig::default()
        }
    }

    fn render(&self, out: &mut dyn Write, table: &PreparedTable<'_>) -> io::Result<()> {
        let mut writer = XmlWriter::new_with_indent(out, b' ', 2);

        let mut table_start = BytesStart::new("table");
        if let Some(name) = table.name {
            table_start.push_attribute(("id", name));
        }
        emit(&mut writer, Event::Start(table_start))?;

        if table.flags.header && !table.header.is_empty() {
            emit(&mut writer, Event::Start(BytesStart::new("thead")))?;
            emit(&mut writer, Event::Start(BytesStart::new("tr")))?;
            for cell in table.header {
                emit(&mut writer, Event::Start(BytesStart::new("th")))?;
                emit(&mut writer, Event::Text(BytesText::new(cell)))?;
                emit(&mut writer, Event::End(BytesEnd::new("th")))?;
            }
            emit(&mut writer, Event::End(BytesEnd::new("tr")))?;
            emit(&mut writer, Event::End(BytesEnd::new("thead")))?;
        }

        emit(&mut writer, Event::Start(BytesStart::new("tbody")))?;
        for row in table.rows {
            emit(&mut writer, Event::Start(BytesStart::new("tr")))?;
            for (col, cell) in row.iter().enumerate() {
                let align = table
                    .columns
                    .get(col)
                    .map(|c| c.align)
                    .unwrap_or(Align::Left);
                emit(&mut writer, Event::Start(cell_start("td", align)))?;
                emit(&mut writer, Event::Text(BytesText::new(cell)))?;
                emit(&mut writer, Event::End(BytesEnd::new("td")))?;
            }
            emit(&mut writer, Event::End(BytesEnd::new("tr")))?;
        }
        emit(&mut writer, Event::End(BytesEnd::new("tbody")))?;
        emit(&mut writer, Event::End(BytesEnd::new("table")))?;

        let out = writer.into_inner();
        writeln!(out)
    }
}
