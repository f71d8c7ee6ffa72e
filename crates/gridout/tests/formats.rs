//! Rendered output per format.

use gridout::{
    DelimitedFormat, HtmlFormat, JsonFormat, MarkdownFormat, TableFormat, TableWriter,
    TextTableFormat, Value, WriterConfig,
};

fn sample_writer<F: TableFormat>(format: F) -> TableWriter<F> {
    let mut writer = TableWriter::new(format);
    writer.set_header(["name", "count"]);
    writer.set_value_matrix(vec![
        vec!["alpha".into(), 10.into()],
        vec!["beta".into(), 2.into()],
    ]);
    writer
}

#[test]
fn markdown_table() {
    let rendered = sample_writer(MarkdownFormat::new()).dumps().unwrap();
    assert_eq!(
        rendered,
        "| name  | count |\n\
         |-------|------:|\n\
         | alpha |    10 |\n\
         | beta  |     2 |\n"
    );
}

#[test]
fn markdown_name_is_a_heading() {
    let mut writer = sample_writer(MarkdownFormat::new());
    writer.set_table_name("metrics");
    let rendered = writer.dumps().unwrap();
    assert!(rendered.starts_with("# metrics\n| name  | count |\n"));
}

#[test]
fn csv_table() {
    let rendered = sample_writer(DelimitedFormat::csv()).dumps().unwrap();
    assert_eq!(rendered, "\"name\",\"count\"\n\"alpha\",10\n\"beta\",2\n");
}

#[test]
fn csv_quotes_empty_strings() {
    let mut writer = TableWriter::new(DelimitedFormat::csv());
    writer.set_header(["a", "b"]);
    writer.set_value_matrix(vec![vec!["".into(), 1.into()]]);
    let rendered = writer.dumps().unwrap();
    assert_eq!(rendered, "\"a\",\"b\"\n\"\",1\n");
}

#[test]
fn tsv_table() {
    let rendered = sample_writer(DelimitedFormat::tsv()).dumps().unwrap();
    assert_eq!(rendered, "\"name\"\t\"count\"\n\"alpha\"\t10\n\"beta\"\t2\n");
}

#[test]
fn json_table() {
    let rendered = sample_writer(JsonFormat::new()).dumps().unwrap();
    assert_eq!(
        rendered,
        "[\n\
         {\"name\": \"alpha\", \"count\": 10},\n\
         {\"name\": \"beta\", \"count\": 2}\n\
         ]\n"
    );
}

#[test]
fn json_value_typing() {
    let mut writer = TableWriter::new(JsonFormat::new());
    writer.set_header(["s", "i", "f", "b", "missing"]);
    writer.set_value_matrix(vec![vec![
        "x\"y".into(),
        1.into(),
        1.5.into(),
        true.into(),
        Value::None,
    ]]);
    let rendered = writer.dumps().unwrap();
    assert_eq!(
        rendered,
        "[\n\
         {\"s\": \"x\\\"y\", \"i\": 1, \"f\": 1.5, \"b\": true, \"missing\": null}\n\
         ]\n"
    );
}

#[test]
fn html_table() {
    let mut writer = sample_writer(HtmlFormat::new());
    writer.set_table_name("inventory");
    let rendered = writer.dumps().unwrap();

    assert!(rendered.starts_with("<table id=\"inventory\">"));
    assert!(rendered.contains("<th>name</th>"));
    assert!(rendered.contains("<td>alpha</td>"));
    assert!(rendered.contains("<td align=\"right\">10</td>"));
    assert!(rendered.ends_with("</table>\n"));
}

#[test]
fn html_without_header_has_no_thead() {
    let mut writer = TableWriter::new(HtmlFormat::new());
    writer.set_value_matrix(vec![vec![1.into()]]);
    let rendered = writer.dumps().unwrap();
    assert!(!rendered.contains("<thead>"));
    assert!(rendered.contains("<tbody>"));
}

#[test]
fn float_formatting_toggle() {
    let mut writer = TableWriter::new(TextTableFormat::new());
    writer.set_header(["f"]);
    writer.set_value_matrix(vec![vec!["1.20".into()]]);
    assert!(writer.dumps().unwrap().contains("| 1.2 |"));

    writer.set_config(WriterConfig {
        is_formatting_float: false,
        ..TextTableFormat::new().default_config()
    });
    assert!(writer.dumps().unwrap().contains("| 1.20 |"));
}

#[test]
fn text_value_separator_rows() {
    let mut writer = sample_writer(TextTableFormat::new());
    writer.set_config(WriterConfig {
        is_write_value_separator_row: true,
        ..TextTableFormat::new().default_config()
    });
    let rendered = writer.dumps().unwrap();
    assert_eq!(
        rendered,
        "+-------+-------+\n\
         | name  | count |\n\
         +-------+-------+\n\
         | alpha |    10 |\n\
         +-------+-------+\n\
         | beta  |     2 |\n\
         +-------+-------+\n"
    );
}

#[test]
fn padding_off_strips_cell_alignment() {
    let mut writer = sample_writer(TextTableFormat::new());
    writer.set_config(WriterConfig {
        is_padding: false,
        margin: 0,
        ..TextTableFormat::new().default_config()
    });
    let rendered = writer.dumps().unwrap();
    assert!(rendered.contains("|alpha|10|"));
}
