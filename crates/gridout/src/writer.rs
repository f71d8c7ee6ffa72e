//! The table writer: configuration, verification, and the two write
//! protocols.
//!
//! A writer moves through four states: unconfigured, configured
//! (header/values/hints set), preprocessed (pipeline stages cached),
//! and written. Written is not terminal; any mutation of the table data
//! drops the writer back to configured by invalidating the cache, and
//! it can be written again.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use gridout_data::{Classifier, TypeCode, Value};

use crate::config::WriterConfig;
use crate::error::{Error, Result};
use crate::format::{EmitFlags, PreparedTable, TableFormat};
use crate::pipeline::{Pipeline, StageInput};
use crate::stream::Output;

/// Callback invoked after each chunk of an iterative write, with the
/// 1-based chunk number and the configured iteration length.
pub type WriteCallback = Box<dyn FnMut(usize, i64)>;

/// Writes one table snapshot (name, header, value matrix) to an output
/// stream in the format given at construction.
pub struct TableWriter<F: TableFormat> {
    format: F,
    config: WriterConfig,
    table_name: Option<String>,
    header: Vec<String>,
    rows: Vec<Vec<Value>>,
    type_hints: Vec<Option<TypeCode>>,
    pipeline: Pipeline,
    stream: Option<Output>,
    iter_count: Option<usize>,
    write_callback: Option<WriteCallback>,
}

impl<F: TableFormat> TableWriter<F> {
    /// A writer over the format's default configuration, targeting
    /// standard output.
    pub fn new(format: F) -> Self {
        let config = format.default_config();
        TableWriter {
            format,
            config,
            table_name: None,
            header: Vec::new(),
            rows: Vec::new(),
            type_hints: Vec::new(),
            pipeline: Pipeline::default(),
            stream: Some(Output::Stdout),
            iter_count: None,
            write_callback: None,
        }
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Replace the configuration. Invalidates the preprocessing cache.
    pub fn set_config(&mut self, config: WriterConfig) {
        self.config = config;
        self.pipeline.invalidate();
    }

    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref()
    }

    pub fn set_table_name(&mut self, name: impl Into<String>) {
        self.table_name = Some(name.into());
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Replace the header row. Invalidates the preprocessing cache.
    pub fn set_header<S: Into<String>, I: IntoIterator<Item = S>>(&mut self, header: I) {
        self.header = header.into_iter().map(|s| s.into()).collect();
        self.pipeline.invalidate();
    }

    pub fn value_matrix(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Replace the value matrix. Invalidates the preprocessing cache.
    pub fn set_value_matrix(&mut self, rows: Vec<Vec<Value>>) {
        self.rows = rows;
        self.pipeline.invalidate();
    }

    /// Replace the per-column type hints. Invalidates the preprocessing
    /// cache.
    pub fn set_type_hints(&mut self, hints: Vec<Option<TypeCode>>) {
        self.type_hints = hints;
        self.pipeline.invalidate();
    }

    /// Redirect output. The previous stream is dropped unclosed.
    pub fn set_output(&mut self, output: Output) {
        self.stream = Some(output);
    }

    /// Detach and return the output stream, leaving the writer without
    /// one (subsequent writes fail with a null-stream error). Used to
    /// retrieve an in-memory buffer after writing into it.
    pub fn take_output(&mut self) -> Option<Output> {
        self.stream.take()
    }

    /// Set the per-chunk progress callback for iterative writes.
    pub fn set_write_callback<C: FnMut(usize, i64) + 'static>(&mut self, callback: C) {
        self.write_callback = Some(Box::new(callback));
    }

    /// Write the whole table in a single pass.
    ///
    /// Verifies the writer configuration first; verification failures
    /// abort before any output is produced. A present header with an
    /// empty value matrix is not an error and renders header-only
    /// output.
    pub fn write_table(&mut self) -> Result<()> {
        debug!(
            "start write: format={} table={:?}",
            self.format.name(),
            self.table_name
        );
        self.verify()?;
        self.render_once()?;
        debug!("complete write: format={}", self.format.name());
        Ok(())
    }

    /// Write the table as a sequence of row-group chunks.
    ///
    /// Only the first chunk carries the opening row and header; the
    /// closing row is forced onto the chunk whose 1-based index reaches
    /// the configured iteration length (and is otherwise omitted, since
    /// an indefinite iteration never knows its final chunk). The
    /// header/opening/closing flags are restored on every exit path,
    /// including render failures, and the iteration counter cleared.
    pub fn write_table_iter<I>(&mut self, chunks: I) -> Result<()>
    where
        I: IntoIterator<Item = Vec<Vec<Value>>>,
    {
        if !self.format.supports_iter() {
            return Err(Error::NotSupported(self.format.name()));
        }
        self.verify_table_name()?;
        self.verify_stream()?;
        self.verify_header()?;
        debug!(
            "start iterative write: format={} iteration-length={}",
            self.format.name(),
            self.config.iteration_length
        );

        let stash = (
            self.config.is_write_header,
            self.config.is_write_opening_row,
            self.config.is_write_closing_row,
        );
        self.iter_count = Some(1);
        let result = self.write_chunks(chunks);
        self.config.is_write_header = stash.0;
        self.config.is_write_opening_row = stash.1;
        self.config.is_write_closing_row = stash.2;
        self.iter_count = None;

        if result.is_ok() {
            debug!("complete write: format={}", self.format.name());
        }
        result
    }

    fn write_chunks<I>(&mut self, chunks: I) -> Result<()>
    where
        I: IntoIterator<Item = Vec<Vec<Value>>>,
    {
        self.config.is_write_closing_row = false;
        let mut wrote_any = false;

        for chunk in chunks {
            wrote_any = true;
            let count = self.iter_count.unwrap_or(1);
            let is_final = self.config.iteration_length > 0
                && count as i64 >= self.config.iteration_length;

            if is_final {
                self.config.is_write_closing_row = true;
            }

            self.rows = chunk;
            self.pipeline.begin_chunk();
            self.render_once()?;

            if !is_final {
                self.render_separator()?;
            }

            self.config.is_write_opening_row = false;
            self.config.is_write_header = false;

            let length = self.config.iteration_length;
            if let Some(callback) = self.write_callback.as_mut() {
                callback(count, length);
            }

            if is_final {
                break;
            }
            self.iter_count = Some(count + 1);
        }

        if !wrote_any && self.header.is_empty() {
            return Err(Error::EmptyTableData);
        }
        Ok(())
    }

    /// Render the current table to a string instead of the configured
    /// stream. The stream is left untouched.
    pub fn dumps(&mut self) -> Result<String> {
        let saved = self.stream.take();
        self.stream = Some(Output::Buffer(Vec::new()));
        let result = self.write_table();
        let buffer = self.stream.take();
        self.stream = saved;
        result?;
        match buffer {
            Some(Output::Buffer(bytes)) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            _ => Ok(String::new()),
        }
    }

    /// Render the current table to a file, replacing the configured
    /// stream, and optionally close it afterwards.
    pub fn dump<P: AsRef<Path>>(&mut self, path: P, close_after_write: bool) -> Result<()> {
        let file = File::create(path)?;
        self.stream = Some(Output::sink(BufWriter::new(file)));
        let result = self.write_table();
        if close_after_write {
            self.close();
        }
        result
    }

    /// Close the output stream. Idempotent; a no-op for the standard
    /// streams, which stay attached. Anything else is flushed, dropped,
    /// and the stream reference cleared, so later writes fail with a
    /// null-stream error instead of going nowhere.
    pub fn close(&mut self) {
        match self.stream.take() {
            None => {}
            Some(output @ (Output::Stdout | Output::Stderr)) => {
                self.stream = Some(output);
            }
            Some(Output::Buffer(_)) => {}
            Some(Output::Sink(mut sink)) => {
                if let Err(err) = sink.flush() {
                    debug!("flush on close failed: {err}");
                }
            }
        }
    }

    /// Run the preprocessing pipeline and expose the prepared grids,
    /// for renderers and callers needing direct access to the cached
    /// artifacts.
    pub fn prepare(&mut self) -> PreparedTable<'_> {
        self.preprocess();
        self.prepared_view()
    }

    fn render_once(&mut self) -> Result<()> {
        self.preprocess();
        let mut out = self.stream.take().ok_or(Error::NullStream)?;
        let result = self.format.render(&mut out, &self.prepared_view());
        self.stream = Some(out);
        result?;
        Ok(())
    }

    fn render_separator(&mut self) -> Result<()> {
        let mut out = self.stream.take().ok_or(Error::NullStream)?;
        let result = self
            .format
            .render_row_separator(&mut out, &self.prepared_view());
        self.stream = Some(out);
        result?;
        Ok(())
    }

    fn preprocess(&mut self) {
        let classifier = Classifier {
            is_formatting_float: self.config.is_formatting_float,
            quoting: self.config.quoting.clone(),
        };
        self.pipeline.run(&StageInput {
            header: &self.header,
            rows: &self.rows,
            type_hints: &self.type_hints,
            classifier,
            is_padding: self.config.is_padding,
            is_remove_line_break: self.config.is_remove_line_break,
            iter_count: self.iter_count,
        });
    }

    fn prepared_view(&self) -> PreparedTable<'_> {
        PreparedTable {
            name: self.table_name.as_deref(),
            header: self.pipeline.header_strings(),
            rows: self.pipeline.value_strings(),
            columns: self.pipeline.columns(),
            margin: self.config.margin,
            flags: EmitFlags {
                header: self.config.is_write_header,
                header_separator: self.config.is_write_header_separator_row,
                value_separator: self.config.is_write_value_separator_row,
                opening_row: self.config.is_write_opening_row,
                closing_row: self.config.is_write_closing_row,
            },
        }
    }

    /// Single-shot verification, in order: table name, stream, combined
    /// emptiness (header, values, and classified matrix all absent),
    /// header requiredness. An empty value matrix alone is tolerated.
    fn verify(&self) -> Result<()> {
        self.verify_table_name()?;
        self.verify_stream()?;
        if self.header.is_empty()
            && self.rows.is_empty()
            && self.pipeline.classified_row_count() == 0
        {
            return Err(Error::EmptyTableData);
        }
        self.verify_header()
    }

    fn verify_table_name(&self) -> Result<()> {
        let blank = self
            .table_name
            .as_deref()
            .map(|name| name.trim().is_empty())
            .unwrap_or(true);
        if self.format.requires_table_name() && blank {
            return Err(Error::EmptyTableName);
        }
        Ok(())
    }

    fn verify_stream(&self) -> Result<()> {
        if self.stream.is_none() {
            return Err(Error::NullStream);
        }
        Ok(())
    }

    fn verify_header(&self) -> Result<()> {
        if self.format.requires_header() && self.header.is_empty() {
            return Err(Error::EmptyHeader);
        }
        Ok(())
    }
}
