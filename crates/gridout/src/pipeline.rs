//! The four-stage, memoized preprocessing pipeline.
//!
//! Stages, in order: classify the value matrix, resolve column
//! properties, render header strings, render value strings. Each stage
//! is its own small state machine, so invalidation is a single state
//! reset that cannot desync from its artifact. A full reset clears
//! everything; a chunk-step reset (iterative writing) keeps the
//! accumulated column descriptors so column widths grow monotonically
//! across chunks.

use log::debug;

use gridout_data::{
    merge_columns, pad_cell, remove_line_breaks, resolve_columns, Align, CellValue, Classifier,
    ColumnDescriptor, TypeCode, Value,
};

/// One memoized stage artifact.
#[derive(Debug, Default)]
enum Memo<T> {
    #[default]
    Pending,
    Ready(T),
}

impl<T> Memo<T> {
    fn is_ready(&self) -> bool {
        matches!(self, Memo::Ready(_))
    }

    fn clear(&mut self) {
        *self = Memo::Pending;
    }

    fn get(&self) -> Option<&T> {
        match self {
            Memo::Ready(artifact) => Some(artifact),
            Memo::Pending => None,
        }
    }
}

/// Stage-2 state. Unlike the other stages, a chunk-step reset retains
/// the accumulated descriptors (`Stale`) so the next pass merges into
/// them instead of starting over; only a full reset (`Empty`) drops
/// them and re-arms the one-time width extension.
#[derive(Debug, Default)]
enum ColumnState {
    #[default]
    Empty,
    Stale(Vec<ColumnDescriptor>),
    Ready(Vec<ColumnDescriptor>),
}

/// Stage-1 artifact: the classified header and value matrix.
#[derive(Debug)]
struct ClassifiedTable {
    header: Vec<CellValue>,
    rows: Vec<Vec<CellValue>>,
    column_count: usize,
}

/// Everything a pipeline run needs from the owning writer.
pub(crate) struct StageInput<'a> {
    pub header: &'a [String],
    pub rows: &'a [Vec<Value>],
    pub type_hints: &'a [Option<TypeCode>],
    pub classifier: Classifier,
    pub is_padding: bool,
    pub is_remove_line_break: bool,
    /// 1-based chunk counter of an active iterative write, if any.
    pub iter_count: Option<usize>,
}

#[derive(Debug, Default)]
pub(crate) struct Pipeline {
    classified: Memo<ClassifiedTable>,
    columns: ColumnState,
    header_strings: Memo<Vec<String>>,
    value_strings: Memo<Vec<Vec<String>>>,
}

impl Pipeline {
    /// Full invalidation: every stage back to its initial state.
    /// Run when header, value matrix, type hints, or config change.
    pub fn invalidate(&mut self) {
        self.classified.clear();
        self.columns = ColumnState::Empty;
        self.header_strings.clear();
        self.value_strings.clear();
    }

    /// Chunk-step invalidation: stages 1, 3, and 4 are cleared but the
    /// accumulated column descriptors survive for merging.
    pub fn begin_chunk(&mut self) {
        self.classified.clear();
        if let ColumnState::Ready(columns) = std::mem::take(&mut self.columns) {
            self.columns = ColumnState::Stale(columns);
        }
        self.header_strings.clear();
        self.value_strings.clear();
    }

    /// Run every stage that is not already complete.
    pub fn run(&mut self, input: &StageInput<'_>) {
        self.classify_matrix(input);
        self.resolve_column_properties(input);
        self.render_header_strings(input);
        self.render_value_strings(input);
    }

    /// Number of classified value rows, 0 while stage 1 is pending.
    pub fn classified_row_count(&self) -> usize {
        self.classified.get().map(|t| t.rows.len()).unwrap_or(0)
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        match &self.columns {
            ColumnState::Ready(columns) => columns,
            ColumnState::Stale(_) | ColumnState::Empty => &[],
        }
    }

    pub fn header_strings(&self) -> &[String] {
        self.header_strings.get().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn value_strings(&self) -> &[Vec<String>] {
        self.value_strings.get().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Stage 1: classify every cell of the current value matrix.
    ///
    /// Rows are normalized to the header length (or, with no header,
    /// the widest row): short rows are padded with nulls and long rows
    /// truncated. A zero-column matrix degrades to an empty classified
    /// matrix rather than failing the pipeline.
    fn classify_matrix(&mut self, input: &StageInput<'_>) {
        if self.classified.is_ready() {
            return;
        }
        debug!("preprocess: classify matrix rows={}", input.rows.len());

        let column_count = if input.header.is_empty() {
            input.rows.iter().map(Vec::len).max().unwrap_or(0)
        } else {
            input.header.len()
        };

        let header = input
            .header
            .iter()
            .map(|name| {
                input.classifier.classify(
                    &Value::Str(name.trim().to_string()),
                    Some(TypeCode::String),
                )
            })
            .collect();

        let rows = if column_count == 0 {
            Vec::new()
        } else {
            input
                .rows
                .iter()
                .map(|row| {
                    (0..column_count)
                        .map(|col| {
                            let hint = input.type_hints.get(col).copied().flatten();
                            match row.get(col) {
                                Some(value) => input.classifier.classify(value, hint),
                                None => input.classifier.classify(&Value::None, hint),
                            }
                        })
                        .collect()
                })
                .collect()
        };

        self.classified = Memo::Ready(ClassifiedTable {
            header,
            rows,
            column_count,
        });
    }

    /// Stage 2: resolve column type, width, and alignment.
    ///
    /// The one-time `ceil(width * 0.25)` extension applies only on the
    /// first chunk of an iterative write, after any merge with
    /// descriptors surviving a prior write on the same writer; later
    /// chunks and single-shot passes never extend.
    fn resolve_column_properties(&mut self, input: &StageInput<'_>) {
        if matches!(self.columns, ColumnState::Ready(_)) {
            return;
        }
        debug!("preprocess: resolve column properties");

        let Some(classified) = self.classified.get() else {
            return;
        };
        let fresh = resolve_columns(
            &classified.header,
            &classified.rows,
            classified.column_count,
        );

        let mut columns = match std::mem::take(&mut self.columns) {
            ColumnState::Stale(previous) => merge_columns(&previous, fresh),
            ColumnState::Empty | ColumnState::Ready(_) => fresh,
        };
        if input.iter_count == Some(1) {
            for column in &mut columns {
                let extra = (column.width as f64 * 0.25).ceil() as usize;
                column.extend_width(extra);
            }
        }
        self.columns = ColumnState::Ready(columns);
    }

    /// Stage 3: render header cells to padded strings.
    ///
    /// Always produced, even when the format later omits the header;
    /// the cache is format-agnostic.
    fn render_header_strings(&mut self, input: &StageInput<'_>) {
        if self.header_strings.is_ready() {
            return;
        }
        debug!("preprocess: render header strings");

        let header = self
            .classified
            .get()
            .map(|t| t.header.as_slice())
            .unwrap_or(&[]);
        let strings = self
            .columns()
            .iter()
            .zip(header)
            .map(|(column, cell)| {
                let text = clean_text(&cell.text, input.is_remove_line_break);
                let width = if input.is_padding { column.width } else { 0 };
                pad_cell(&text, width, Align::Center)
            })
            .collect();
        self.header_strings = Memo::Ready(strings);
    }

    /// Stage 4: render value cells to aligned, padded strings.
    ///
    /// A string-typed column renders its numeric cells with the cell's
    /// own right alignment, so numeric-looking strings still line up.
    fn render_value_strings(&mut self, input: &StageInput<'_>) {
        if self.value_strings.is_ready() {
            return;
        }

        let Some(classified) = self.classified.get() else {
            self.value_strings = Memo::Ready(Vec::new());
            return;
        };
        debug!(
            "preprocess: render value strings rows={}",
            classified.rows.len()
        );

        let columns = match &self.columns {
            ColumnState::Ready(columns) => columns.as_slice(),
            ColumnState::Stale(_) | ColumnState::Empty => &[],
        };
        let strings = classified
            .rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .zip(row)
                    .map(|(column, cell)| {
                        let align = winner_align(column, cell);
                        let text = clean_text(&cell.text, input.is_remove_line_break);
                        let width = if input.is_padding { column.width } else { 0 };
                        pad_cell(&text, width, align)
                    })
                    .collect()
            })
            .collect();
        self.value_strings = Memo::Ready(strings);
    }
}

/// The alignment that wins for one rendered cell: numeric cells keep
/// their own alignment inside a string-typed column.
fn winner_align(column: &ColumnDescriptor, cell: &CellValue) -> Align {
    if column.type_code == TypeCode::String
        && matches!(cell.type_code, TypeCode::Integer | TypeCode::RealNumber)
    {
        cell.align
    } else {
        column.align
    }
}

fn clean_text(text: &str, is_remove_line_break: bool) -> String {
    if is_remove_line_break {
        remove_line_breaks(text).into_owned()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input<'a>(
        header: &'a [String],
        rows: &'a [Vec<Value>],
        hints: &'a [Option<TypeCode>],
    ) -> StageInput<'a> {
        StageInput {
            header,
            rows,
            type_hints: hints,
            classifier: Classifier::default(),
            is_padding: true,
            is_remove_line_break: false,
            iter_count: None,
        }
    }

    #[test]
    fn test_single_shot_widths_are_not_extended() {
        let header = vec!["a".to_string(), "b".to_string()];
        let rows = vec![vec![1.into(), 2.into()], vec![3.into(), 4.into()]];
        let mut pipeline = Pipeline::default();
        pipeline.run(&input(&header, &rows, &[]));
        assert_eq!(pipeline.columns().len(), 2);
        assert_eq!(pipeline.columns()[0].width, 1);
        assert_eq!(pipeline.columns()[0].type_code, TypeCode::Integer);
    }

    #[test]
    fn test_first_iteration_extends_widths_once() {
        let header = vec!["aaaa".to_string()];
        let rows = vec![vec![1.into()]];
        let mut pipeline = Pipeline::default();
        let mut first = input(&header, &rows, &[]);
        first.iter_count = Some(1);
        pipeline.run(&first);
        // ceil(4 * 0.25) = 1 extra column.
        assert_eq!(pipeline.columns()[0].width, 5);

        pipeline.begin_chunk();
        let mut second = input(&header, &rows, &[]);
        second.iter_count = Some(2);
        pipeline.run(&second);
        assert_eq!(pipeline.columns()[0].width, 5);
    }

    #[test]
    fn test_first_iteration_extends_merged_columns_too() {
        // A single-shot run leaves descriptors behind; the first chunk
        // of a following iterative write merges into them and must
        // still get the one-time extension.
        let header = vec!["a".to_string()];
        let rows = vec![vec![1.into()]];
        let mut pipeline = Pipeline::default();
        pipeline.run(&input(&header, &rows, &[]));
        assert_eq!(pipeline.columns()[0].width, 1);

        pipeline.begin_chunk();
        let mut step = input(&header, &rows, &[]);
        step.iter_count = Some(1);
        pipeline.run(&step);
        assert_eq!(pipeline.columns()[0].width, 2);
    }

    #[test]
    fn test_chunk_widths_grow_monotonically() {
        let header = vec!["a".to_string()];
        let chunk1 = vec![vec![Value::from("xx")]];
        let chunk2 = vec![vec![Value::from("wider")]];
        let chunk3 = vec![vec![Value::from("x")]];
        let mut pipeline = Pipeline::default();

        let mut step = input(&header, &chunk1, &[]);
        step.iter_count = Some(1);
        pipeline.run(&step);
        let w1 = pipeline.columns()[0].width;

        pipeline.begin_chunk();
        let mut step = input(&header, &chunk2, &[]);
        step.iter_count = Some(2);
        pipeline.run(&step);
        let w2 = pipeline.columns()[0].width;

        pipeline.begin_chunk();
        let mut step = input(&header, &chunk3, &[]);
        step.iter_count = Some(3);
        pipeline.run(&step);
        let w3 = pipeline.columns()[0].width;

        assert!(w2 >= w1);
        assert!(w3 >= w2);
        assert_eq!(w2, 5);
    }

    #[test]
    fn test_full_invalidation_drops_columns() {
        let header = vec!["a".to_string()];
        let rows = vec![vec![Value::from("wide value")]];
        let mut pipeline = Pipeline::default();
        pipeline.run(&input(&header, &rows, &[]));
        assert_eq!(pipeline.columns()[0].width, 10);

        pipeline.invalidate();
        assert!(pipeline.columns().is_empty());

        let narrow = vec![vec![Value::from("x")]];
        pipeline.run(&input(&header, &narrow, &[]));
        // Widths shrink after a full reset; only chunk steps are monotonic.
        assert_eq!(pipeline.columns()[0].width, 1);
    }

    #[test]
    fn test_stages_run_once_between_invalidations() {
        let header = vec!["a".to_string()];
        let rows = vec![vec![1.into()]];
        let mut pipeline = Pipeline::default();
        pipeline.run(&input(&header, &rows, &[]));
        let before = pipeline.value_strings().to_vec();
        // A second run with different data must be a no-op while the
        // cache is valid.
        let other_rows = vec![vec![Value::from("zzzz")]];
        pipeline.run(&input(&header, &other_rows, &[]));
        assert_eq!(pipeline.value_strings(), before.as_slice());
    }

    #[test]
    fn test_short_rows_padded_to_header() {
        let header = vec!["a".to_string(), "b".to_string()];
        let rows = vec![vec![1.into()]];
        let mut pipeline = Pipeline::default();
        pipeline.run(&input(&header, &rows, &[]));
        assert_eq!(pipeline.value_strings()[0].len(), 2);
        assert_eq!(pipeline.value_strings()[0][1], " ");
    }

    #[test]
    fn test_mixed_column_winner_alignment() {
        let header = vec!["v".to_string()];
        let rows = vec![
            vec![1.into()],
            vec!["xxx".into()],
            vec![22.into()],
        ];
        let mut pipeline = Pipeline::default();
        pipeline.run(&input(&header, &rows, &[]));
        assert_eq!(pipeline.columns()[0].type_code, TypeCode::String);
        assert_eq!(pipeline.value_strings()[0][0], "  1");
        assert_eq!(pipeline.value_strings()[1][0], "xxx");
        assert_eq!(pipeline.value_strings()[2][0], " 22");
    }

    #[test]
    fn test_type_hint_override() {
        let header = vec!["n".to_string()];
        let rows = vec![
            vec!["1".into()],
            vec!["2".into()],
            vec!["3".into()],
        ];
        let hints = vec![Some(TypeCode::Integer)];
        let mut pipeline = Pipeline::default();
        pipeline.run(&input(&header, &rows, &hints));
        assert_eq!(pipeline.columns()[0].type_code, TypeCode::Integer);
        assert_eq!(pipeline.columns()[0].align, Align::Right);
    }

    #[test]
    fn test_padding_disabled_renders_unpadded() {
        let header = vec!["name".to_string()];
        let rows = vec![vec!["x".into()]];
        let mut pipeline = Pipeline::default();
        let mut step = input(&header, &rows, &[]);
        step.is_padding = false;
        pipeline.run(&step);
        assert_eq!(pipeline.value_strings()[0][0], "x");
        assert_eq!(pipeline.header_strings()[0], "name");
    }
}
