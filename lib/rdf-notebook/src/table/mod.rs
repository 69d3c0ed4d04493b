//! Tabular query results.
//!
//! A [`ResultTable`] is a small column-oriented view over query solutions: a list of column names
//! and rows of [`Cell`]s. It renders as an HTML table with clickable links (see
//! [`ResultTable::to_html`]) or as an ASCII table through [`Display`](std::fmt::Display).

mod html;

use crate::error::RowLengthError;
pub use html::HtmlOptions;
use prettytable::{Row, Table};
use std::fmt;

/// A single value of a [`ResultTable`].
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    /// A missing value, e.g. an unbound variable.
    Null,
    Text(String),
    Integer(i64),
    Float(f64),
}

impl Cell {
    /// Returns whether the cell holds no value.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the text of a [`Cell::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<Option<String>> for Cell {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Null, Self::Text)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// The value kind shared by all cells of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Text,
    Integer,
    Float,
}

/// Query results as a table of named columns.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultTable {
    columns: Vec<String>,
    kinds: Vec<ColumnKind>,
    rows: Vec<Vec<Cell>>,
}

impl ResultTable {
    /// Creates an empty table with the given text columns.
    pub fn new(columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let columns = columns.into_iter().map(Into::into).collect::<Vec<_>>();
        let kinds = vec![ColumnKind::Text; columns.len()];
        Self {
            columns,
            kinds,
            rows: Vec::new(),
        }
    }

    /// Creates a table from rows, checking that every row has one cell per column.
    pub fn from_rows(
        columns: impl IntoIterator<Item = impl Into<String>>,
        rows: impl IntoIterator<Item = Vec<Cell>>,
    ) -> Result<Self, RowLengthError> {
        let mut table = Self::new(columns);
        for row in rows {
            table.push_row(row)?;
        }
        table.refresh_kinds();
        Ok(table)
    }

    /// Appends a row.
    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<(), RowLengthError> {
        if row.len() != self.columns.len() {
            return Err(RowLengthError {
                row: self.rows.len(),
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Appends a row of optional text values, padding missing cells with [`Cell::Null`].
    pub(crate) fn push_values(&mut self, values: impl IntoIterator<Item = Option<String>>) {
        let mut row = values
            .into_iter()
            .map(Cell::from)
            .take(self.columns.len())
            .collect::<Vec<_>>();
        row.resize(self.columns.len(), Cell::Null);
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the position of the column called `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Returns the cells of the column called `name`.
    pub fn column(&self, name: &str) -> Option<Vec<&Cell>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(|row| &row[index]).collect())
    }

    /// Returns the kind of the column called `name`.
    pub fn column_kind(&self, name: &str) -> Option<ColumnKind> {
        self.column_index(name).map(|index| self.kinds[index])
    }

    /// Returns the cell at `row` in the column called `column`.
    pub fn get(&self, row: usize, column: &str) -> Option<&Cell> {
        let index = self.column_index(column)?;
        self.rows.get(row).map(|row| &row[index])
    }

    /// Converts every column whose non-empty cells are all numbers into a numeric column.
    ///
    /// A column of integers without empty cells becomes an integer column. Otherwise, if all
    /// non-empty cells are numbers, the column becomes a float column and empty cells stay
    /// [`Cell::Null`] (shown as `NaN`). Columns with any non-numeric cell are left untouched.
    pub fn convert_numeric_columns(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        for index in 0..self.columns.len() {
            let Some(kind) = numeric_kind(self.rows.iter().map(|row| &row[index])) else {
                continue;
            };
            for row in &mut self.rows {
                let cell = &mut row[index];
                *cell = to_numeric(cell, kind);
            }
            tracing::debug!("Converted column {} to {kind:?}", self.columns[index]);
            self.kinds[index] = kind;
        }
    }

    /// Renders the table as HTML with the default [`HtmlOptions`].
    pub fn to_html(&self) -> String {
        self.to_html_with_options(&HtmlOptions::default())
    }

    /// Renders the table as HTML.
    pub fn to_html_with_options(&self, options: &HtmlOptions) -> String {
        html::render(self, options)
    }

    /// Called by the evcxr kernel to render the table.
    pub fn evcxr_display(&self) {
        crate::display::display_result(self);
    }

    /// Returns the display text of every cell, row by row.
    ///
    /// Float columns are formatted as a whole, see [`format_float_column`].
    pub(crate) fn formatted_rows(&self) -> Vec<Vec<String>> {
        let mut rows = vec![Vec::with_capacity(self.columns.len()); self.rows.len()];
        for (index, kind) in self.kinds.iter().enumerate() {
            let cells = self.rows.iter().map(|row| &row[index]);
            let column = if *kind == ColumnKind::Float {
                format_float_column(cells)
            } else {
                cells.map(|cell| format_cell(cell, *kind)).collect()
            };
            for (row, value) in rows.iter_mut().zip(column) {
                row.push(value);
            }
        }
        rows
    }

    fn refresh_kinds(&mut self) {
        for (index, kind) in self.kinds.iter_mut().enumerate() {
            let cells = self
                .rows
                .iter()
                .map(|row| &row[index])
                .filter(|c| !c.is_null())
                .collect::<Vec<_>>();
            *kind = if cells.is_empty() {
                ColumnKind::Text
            } else if cells.iter().all(|c| matches!(c, Cell::Integer(_))) {
                ColumnKind::Integer
            } else if cells.iter().all(|c| matches!(c, Cell::Integer(_) | Cell::Float(_))) {
                ColumnKind::Float
            } else {
                ColumnKind::Text
            };
        }
    }
}

fn numeric_kind<'a>(cells: impl Iterator<Item = &'a Cell>) -> Option<ColumnKind> {
    let mut all_integers = true;
    let mut has_null = false;
    for cell in cells {
        match cell {
            Cell::Null => has_null = true,
            Cell::Integer(_) => {}
            Cell::Float(_) => all_integers = false,
            Cell::Text(text) if text.is_empty() => has_null = true,
            Cell::Text(text) => {
                if text.parse::<i64>().is_err() {
                    text.parse::<f64>().ok()?;
                    all_integers = false;
                }
            }
        }
    }
    Some(if all_integers && !has_null {
        ColumnKind::Integer
    } else {
        ColumnKind::Float
    })
}

fn to_numeric(cell: &Cell, kind: ColumnKind) -> Cell {
    match (cell, kind) {
        (Cell::Text(text), ColumnKind::Integer) => text.parse().map_or(Cell::Null, Cell::Integer),
        (Cell::Text(text), ColumnKind::Float) => text.parse().map_or(Cell::Null, Cell::Float),
        #[allow(clippy::cast_precision_loss, reason = "Same conversion as a float column")]
        (Cell::Integer(value), ColumnKind::Float) => Cell::Float(*value as f64),
        (cell, _) => cell.clone(),
    }
}

/// Formats a cell of a text or integer column for display.
pub(crate) fn format_cell(cell: &Cell, kind: ColumnKind) -> String {
    match cell {
        Cell::Null if kind == ColumnKind::Text => "None".to_owned(),
        Cell::Null => "NaN".to_owned(),
        Cell::Text(text) => text.clone(),
        Cell::Integer(value) => value.to_string(),
        Cell::Float(value) if value.is_finite() && value.fract() == 0.0 => format!("{value:.1}"),
        Cell::Float(value) => value.to_string(),
    }
}

/// Formats the cells of a float column with one shared precision.
///
/// Values are written with six decimals, then the trailing zeros shared by every value are
/// dropped, keeping at least one decimal. Magnitudes of at least 1e16 or non-zero magnitudes
/// below 1e-6 switch the whole column to scientific notation (`1.000000e+20`).
fn format_float_column<'a>(cells: impl Iterator<Item = &'a Cell>) -> Vec<String> {
    let cells = cells.collect::<Vec<_>>();
    let values = cells
        .iter()
        .map(|cell| match cell {
            Cell::Float(value) => Some(*value),
            #[allow(clippy::cast_precision_loss, reason = "Same conversion as a float column")]
            Cell::Integer(value) => Some(*value as f64),
            Cell::Null | Cell::Text(_) => None,
        })
        .collect::<Vec<_>>();
    let scientific = values
        .iter()
        .flatten()
        .filter(|v| v.is_finite())
        .any(|v| v.abs() >= 1e16 || (*v != 0.0 && v.abs() < 1e-6));

    let mut formatted = values
        .iter()
        .map(|value| match value {
            Some(value) if scientific => format_scientific(*value),
            Some(value) => format!("{value:.6}"),
            None => String::new(),
        })
        .collect::<Vec<_>>();
    if !scientific {
        let decimals = values
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_some_and(f64::is_finite))
            .map(|(i, _)| i)
            .collect::<Vec<_>>();
        while !decimals.is_empty()
            && decimals.iter().all(|i| {
                formatted[*i]
                    .strip_suffix('0')
                    .is_some_and(|rest| !rest.ends_with('.'))
            })
        {
            for i in &decimals {
                formatted[*i].pop();
            }
        }
    }

    cells
        .into_iter()
        .zip(formatted)
        .map(|(cell, formatted)| match cell {
            Cell::Null => "NaN".to_owned(),
            Cell::Text(text) => text.clone(),
            Cell::Integer(_) | Cell::Float(_) => formatted,
        })
        .collect()
}

fn format_scientific(value: f64) -> String {
    let formatted = format!("{value:.6e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = exponent
                .strip_prefix('-')
                .map_or(("+", exponent), |digits| ("-", digits));
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => formatted,
    }
}

impl fmt::Display for ResultTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new();
        table.set_titles(Row::from(self.columns.iter()));
        for row in self.formatted_rows() {
            table.add_row(Row::from(row));
        }
        write!(f, "{table}")
    }
}
