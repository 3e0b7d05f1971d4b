//! In-memory table: named columns over positional rows

use super::Cell;

/// Error when a named column cannot be found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnError {
    /// The column is not present in the header
    Missing { name: String, available: Vec<String> },
    /// A configured name is not part of a fixed schema
    Unknown { name: String },
}

impl std::fmt::Display for ColumnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnError::Missing { name, available } => {
                write!(
                    f,
                    "column '{}' not found (available: {})",
                    name,
                    available.join(", ")
                )
            }
            ColumnError::Unknown { name } => write!(f, "unknown column '{}'", name),
        }
    }
}

impl std::error::Error for ColumnError {}

/// One data row
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// 0-based position among the data rows of the source sheet
    pub index: usize,
    pub cells: Vec<Cell>,
}

/// A header plus data rows. Filtering keeps each row's original index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Row>,
}

static EMPTY: Cell = Cell::Empty;

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Append a row, indexed after the rows already present
    pub fn push_row(&mut self, cells: Vec<Cell>) {
        let index = self.rows.len();
        self.rows.push(Row { index, cells });
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact header name
    pub fn column_index(&self, name: &str) -> Result<usize, ColumnError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ColumnError::Missing {
                name: name.to_string(),
                available: self.headers.clone(),
            })
    }

    /// Cell at a column of a row; short rows read as empty
    pub fn cell<'a>(row: &'a Row, col: usize) -> &'a Cell {
        row.cells.get(col).unwrap_or(&EMPTY)
    }

    /// Keep the rows matching a predicate
    pub fn filter<F>(&self, mut keep: F) -> Table
    where
        F: FnMut(&Row) -> bool,
    {
        Table {
            headers: self.headers.clone(),
            rows: self.rows.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }
}
