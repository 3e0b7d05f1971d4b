//! Typed spreadsheet cell values

/// A single cell value as loaded from (or written to) a spreadsheet
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    /// Blank cell
    #[default]
    Empty,
    /// Text
    String(String),
    /// Whole number
    Int(i64),
    /// Floating point
    Float(f64),
    /// Boolean
    Bool(bool),
}

impl Cell {
    /// True for blank cells and empty strings
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Render as text, or None for empty cells
    pub fn as_text(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }

    /// Try to read an integer. Integral floats and numeric text are accepted.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Cell::Int(i) => Some(*i),
            Cell::Float(f) if f.fract() == 0.0 => Some(*f as i64),
            Cell::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Try to read a number
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Cell::Int(i) => Some(*i as f64),
            Cell::Float(f) => Some(*f),
            Cell::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Parse a raw text field (CSV input, config values) into the narrowest cell type
    pub fn parse(raw: &str) -> Cell {
        let s = raw.trim();

        if s.is_empty() {
            return Cell::Empty;
        }

        match s.to_lowercase().as_str() {
            "true" => return Cell::Bool(true),
            "false" => return Cell::Bool(false),
            _ => {}
        }

        if let Ok(i) = s.parse::<i64>() {
            return Cell::Int(i);
        }

        if let Ok(f) = s.parse::<f64>() {
            return Cell::Float(f);
        }

        Cell::String(s.to_string())
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::String(s) => write!(f, "{}", s),
            Cell::Int(i) => write!(f, "{}", i),
            Cell::Float(fl) => {
                if fl.fract() == 0.0 && fl.is_finite() {
                    write!(f, "{}", *fl as i64)
                } else {
                    write!(f, "{}", fl)
                }
            }
            Cell::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::String(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::String(s)
    }
}

impl From<i64> for Cell {
    fn from(i: i64) -> Self {
        Cell::Int(i)
    }
}

impl From<f64> for Cell {
    fn from(f: f64) -> Self {
        Cell::Float(f)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Cell::Empty)
    }
}
