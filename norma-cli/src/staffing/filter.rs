//! Row selection: faculty substring match and vacancy

use anyhow::{Context, Result};

use crate::sheet::Table;

/// Keep rows whose `column` contains `substring` (literal, case-sensitive)
pub fn filter_by_substring(table: &Table, column: &str, substring: &str) -> Result<Table> {
    let col = table
        .column_index(column)
        .context("Cannot filter by faculty")?;

    Ok(table.filter(|row| {
        Table::cell(row, col)
            .as_text()
            .is_some_and(|value| value.contains(substring))
    }))
}

/// Keep rows with no instructor assigned
pub fn vacant_rows(table: &Table, instructor_column: &str) -> Result<Table> {
    let col = table
        .column_index(instructor_column)
        .context("Cannot select vacant rows")?;

    Ok(table.filter(|row| Table::cell(row, col).is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::Cell;

    fn table() -> Table {
        let mut table = Table::new(vec!["Domeniu".to_string(), "Cadru didactic".to_string()]);
        table.push_row(vec![Cell::from("CTI-MASTER"), Cell::Empty]);
        table.push_row(vec![Cell::from("MAT"), Cell::Empty]);
        table.push_row(vec![Cell::from("CTI"), Cell::from("Ionescu")]);
        table.push_row(vec![Cell::Empty, Cell::Empty]);
        table.push_row(vec![Cell::from("cti"), Cell::String(String::new())]);
        table
    }

    #[test]
    fn test_substring_match() {
        let filtered = filter_by_substring(&table(), "Domeniu", "CTI").unwrap();
        let indices: Vec<usize> = filtered.rows().iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_regex_characters_are_literal() {
        let mut table = Table::new(vec!["Domeniu".to_string()]);
        table.push_row(vec![Cell::from("CTI")]);
        let filtered = filter_by_substring(&table, "Domeniu", "C.I").unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_vacant_rows() {
        let vacant = vacant_rows(&table(), "Cadru didactic").unwrap();
        let indices: Vec<usize> = vacant.rows().iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_missing_filter_column() {
        let err = filter_by_substring(&table(), "Facultate", "CTI").unwrap_err();
        assert!(format!("{:#}", err).contains("column 'Facultate' not found"));
    }
}
