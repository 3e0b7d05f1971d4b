//! Load a course-assignment sheet into a [`Table`]

use std::path::Path;

use anyhow::{Context, Result};
use calamine::{Data, Reader, open_workbook_auto};

use super::{Cell, Table};

/// Read the first sheet of a workbook, or a CSV file when the path ends in `.csv`
pub fn read_table(path: &Path) -> Result<Table> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    let table = if is_csv {
        read_csv_table(path)?
    } else {
        read_xlsx_table(path)?
    };

    log::info!(
        "Loaded {} rows x {} columns from {}",
        table.len(),
        table.headers().len(),
        path.display()
    );
    Ok(table)
}

/// Read the first worksheet of an Excel workbook (xlsx, xls, ods)
pub fn read_xlsx_table(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open Excel file: {}", path.display()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .context("Excel file has no sheets")?
        .clone();

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet: {}", sheet_name))?;

    let mut rows = range.rows();
    let header = match rows.next() {
        Some(header) => header,
        None => return Ok(Table::default()),
    };

    let mut table = Table::new(parse_header(header));
    for row in rows {
        table.push_row(row.iter().map(to_cell).collect());
    }

    Ok(table)
}

/// Read a CSV file with a header row
pub fn read_csv_table(path: &Path) -> Result<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let headers = rdr
        .headers()
        .with_context(|| format!("Failed to read CSV header: {}", path.display()))?
        .iter()
        .enumerate()
        .map(|(col, h)| header_name(col, h.trim()))
        .collect();

    let mut table = Table::new(headers);
    for (row_idx, record) in rdr.records().enumerate() {
        let record = record
            .with_context(|| format!("Failed to read CSV row {} of {}", row_idx + 1, path.display()))?;
        table.push_row(record.iter().map(Cell::parse).collect());
    }

    Ok(table)
}

fn parse_header(header: &[Data]) -> Vec<String> {
    header
        .iter()
        .enumerate()
        .map(|(col, cell)| header_name(col, &to_cell(cell).to_string()))
        .collect()
}

/// Blank header cells get a positional placeholder so every column stays addressable
fn header_name(col: usize, raw: &str) -> String {
    if raw.is_empty() {
        format!("Unnamed: {}", col)
    } else {
        raw.to_string()
    }
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::String(s.clone()),
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) => Cell::Float(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Float(dt.as_f64()),
        other => Cell::String(other.to_string()),
    }
}
