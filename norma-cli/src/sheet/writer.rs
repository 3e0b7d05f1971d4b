//! Write vacant-row tables and post listings to xlsx or csv

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, FormatBorder, Workbook, Worksheet};

use super::{Cell, Table};
use crate::staffing::{POST_SCHEMA, PostRecord};

/// Serialization format, chosen from the output path's extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Xlsx,
    Csv,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => OutputFormat::Csv,
            _ => OutputFormat::Xlsx,
        }
    }
}

/// Write the vacant rows unchanged, preceded by a blank-headed row-index column
pub fn write_vacant_table(table: &Table, path: &Path) -> Result<()> {
    let mut header = vec![String::new()];
    header.extend(table.headers().iter().cloned());

    let rows = table.rows().iter().map(|row| {
        let mut cells = Vec::with_capacity(row.cells.len() + 1);
        cells.push(Cell::Int(row.index as i64));
        cells.extend(row.cells.iter().cloned());
        cells
    });

    write_rows(path, &header, rows)?;
    log::info!("Wrote {} vacant rows to {}", table.len(), path.display());
    Ok(())
}

/// Write post records in the fixed column order, without an index column
pub fn write_posts(posts: &[PostRecord], path: &Path) -> Result<()> {
    let header: Vec<String> = POST_SCHEMA.iter().map(|c| c.name.to_string()).collect();
    let rows = posts.iter().map(PostRecord::cells);

    write_rows(path, &header, rows)?;
    log::info!("Wrote {} posts to {}", posts.len(), path.display());
    Ok(())
}

fn write_rows<I>(path: &Path, header: &[String], rows: I) -> Result<()>
where
    I: Iterator<Item = Vec<Cell>>,
{
    match OutputFormat::from_path(path) {
        OutputFormat::Xlsx => write_xlsx(path, header, rows),
        OutputFormat::Csv => write_csv(path, header, rows),
    }
}

fn write_xlsx<I>(path: &Path, header: &[String], rows: I) -> Result<()>
where
    I: Iterator<Item = Vec<Cell>>,
{
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Sheet1")?;

    let header_format = Format::new().set_bold().set_border(FormatBorder::Thin);
    for (col, name) in header.iter().enumerate() {
        if !name.is_empty() {
            worksheet.write_string_with_format(0, col as u16, name, &header_format)?;
        }
    }

    for (row_idx, cells) in rows.enumerate() {
        let row = (row_idx + 1) as u32;
        for (col, cell) in cells.iter().enumerate() {
            write_cell(worksheet, row, col as u16, cell)?;
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to save Excel file: {}", path.display()))?;

    Ok(())
}

fn write_csv<I>(path: &Path, header: &[String], rows: I) -> Result<()>
where
    I: Iterator<Item = Vec<Cell>>,
{
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;

    wtr.write_record(header)
        .context("Failed to write CSV header")?;

    for (row_idx, cells) in rows.enumerate() {
        wtr.write_record(cells.iter().map(|c| c.to_string()))
            .with_context(|| format!("Failed to write CSV row {}", row_idx + 1))?;
    }

    wtr.flush().context("Failed to flush CSV writer")?;
    Ok(())
}

fn write_cell(ws: &mut Worksheet, row: u32, col: u16, cell: &Cell) -> Result<()> {
    match cell {
        Cell::Empty => { /* Leave cell empty */ }
        Cell::String(s) => { ws.write_string(row, col, s)?; }
        Cell::Int(i) => { ws.write_number(row, col, *i as f64)?; }
        Cell::Float(f) => { ws.write_number(row, col, *f)?; }
        Cell::Bool(b) => { ws.write_boolean(row, col, *b)?; }
    }
    Ok(())
}
