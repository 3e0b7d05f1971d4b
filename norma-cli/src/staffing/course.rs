//! Typed view over vacant course-assignment rows

use anyhow::{Context, Result, bail};

use crate::config::ColumnMap;
use crate::sheet::{Cell, Table};

/// Activity type code for lectures; anything else counts as seminar/lab work
pub const LECTURE: &str = "C";

/// One scheduled teaching activity
#[derive(Debug, Clone, PartialEq)]
pub struct CourseRow {
    /// 0-based position in the input sheet
    pub index: usize,
    pub discipline: String,
    pub domain_tag: String,
    pub activity: String,
    pub semester: Option<i64>,
    pub study_year: Option<i64>,
    pub group_code: String,
    pub hours: f64,
}

impl CourseRow {
    pub fn is_lecture(&self) -> bool {
        self.activity == LECTURE
    }

    pub fn in_semester(&self, semester: i64) -> bool {
        self.semester == Some(semester)
    }
}

/// Resolved column positions for the aggregation fields
struct CourseColumns {
    discipline: usize,
    domain_tag: usize,
    activity: usize,
    semester: usize,
    study_year: usize,
    group_code: usize,
    hours: usize,
}

impl CourseColumns {
    fn resolve(table: &Table, names: &ColumnMap) -> Result<Self> {
        let lookup = |name: &str| {
            table
                .column_index(name)
                .context("Missing column in input sheet")
        };

        Ok(Self {
            discipline: lookup(&names.discipline)?,
            domain_tag: lookup(&names.domain_tag)?,
            activity: lookup(&names.activity)?,
            semester: lookup(&names.semester)?,
            study_year: lookup(&names.study_year)?,
            group_code: lookup(&names.group_code)?,
            hours: lookup(&names.hours)?,
        })
    }
}

/// Convert table rows into typed course rows.
///
/// Columns are only resolved when there is at least one row, so an empty
/// vacant set never fails on a column it would not read.
pub fn course_rows(table: &Table, names: &ColumnMap) -> Result<Vec<CourseRow>> {
    if table.is_empty() {
        return Ok(Vec::new());
    }

    let cols = CourseColumns::resolve(table, names)?;

    table
        .rows()
        .iter()
        .map(|row| -> Result<CourseRow> {
            let cell = |col: usize| Table::cell(row, col);

            Ok(CourseRow {
                index: row.index,
                discipline: cell(cols.discipline).to_string(),
                domain_tag: cell(cols.domain_tag).to_string(),
                activity: cell(cols.activity).to_string(),
                semester: optional_int(cell(cols.semester), &names.semester, row.index),
                study_year: optional_int(cell(cols.study_year), &names.study_year, row.index),
                group_code: cell(cols.group_code).to_string(),
                hours: hours(cell(cols.hours), &names.hours, row.index)?,
            })
        })
        .collect()
}

/// Semester and study year; anything that is not a whole number reads as unknown
/// and never matches a semester or year rule
fn optional_int(cell: &Cell, column: &str, index: usize) -> Option<i64> {
    if cell.is_empty() {
        return None;
    }
    let value = cell.as_int();
    if value.is_none() {
        log::debug!("Row {}: '{}' is not a whole number ('{}'), treated as unknown", index, column, cell);
    }
    value
}

fn hours(cell: &Cell, column: &str, index: usize) -> Result<f64> {
    if cell.is_empty() {
        log::debug!("Row {}: empty '{}' counted as 0", index, column);
        return Ok(0.0);
    }
    match cell.as_float() {
        Some(value) => Ok(value),
        None => bail!("Row {}: column '{}' is not a number: '{}'", index, column, cell),
    }
}
