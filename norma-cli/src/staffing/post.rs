//! Post records and the fixed 25-column output schema

use std::collections::BTreeMap;

use crate::sheet::{Cell, ColumnError};

/// Output column names, in serialization order
pub mod cols {
    pub const DENUMIRE_POST: &str = "Denumire post";
    pub const NUME: &str = "Nume si prenume";
    pub const FUNCTIA: &str = "Functia didactica";
    pub const TITLUL: &str = "Titlul stiintific";
    pub const TRANSA: &str = "Transa de vechime in invatamantul superior";
    pub const TITULAR: &str = "Titular angajat";
    pub const DISCIPLINA: &str = "Disciplina";
    pub const FACULTATEA: &str = "Facultatea";
    pub const COD_ACT: &str = "Cod act";
    pub const NUME_ACT: &str = "Nume act";
    pub const AN_STUDIU: &str = "An de studiu";
    pub const NR_SERII: &str = "Nr serii";
    pub const NR_GRUPE: &str = "Nr grupe";
    pub const NR_DOCT: &str = "Nr doct";
    pub const TOTAL_OC: &str = "Total OC";
    pub const TOTAL_CURS: &str = "Total ore curs";
    pub const CURS_SEM_1: &str = "Curs sem 1";
    pub const CURS_SEM_2: &str = "Curs sem 2";
    pub const TOTAL_LS: &str = "Total ore ls";
    pub const LS_SEM_1: &str = "LS sem 1";
    pub const LS_SEM_2: &str = "LS sem 2";
    pub const ALTE: &str = "Alte activit.";
    pub const SAPT_SEM_1: &str = "Nr sp sem 1";
    pub const SAPT_SEM_2: &str = "Nr sp sem 2";
    pub const POZITIA: &str = "Pozitia";
}

/// One vacant post, derived from a discipline group
#[derive(Debug, Clone, PartialEq)]
pub struct PostRecord {
    /// "Lector" or "Asistent"
    pub title: String,
    pub name: String,
    pub hiring_status: String,
    pub discipline: String,
    pub faculty: String,
    pub act_code: u8,
    pub study_year: Option<i64>,
    /// Comma-joined series codes
    pub series: String,
    /// Comma-joined group codes
    pub groups: String,
    pub lecture_sem1: Option<f64>,
    pub lecture_sem2: Option<f64>,
    pub other_sem1: Option<f64>,
    pub other_sem2: Option<f64>,
    pub weeks_sem1: u8,
    pub weeks_sem2: u8,
    /// Values for the columns no derivation sets
    pub passthrough: BTreeMap<&'static str, Cell>,
}

/// A column of the output: its name, how to read it from a record, and whether
/// the derivation always sets it
pub struct PostColumn {
    pub name: &'static str,
    pub value: fn(&PostRecord) -> Cell,
    pub derived: bool,
}

const fn derived(name: &'static str, value: fn(&PostRecord) -> Cell) -> PostColumn {
    PostColumn { name, value, derived: true }
}

const fn blank(name: &'static str) -> PostColumn {
    PostColumn { name, value: |_| Cell::Empty, derived: true }
}

const fn passthrough(name: &'static str, value: fn(&PostRecord) -> Cell) -> PostColumn {
    PostColumn { name, value, derived: false }
}

fn passthrough_value(record: &PostRecord, name: &str) -> Cell {
    record.passthrough.get(name).cloned().unwrap_or_default()
}

/// The output schema. Order and presence of every column is fixed.
pub static POST_SCHEMA: [PostColumn; 25] = [
    derived(cols::DENUMIRE_POST, |p| Cell::from(p.title.as_str())),
    derived(cols::NUME, |p| Cell::from(p.name.as_str())),
    passthrough(cols::FUNCTIA, |p| passthrough_value(p, cols::FUNCTIA)),
    passthrough(cols::TITLUL, |p| passthrough_value(p, cols::TITLUL)),
    passthrough(cols::TRANSA, |p| passthrough_value(p, cols::TRANSA)),
    derived(cols::TITULAR, |p| Cell::from(p.hiring_status.as_str())),
    derived(cols::DISCIPLINA, |p| Cell::from(p.discipline.as_str())),
    derived(cols::FACULTATEA, |p| Cell::from(p.faculty.as_str())),
    derived(cols::COD_ACT, |p| Cell::Int(p.act_code as i64)),
    passthrough(cols::NUME_ACT, |p| passthrough_value(p, cols::NUME_ACT)),
    derived(cols::AN_STUDIU, |p| Cell::from(p.study_year)),
    derived(cols::NR_SERII, |p| Cell::from(p.series.as_str())),
    derived(cols::NR_GRUPE, |p| Cell::from(p.groups.as_str())),
    passthrough(cols::NR_DOCT, |p| passthrough_value(p, cols::NR_DOCT)),
    blank(cols::TOTAL_OC),
    blank(cols::TOTAL_CURS),
    derived(cols::CURS_SEM_1, |p| Cell::from(p.lecture_sem1)),
    derived(cols::CURS_SEM_2, |p| Cell::from(p.lecture_sem2)),
    blank(cols::TOTAL_LS),
    derived(cols::LS_SEM_1, |p| Cell::from(p.other_sem1)),
    derived(cols::LS_SEM_2, |p| Cell::from(p.other_sem2)),
    passthrough(cols::ALTE, |p| passthrough_value(p, cols::ALTE)),
    derived(cols::SAPT_SEM_1, |p| Cell::Int(p.weeks_sem1 as i64)),
    derived(cols::SAPT_SEM_2, |p| Cell::Int(p.weeks_sem2 as i64)),
    blank(cols::POZITIA),
];

/// Look up a schema column by name
pub fn post_column(name: &str) -> Option<&'static PostColumn> {
    POST_SCHEMA.iter().find(|c| c.name == name)
}

impl PostRecord {
    /// Cell values in schema order
    pub fn cells(&self) -> Vec<Cell> {
        POST_SCHEMA.iter().map(|c| (c.value)(self)).collect()
    }

    /// Cell value of a named column
    pub fn get(&self, name: &str) -> Option<Cell> {
        post_column(name).map(|c| (c.value)(self))
    }
}

/// Immutable default values for post columns, applied before derivation.
///
/// Only columns the derivation never sets are observable in the output;
/// defaults for derived columns are accepted but overwritten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostDefaults {
    values: BTreeMap<&'static str, Cell>,
}

impl PostDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a default for a schema column
    pub fn with(mut self, name: &str, value: impl Into<Cell>) -> Result<Self, ColumnError> {
        let column = post_column(name).ok_or_else(|| ColumnError::Unknown {
            name: name.to_string(),
        })?;
        self.values.insert(column.name, value.into());
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Defaults that the derivation will overwrite
    pub fn shadowed(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values
            .keys()
            .copied()
            .filter(|name| post_column(name).is_some_and(|c| c.derived))
    }

    /// Defaults for the columns the derivation leaves alone
    pub fn passthrough(&self) -> BTreeMap<&'static str, Cell> {
        self.values
            .iter()
            .filter(|(name, _)| post_column(name).is_some_and(|c| !c.derived))
            .map(|(name, value)| (*name, value.clone()))
            .collect()
    }
}
