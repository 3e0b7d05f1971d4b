//! Partition course rows by discipline

use std::collections::HashMap;

use super::CourseRow;

/// All vacant rows sharing a discipline name. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct DisciplineGroup {
    discipline: String,
    rows: Vec<CourseRow>,
}

impl DisciplineGroup {
    pub fn discipline(&self) -> &str {
        &self.discipline
    }

    pub fn rows(&self) -> &[CourseRow] {
        &self.rows
    }

    /// The first row, read for study year and domain context
    pub fn representative(&self) -> &CourseRow {
        &self.rows[0]
    }

    /// True when every row agrees with the representative on study year and domain tag
    pub fn is_homogeneous(&self) -> bool {
        let first = self.representative();
        self.rows
            .iter()
            .all(|r| r.study_year == first.study_year && r.domain_tag == first.domain_tag)
    }
}

/// Group rows by discipline, in order of each discipline's first appearance
pub fn group_by_discipline(rows: Vec<CourseRow>) -> Vec<DisciplineGroup> {
    let mut groups: Vec<DisciplineGroup> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for row in rows {
        match positions.get(&row.discipline) {
            Some(&pos) => groups[pos].rows.push(row),
            None => {
                positions.insert(row.discipline.clone(), groups.len());
                groups.push(DisciplineGroup {
                    discipline: row.discipline.clone(),
                    rows: vec![row],
                });
            }
        }
    }

    groups
}
