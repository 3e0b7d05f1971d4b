//! Vacant teaching-post derivation
//!
//! The pipeline narrows the course-assignment table to one faculty, keeps the
//! rows with no instructor, groups them by discipline and derives one post
//! per discipline.

pub mod aggregate;
mod course;
mod filter;
mod group;
mod post;

use anyhow::Result;
use clap::ValueEnum;

use crate::config::Config;
use crate::sheet::Table;

pub use aggregate::{build_post, create_posts};
pub use course::{CourseRow, LECTURE, course_rows};
pub use filter::{filter_by_substring, vacant_rows};
pub use group::{DisciplineGroup, group_by_discipline};
pub use post::{POST_SCHEMA, PostColumn, PostDefaults, PostRecord, cols, post_column};

/// Faculty codes accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Faculty {
    #[value(name = "INF")]
    Inf,
    #[value(name = "CTI")]
    Cti,
    #[value(name = "MAT")]
    Mat,
}

impl Faculty {
    pub fn code(&self) -> &'static str {
        match self {
            Faculty::Inf => "INF",
            Faculty::Cti => "CTI",
            Faculty::Mat => "MAT",
        }
    }
}

impl std::fmt::Display for Faculty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Result of one pipeline run
#[derive(Debug, Clone)]
pub struct Staffing {
    /// Rows matching the faculty filter
    pub faculty_rows: usize,
    /// Vacant rows of the faculty, as loaded
    pub vacant: Table,
    /// Deduplicated posts, one per discipline
    pub posts: Vec<PostRecord>,
}

/// Run the filter, group and aggregate steps over a loaded table
pub fn derive_posts(table: &Table, faculty: Faculty, config: &Config) -> Result<Staffing> {
    let columns = &config.columns;
    let defaults = config.post_defaults()?;

    let faculty_table = filter_by_substring(table, &columns.domain, faculty.code())?;
    log::info!("{} rows match faculty {}", faculty_table.len(), faculty);

    let vacant = vacant_rows(&faculty_table, &columns.instructor)?;
    log::info!("{} of them are vacant", vacant.len());
    if vacant.is_empty() {
        log::warn!("No vacant rows for faculty {}; outputs will be empty", faculty);
    }

    let groups = group_by_discipline(course_rows(&vacant, columns)?);
    log::info!("{} disciplines with vacant hours", groups.len());

    let posts = create_posts(&groups, faculty.code(), &defaults);
    log::info!("{} posts after deduplication", posts.len());

    Ok(Staffing {
        faculty_rows: faculty_table.len(),
        vacant,
        posts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::Cell;

    fn input() -> Table {
        let mut table = Table::new(
            [
                "Domeniu",
                "Denumire disciplina",
                "Cadru didactic",
                "Tip",
                "Semestru",
                "An de studii",
                "Cod formatiune",
                "Numar ore / saptamana",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        );

        let rows = [
            ("CTI", "Algebra", "", "C", 1, 1, 241, 2),
            ("CTI", "Algebra", "", "C", 1, 1, 242, 2),
            ("CTI", "Retele", "Ionescu", "C", 2, 4, 441, 2),
            ("CTI", "Proiect", "", "L", 2, 4, 441, 4),
            ("MAT", "Geometrie", "", "C", 1, 2, 121, 2),
        ];
        for (domain, discipline, instructor, tip, sem, year, group, hours) in rows {
            table.push_row(vec![
                Cell::from(domain),
                Cell::from(discipline),
                if instructor.is_empty() { Cell::Empty } else { Cell::from(instructor) },
                Cell::from(tip),
                Cell::Int(sem),
                Cell::Int(year),
                Cell::Int(group),
                Cell::Int(hours),
            ]);
        }
        table
    }

    #[test]
    fn test_faculty_codes() {
        assert_eq!(Faculty::Cti.to_string(), "CTI");
        assert_eq!(Faculty::from_str("INF", false), Ok(Faculty::Inf));
        assert!(Faculty::from_str("FMI", false).is_err());
    }

    #[test]
    fn test_derive_posts() {
        let result = derive_posts(&input(), Faculty::Cti, &Config::default()).unwrap();

        assert_eq!(result.faculty_rows, 4);
        let vacant: Vec<usize> = result.vacant.rows().iter().map(|r| r.index).collect();
        assert_eq!(vacant, vec![0, 1, 3]);

        assert_eq!(result.posts.len(), 2);
        assert_eq!(result.posts[0].discipline, "Algebra");
        assert_eq!(result.posts[0].groups, "241, 242");

        let proiect = &result.posts[1];
        assert_eq!(proiect.title, "Asistent");
        assert_eq!(proiect.other_sem2, Some(4.0));
        assert_eq!(proiect.weeks_sem2, 10);
    }

    fn algebra_rows(rows: &[(Cell, i64, i64)]) -> Table {
        let mut table = Table::new(input().headers().to_vec());
        for (semester, year, group) in rows {
            table.push_row(vec![
                Cell::from("CTI"),
                Cell::from("Algebra"),
                Cell::Empty,
                Cell::from("C"),
                semester.clone(),
                Cell::Int(*year),
                Cell::Int(*group),
                Cell::Int(2),
            ]);
        }
        table
    }

    #[test]
    fn test_same_discipline_and_year_gives_one_post() {
        let table = algebra_rows(&[(Cell::Int(1), 1, 241), (Cell::Int(1), 1, 242)]);
        let result = derive_posts(&table, Faculty::Cti, &Config::default()).unwrap();

        assert_eq!(result.posts.len(), 1);
        assert_eq!(result.posts[0].study_year, Some(1));
    }

    #[test]
    fn test_discipline_across_years_gives_post_per_year() {
        let table = algebra_rows(&[(Cell::Int(1), 1, 241), (Cell::Int(1), 3, 341)]);
        let result = derive_posts(&table, Faculty::Cti, &Config::default()).unwrap();

        let years: Vec<Option<i64>> = result.posts.iter().map(|p| p.study_year).collect();
        assert_eq!(years, vec![Some(1), Some(3)]);
        assert!(result.posts.iter().all(|p| p.groups == "241, 341"));
        assert!(result.posts.iter().all(|p| p.lecture_sem1 == Some(4.0)));
    }

    #[test]
    fn test_text_semester_does_not_abort() {
        let table = algebra_rows(&[(Cell::from("II"), 1, 241), (Cell::Int(1), 1, 242)]);
        let result = derive_posts(&table, Faculty::Cti, &Config::default()).unwrap();

        assert_eq!(result.posts.len(), 1);
        let post = &result.posts[0];
        assert_eq!(post.lecture_sem1, Some(2.0));
        assert_eq!(post.lecture_sem2, None);
        assert_eq!(post.groups, "241, 242");
    }

    #[test]
    fn test_no_matching_faculty_yields_empty() {
        let result = derive_posts(&input(), Faculty::Inf, &Config::default()).unwrap();
        assert_eq!(result.faculty_rows, 0);
        assert!(result.vacant.is_empty());
        assert!(result.posts.is_empty());
    }
}
