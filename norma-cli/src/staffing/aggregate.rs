//! Per-discipline workload derivation
//!
//! Every rule here reads the group as a whole except the final-semester,
//! act-code and study-year rules, which read only the group's first row.

use std::collections::BTreeSet;

use super::{DisciplineGroup, PostDefaults, PostRecord};

/// Teaching weeks in a regular semester
pub const REGULAR_WEEKS: u8 = 14;
/// Teaching weeks in a graduating cohort's last semester
pub const FINAL_SEMESTER_WEEKS: u8 = 10;

pub const TITLE_LECTURER: &str = "Lector";
pub const TITLE_ASSISTANT: &str = "Asistent";
pub const NOT_HIRED: &str = "NU";
pub const VACANT_NAME: &str = "Vacant";

/// Group codes in row order, repeats included
pub fn group_codes(group: &DisciplineGroup) -> Vec<String> {
    group.rows().iter().map(|r| r.group_code.clone()).collect()
}

/// Distinct series, named by the first two characters of each group code
pub fn series_codes(group: &DisciplineGroup) -> BTreeSet<String> {
    group
        .rows()
        .iter()
        .map(|r| r.group_code.chars().take(2).collect())
        .collect()
}

/// Whether the representative row belongs to a graduating cohort's last semester.
///
/// CTI programs graduate in year 4; everything else in year 3 (bachelor) or 5 (master).
pub fn is_final_semester(group: &DisciplineGroup) -> bool {
    let row = group.representative();
    if row.semester != Some(2) {
        return false;
    }

    let cti = row.domain_tag.contains("CTI");
    match row.study_year {
        Some(4) => cti,
        Some(3) | Some(5) => !cti,
        _ => false,
    }
}

pub fn teaching_weeks_semester2(group: &DisciplineGroup) -> u8 {
    if is_final_semester(group) {
        FINAL_SEMESTER_WEEKS
    } else {
        REGULAR_WEEKS
    }
}

/// Contractual act classification: 2 for final-year INF cohorts, 1 otherwise
pub fn act_code(group: &DisciplineGroup) -> u8 {
    let row = group.representative();
    let final_year = matches!(row.study_year, Some(4) | Some(5));
    if final_year && row.domain_tag.contains("INF") {
        2
    } else {
        1
    }
}

fn sum_hours<F>(group: &DisciplineGroup, semester: i64, keep: F) -> Option<f64>
where
    F: Fn(&super::CourseRow) -> bool,
{
    let total: f64 = group
        .rows()
        .iter()
        .filter(|r| r.in_semester(semester) && keep(*r))
        .map(|r| r.hours)
        .sum();

    (total != 0.0).then_some(total)
}

/// Weekly lecture hours in a semester; None when there are none
pub fn lecture_hours(group: &DisciplineGroup, semester: i64) -> Option<f64> {
    sum_hours(group, semester, |r| r.is_lecture())
}

/// Weekly seminar/lab hours in a semester; None when there are none
pub fn non_lecture_hours(group: &DisciplineGroup, semester: i64) -> Option<f64> {
    sum_hours(group, semester, |r| !r.is_lecture())
}

pub fn rank_title(group: &DisciplineGroup) -> &'static str {
    if group.rows().iter().any(|r| r.is_lecture()) {
        TITLE_LECTURER
    } else {
        TITLE_ASSISTANT
    }
}

/// Derive the post for one discipline group
pub fn build_post(group: &DisciplineGroup, faculty: &str, defaults: &PostDefaults) -> PostRecord {
    let series: Vec<String> = series_codes(group).into_iter().collect();

    PostRecord {
        title: rank_title(group).to_string(),
        hiring_status: NOT_HIRED.to_string(),
        name: VACANT_NAME.to_string(),
        discipline: group.discipline().to_string(),
        faculty: faculty.to_string(),
        act_code: act_code(group),
        study_year: group.representative().study_year,
        series: series.join(", "),
        groups: group_codes(group).join(", "),
        lecture_sem1: lecture_hours(group, 1),
        lecture_sem2: lecture_hours(group, 2),
        other_sem1: non_lecture_hours(group, 1),
        other_sem2: non_lecture_hours(group, 2),
        weeks_sem1: REGULAR_WEEKS,
        weeks_sem2: teaching_weeks_semester2(group),
        passthrough: defaults.passthrough(),
    }
}

/// Derive candidate posts for every group and drop exact duplicates, keeping
/// first occurrences.
///
/// Each row of a group yields one candidate carrying that row's study year;
/// every other field is derived from the group as a whole. A discipline taught
/// in several study years therefore produces one post per year.
pub fn create_posts(groups: &[DisciplineGroup], faculty: &str, defaults: &PostDefaults) -> Vec<PostRecord> {
    if !defaults.is_empty() {
        for name in defaults.shadowed() {
            log::debug!("Preloaded value for '{}' is overwritten by derivation", name);
        }
    }

    let mut posts: Vec<PostRecord> = Vec::with_capacity(groups.len());
    for group in groups {
        if !group.is_homogeneous() {
            log::debug!(
                "Discipline '{}' mixes study years or domains; rules read its first row",
                group.discipline()
            );
        }

        let post = build_post(group, faculty, defaults);
        for row in group.rows() {
            let candidate = PostRecord {
                study_year: row.study_year,
                ..post.clone()
            };
            if !posts.contains(&candidate) {
                posts.push(candidate);
            }
        }
    }

    posts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::Cell;
    use crate::staffing::cols;
    use crate::staffing::group::group_by_discipline;
    use crate::staffing::group::tests::row;
    use crate::staffing::CourseRow;

    fn group_of(rows: Vec<CourseRow>) -> DisciplineGroup {
        group_by_discipline(rows).remove(0)
    }

    fn context(semester: i64, year: i64, domain: &str) -> DisciplineGroup {
        let mut r = row("Algebra", "241");
        r.semester = Some(semester);
        r.study_year = Some(year);
        r.domain_tag = domain.to_string();
        group_of(vec![r])
    }

    #[test]
    fn test_algebra_example() {
        let group = group_of(vec![row("Algebra", "241"), row("Algebra", "242")]);
        let post = build_post(&group, "CTI", &PostDefaults::new());

        assert_eq!(post.title, "Lector");
        assert_eq!(post.hiring_status, "NU");
        assert_eq!(post.name, "Vacant");
        assert_eq!(post.discipline, "Algebra");
        assert_eq!(post.faculty, "CTI");
        assert_eq!(post.act_code, 1);
        assert_eq!(post.study_year, Some(1));
        assert_eq!(post.series, "24");
        assert_eq!(post.groups, "241, 242");
        assert_eq!(post.lecture_sem1, Some(4.0));
        assert_eq!(post.lecture_sem2, None);
        assert_eq!(post.weeks_sem1, 14);
        assert_eq!(post.weeks_sem2, 14);

        assert_eq!(post.get(cols::CURS_SEM_2), Some(Cell::Empty));
        assert_eq!(post.get(cols::TOTAL_OC), Some(Cell::Empty));
    }

    #[test]
    fn test_group_codes_keep_repeats() {
        let group = group_of(vec![
            row("Algebra", "241"),
            row("Algebra", "241"),
            row("Algebra", "352"),
        ]);

        assert_eq!(group_codes(&group), vec!["241", "241", "352"]);
        let series: Vec<String> = series_codes(&group).into_iter().collect();
        assert_eq!(series, vec!["24", "35"]);
    }

    #[test]
    fn test_final_semester_rules() {
        assert!(is_final_semester(&context(2, 4, "CTI")));
        assert!(is_final_semester(&context(2, 3, "INF")));
        assert!(is_final_semester(&context(2, 5, "MAT")));

        assert!(!is_final_semester(&context(1, 4, "CTI")));
        assert!(!is_final_semester(&context(2, 3, "CTI")));
        assert!(!is_final_semester(&context(2, 5, "CTI-MASTER")));
        assert!(!is_final_semester(&context(2, 4, "INF")));
        assert!(!is_final_semester(&context(1, 3, "MAT")));
    }

    #[test]
    fn test_missing_semester_is_not_final() {
        let mut r = row("Algebra", "241");
        r.semester = None;
        r.study_year = Some(4);
        assert!(!is_final_semester(&group_of(vec![r])));
    }

    #[test]
    fn test_teaching_weeks() {
        for (semester, year, domain) in [(2, 4, "CTI"), (2, 3, "MAT"), (1, 4, "CTI"), (2, 2, "INF")] {
            let group = context(semester, year, domain);
            let weeks = teaching_weeks_semester2(&group);
            assert_eq!(weeks == FINAL_SEMESTER_WEEKS, is_final_semester(&group));
            assert!(weeks == 10 || weeks == 14);
        }
    }

    #[test]
    fn test_act_code() {
        assert_eq!(act_code(&context(1, 4, "INF")), 2);
        assert_eq!(act_code(&context(2, 5, "INF-MASTER")), 2);
        assert_eq!(act_code(&context(1, 3, "INF")), 1);
        assert_eq!(act_code(&context(1, 4, "CTI")), 1);
        assert_eq!(act_code(&context(1, 5, "MAT")), 1);
    }

    #[test]
    fn test_act_code_reads_first_row_only() {
        let mut first = row("Algebra", "241");
        first.study_year = Some(2);
        first.domain_tag = "INF".to_string();
        let mut second = row("Algebra", "441");
        second.study_year = Some(4);
        second.domain_tag = "INF".to_string();

        let group = group_of(vec![first, second]);
        assert_eq!(act_code(&group), 1);
    }

    #[test]
    fn test_hours_split_by_activity() {
        let mut seminar = row("Algebra", "241");
        seminar.activity = "S".to_string();
        seminar.hours = 1.5;
        let mut lab = row("Algebra", "242");
        lab.activity = "L".to_string();
        lab.semester = Some(2);
        let mut lecture = row("Algebra", "24");
        lecture.semester = Some(2);
        lecture.hours = 3.0;

        let group = group_of(vec![seminar, lab, lecture, row("Algebra", "243")]);

        assert_eq!(lecture_hours(&group, 1), Some(2.0));
        assert_eq!(lecture_hours(&group, 2), Some(3.0));
        assert_eq!(non_lecture_hours(&group, 1), Some(1.5));
        assert_eq!(non_lecture_hours(&group, 2), Some(2.0));

        for semester in [1, 2] {
            let total: f64 = group
                .rows()
                .iter()
                .filter(|r| r.in_semester(semester))
                .map(|r| r.hours)
                .sum();
            let split = lecture_hours(&group, semester).unwrap_or(0.0)
                + non_lecture_hours(&group, semester).unwrap_or(0.0);
            assert_eq!(split, total);
        }
    }

    #[test]
    fn test_zero_hours_become_empty() {
        let mut r = row("Algebra", "241");
        r.hours = 0.0;
        let group = group_of(vec![r]);
        assert_eq!(lecture_hours(&group, 1), None);
        assert_eq!(non_lecture_hours(&group, 1), None);
    }

    #[test]
    fn test_rank_title() {
        let mut seminar = row("Algebra", "241");
        seminar.activity = "S".to_string();
        assert_eq!(rank_title(&group_of(vec![seminar.clone()])), "Asistent");
        assert_eq!(rank_title(&group_of(vec![seminar, row("Algebra", "242")])), "Lector");
    }

    #[test]
    fn test_lecture_code_is_case_sensitive() {
        let mut r = row("Algebra", "241");
        r.activity = "c".to_string();
        assert_eq!(rank_title(&group_of(vec![r])), "Asistent");
    }

    #[test]
    fn test_same_year_rows_collapse_to_one_post() {
        let group = group_of(vec![
            row("Algebra", "241"),
            row("Algebra", "242"),
            row("Algebra", "243"),
        ]);
        let posts = create_posts(&[group], "CTI", &PostDefaults::new());

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].groups, "241, 242, 243");
    }

    #[test]
    fn test_one_post_per_study_year() {
        let mut third_year = row("Algebra", "341");
        third_year.study_year = Some(3);

        let group = group_of(vec![row("Algebra", "241"), third_year, row("Algebra", "242")]);
        let posts = create_posts(&[group], "CTI", &PostDefaults::new());

        let years: Vec<Option<i64>> = posts.iter().map(|p| p.study_year).collect();
        assert_eq!(years, vec![Some(1), Some(3)]);

        // Only the study year differs between the two posts
        assert_eq!(posts[0].groups, "241, 341, 242");
        assert_eq!(posts[1].groups, posts[0].groups);
        assert_eq!(posts[1].series, "24, 34");
        assert_eq!(posts[1].lecture_sem1, Some(6.0));
        assert_eq!(posts[1].act_code, posts[0].act_code);
    }

    #[test]
    fn test_distinct_disciplines_never_collapse() {
        let groups = group_by_discipline(vec![row("Algebra", "241"), row("Logica", "241")]);
        let posts = create_posts(&groups, "CTI", &PostDefaults::new());
        assert_eq!(posts.len(), 2);
    }

    #[test]
    fn test_defaults_only_fill_passthrough_columns() {
        let defaults = PostDefaults::new()
            .with(cols::NUME_ACT, "Licenta")
            .unwrap()
            .with(cols::NUME, "Popescu")
            .unwrap();

        let group = group_of(vec![row("Algebra", "241")]);
        let posts = create_posts(&[group], "CTI", &defaults);

        assert_eq!(posts[0].get(cols::NUME_ACT), Some(Cell::from("Licenta")));
        assert_eq!(posts[0].get(cols::NUME), Some(Cell::from("Vacant")));
    }
}
