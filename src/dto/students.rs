use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::course::Course;
use crate::domain::enrollment::Enrollment;
use crate::domain::student::Student;
use crate::pagination::Paginated;

/// Listing state round-tripped by the students index through its query string.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StudentIndexQuery {
    /// Sort token, see [`crate::domain::student::StudentSort`].
    pub sort_order: Option<String>,
    /// Filter that was in effect on the previous page.
    pub current_filter: Option<String>,
    /// Freshly submitted search text. Its presence starts a new search.
    pub search_string: Option<String>,
    /// Requested 1-based page; out of range values are clamped and
    /// anything that is not an integer counts as absent.
    #[serde(default, deserialize_with = "lenient_page")]
    pub page_number: Option<i64>,
}

fn lenient_page<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.trim().parse().ok()))
}

/// Data required to render the students index template.
#[derive(Debug, Serialize)]
pub struct StudentIndexData {
    pub students: Paginated<Student>,
    /// Normalised sort token to echo into navigation links.
    pub current_sort: String,
    /// Filter to echo into navigation links as `current_filter`.
    pub current_filter: Option<String>,
    /// Sort token for the last name column header.
    pub name_sort_token: String,
    /// Sort token for the enrollment date column header.
    pub date_sort_token: String,
}

/// An enrollment together with the course it refers to.
#[derive(Debug, Serialize)]
pub struct EnrollmentDisplay {
    pub enrollment: Enrollment,
    pub course: Course,
}

/// Aggregated data required to render the student details page.
#[derive(Debug, Serialize)]
pub struct StudentPageData {
    pub student: Student,
    pub enrollments: Vec<EnrollmentDisplay>,
}

#[cfg(test)]
mod tests {
    use actix_web::web::Query;

    use super::*;

    #[test]
    fn query_string_is_parsed() {
        let query = Query::<StudentIndexQuery>::from_query(
            "sort_order=date_desc&current_filter=an&page_number=2",
        )
        .unwrap()
        .into_inner();

        assert_eq!(query.sort_order.as_deref(), Some("date_desc"));
        assert_eq!(query.current_filter.as_deref(), Some("an"));
        assert_eq!(query.search_string, None);
        assert_eq!(query.page_number, Some(2));
    }

    #[test]
    fn garbage_page_number_is_ignored() {
        let query = Query::<StudentIndexQuery>::from_query("page_number=abc")
            .unwrap()
            .into_inner();
        assert_eq!(query.page_number, None);

        let query = Query::<StudentIndexQuery>::from_query("page_number=")
            .unwrap()
            .into_inner();
        assert_eq!(query.page_number, None);
    }

    #[test]
    fn negative_page_number_is_kept_for_clamping() {
        let query = Query::<StudentIndexQuery>::from_query("page_number=-4")
            .unwrap()
            .into_inner();
        assert_eq!(query.page_number, Some(-4));
    }

    #[test]
    fn empty_query_string_is_default() {
        let query = Query::<StudentIndexQuery>::from_query("")
            .unwrap()
            .into_inner();
        assert!(query.sort_order.is_none());
        assert!(query.page_number.is_none());
    }
}
