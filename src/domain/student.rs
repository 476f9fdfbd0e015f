use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{FirstMidName, LastName, StudentId, TypeConstraintError};
use crate::pagination::{ListingRecord, SortDirection, SortOrder};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Student {
    pub id: StudentId,
    pub last_name: LastName,
    pub first_mid_name: FirstMidName,
    pub enrollment_date: NaiveDate,
}

impl Student {
    /// Case-sensitive substring test on either name.
    pub fn name_contains(&self, term: &str) -> bool {
        self.last_name.contains(term) || self.first_mid_name.contains(term)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewStudent {
    pub last_name: LastName,
    pub first_mid_name: FirstMidName,
    pub enrollment_date: NaiveDate,
}

impl NewStudent {
    /// Validates raw names and builds the payload.
    pub fn try_new(
        last_name: impl Into<String>,
        first_mid_name: impl Into<String>,
        enrollment_date: NaiveDate,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            last_name: LastName::new(last_name)?,
            first_mid_name: FirstMidName::new(first_mid_name)?,
            enrollment_date,
        })
    }
}

/// Editable columns of a student. Anything else on the row is left alone.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UpdateStudent {
    pub last_name: LastName,
    pub first_mid_name: FirstMidName,
    pub enrollment_date: NaiveDate,
}

impl UpdateStudent {
    pub fn try_new(
        last_name: impl Into<String>,
        first_mid_name: impl Into<String>,
        enrollment_date: NaiveDate,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            last_name: LastName::new(last_name)?,
            first_mid_name: FirstMidName::new(first_mid_name)?,
            enrollment_date,
        })
    }
}

/// Column a student listing can be ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum StudentSortKey {
    #[default]
    LastName,
    EnrollmentDate,
}

/// Ordering of the students index, addressed by the `sort_order` token.
///
/// | token       | key            | direction  |
/// |-------------|----------------|------------|
/// | `""`        | last name      | ascending  |
/// | `name_desc` | last name      | descending |
/// | `Date`      | enrollment day | ascending  |
/// | `date_desc` | enrollment day | descending |
///
/// Any other token selects the default, last name ascending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StudentSort {
    pub key: StudentSortKey,
    pub direction: SortDirection,
}

impl StudentSort {
    pub const NAME_DESC: &'static str = "name_desc";
    pub const DATE_ASC: &'static str = "Date";
    pub const DATE_DESC: &'static str = "date_desc";

    pub const fn new(key: StudentSortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Token for the "Last Name" column header: flips to descending only
    /// from the default ordering.
    pub fn name_toggle_token(self) -> &'static str {
        if self == Self::default() {
            Self::NAME_DESC
        } else {
            ""
        }
    }

    /// Token for the "Enrollment Date" column header: flips to descending
    /// only from date ascending.
    pub fn date_toggle_token(self) -> &'static str {
        if self == Self::new(StudentSortKey::EnrollmentDate, SortDirection::Ascending) {
            Self::DATE_DESC
        } else {
            Self::DATE_ASC
        }
    }
}

impl SortOrder for StudentSort {
    fn from_token(token: &str) -> Self {
        match token {
            Self::NAME_DESC => Self::new(StudentSortKey::LastName, SortDirection::Descending),
            Self::DATE_ASC => Self::new(StudentSortKey::EnrollmentDate, SortDirection::Ascending),
            Self::DATE_DESC => Self::new(StudentSortKey::EnrollmentDate, SortDirection::Descending),
            _ => Self::default(),
        }
    }

    fn token(self) -> &'static str {
        match (self.key, self.direction) {
            (StudentSortKey::LastName, SortDirection::Ascending) => "",
            (StudentSortKey::LastName, SortDirection::Descending) => Self::NAME_DESC,
            (StudentSortKey::EnrollmentDate, SortDirection::Ascending) => Self::DATE_ASC,
            (StudentSortKey::EnrollmentDate, SortDirection::Descending) => Self::DATE_DESC,
        }
    }
}

impl ListingRecord for Student {
    type Sort = StudentSort;

    fn matches(&self, term: &str) -> bool {
        self.name_contains(term)
    }

    fn compare(&self, other: &Self, sort: StudentSort) -> Ordering {
        let ordering = match sort.key {
            StudentSortKey::LastName => self.last_name.cmp(&other.last_name),
            StudentSortKey::EnrollmentDate => self.enrollment_date.cmp(&other.enrollment_date),
        };
        sort.direction.apply(ordering)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: i32, last: &str, first: &str, date: (i32, u32, u32)) -> Student {
        Student {
            id: StudentId::new(id).unwrap(),
            last_name: LastName::new(last).unwrap(),
            first_mid_name: FirstMidName::new(first).unwrap(),
            enrollment_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        }
    }

    #[test]
    fn sort_tokens_follow_lookup_table() {
        assert_eq!(StudentSort::from_token(""), StudentSort::default());
        assert_eq!(
            StudentSort::from_token("name_desc"),
            StudentSort::new(StudentSortKey::LastName, SortDirection::Descending)
        );
        assert_eq!(
            StudentSort::from_token("Date"),
            StudentSort::new(StudentSortKey::EnrollmentDate, SortDirection::Ascending)
        );
        assert_eq!(
            StudentSort::from_token("date_desc"),
            StudentSort::new(StudentSortKey::EnrollmentDate, SortDirection::Descending)
        );
    }

    #[test]
    fn unknown_sort_tokens_fall_back_to_last_name() {
        assert_eq!(StudentSort::from_token("date"), StudentSort::default());
        assert_eq!(StudentSort::from_token("bogus"), StudentSort::default());
    }

    #[test]
    fn tokens_round_trip() {
        for token in ["", "name_desc", "Date", "date_desc"] {
            assert_eq!(StudentSort::from_token(token).token(), token);
        }
    }

    #[test]
    fn column_toggles() {
        let default = StudentSort::default();
        assert_eq!(default.name_toggle_token(), "name_desc");
        assert_eq!(default.date_toggle_token(), "Date");

        let date_asc = StudentSort::from_token("Date");
        assert_eq!(date_asc.name_toggle_token(), "");
        assert_eq!(date_asc.date_toggle_token(), "date_desc");

        let date_desc = StudentSort::from_token("date_desc");
        assert_eq!(date_desc.date_toggle_token(), "Date");
    }

    #[test]
    fn matching_checks_both_names_case_sensitively() {
        let carson = student(1, "Alexander", "Carson", (2005, 9, 1));
        assert!(carson.matches("xan"));
        assert!(carson.matches("rso"));
        assert!(!carson.matches("alex"));
    }

    #[test]
    fn compare_respects_direction() {
        let a = student(1, "Alonso", "Meredith", (2002, 9, 1));
        let b = student(2, "Norman", "Laura", (2003, 9, 1));
        assert_eq!(a.compare(&b, StudentSort::default()), Ordering::Less);
        assert_eq!(
            a.compare(&b, StudentSort::from_token("date_desc")),
            Ordering::Greater
        );
    }
}
