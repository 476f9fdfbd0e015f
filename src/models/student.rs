use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::student::{
    NewStudent as DomainNewStudent, Student as DomainStudent,
    UpdateStudent as DomainUpdateStudent,
};
use crate::domain::types::{FirstMidName, LastName, StudentId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::students)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::student::Student`].
pub struct Student {
    pub id: i32,
    pub last_name: String,
    pub first_mid_name: String,
    pub enrollment_date: NaiveDate,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::students)]
/// Insertable form of [`Student`].
pub struct NewStudent<'a> {
    pub last_name: &'a str,
    pub first_mid_name: &'a str,
    pub enrollment_date: NaiveDate,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::students)]
/// Data used when updating a [`Student`] record.
pub struct UpdateStudent<'a> {
    pub last_name: &'a str,
    pub first_mid_name: &'a str,
    pub enrollment_date: NaiveDate,
}

impl TryFrom<Student> for DomainStudent {
    type Error = TypeConstraintError;

    fn try_from(student: Student) -> Result<Self, Self::Error> {
        Ok(Self {
            id: StudentId::new(student.id)?,
            last_name: LastName::new(student.last_name)?,
            first_mid_name: FirstMidName::new(student.first_mid_name)?,
            enrollment_date: student.enrollment_date,
        })
    }
}

impl<'a> From<&'a DomainNewStudent> for NewStudent<'a> {
    fn from(student: &'a DomainNewStudent) -> Self {
        Self {
            last_name: student.last_name.as_str(),
            first_mid_name: student.first_mid_name.as_str(),
            enrollment_date: student.enrollment_date,
        }
    }
}

impl<'a> From<&'a DomainUpdateStudent> for UpdateStudent<'a> {
    fn from(student: &'a DomainUpdateStudent) -> Self {
        Self {
            last_name: student.last_name.as_str(),
            first_mid_name: student.first_mid_name.as_str(),
            enrollment_date: student.enrollment_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2003, 9, 1).unwrap()
    }

    #[test]
    fn from_domain_new_creates_newstudent() {
        let domain = DomainNewStudent::try_new("Anand", "Arturo", date()).unwrap();
        let new: NewStudent = (&domain).into();
        assert_eq!(new.last_name, "Anand");
        assert_eq!(new.first_mid_name, "Arturo");
        assert_eq!(new.enrollment_date, date());
    }

    #[test]
    fn from_domain_update_creates_updatestudent() {
        let domain = DomainUpdateStudent::try_new("Norman", "Laura", date()).unwrap();
        let update: UpdateStudent = (&domain).into();
        assert_eq!(update.last_name, "Norman");
        assert_eq!(update.first_mid_name, "Laura");
    }

    #[test]
    fn student_into_domain() {
        let db_student = Student {
            id: 7,
            last_name: "Norman".to_string(),
            first_mid_name: "Laura".to_string(),
            enrollment_date: date(),
        };
        let domain = DomainStudent::try_from(db_student).unwrap();
        assert_eq!(domain.id.get(), 7);
        assert_eq!(domain.last_name.as_str(), "Norman");
        assert_eq!(domain.enrollment_date, date());
    }

    #[test]
    fn blank_names_are_rejected() {
        let db_student = Student {
            id: 1,
            last_name: " ".to_string(),
            first_mid_name: "Laura".to_string(),
            enrollment_date: date(),
        };
        assert_eq!(
            DomainStudent::try_from(db_student),
            Err(TypeConstraintError::EmptyString)
        );
    }
}
