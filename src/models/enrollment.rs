use diesel::prelude::*;

use crate::domain::enrollment::{
    Enrollment as DomainEnrollment, NewEnrollment as DomainNewEnrollment,
};
use crate::domain::types::{CourseId, EnrollmentId, Grade, StudentId, TypeConstraintError};
use crate::models::course::Course;
use crate::models::student::Student;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::enrollments)]
#[diesel(primary_key(enrollment_id))]
#[diesel(belongs_to(Course, foreign_key = course_id))]
#[diesel(belongs_to(Student, foreign_key = student_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::enrollment::Enrollment`].
pub struct Enrollment {
    pub enrollment_id: i32,
    pub course_id: i32,
    pub student_id: i32,
    pub grade: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::enrollments)]
/// Insertable form of [`Enrollment`].
pub struct NewEnrollment {
    pub course_id: i32,
    pub student_id: i32,
    pub grade: Option<&'static str>,
}

impl TryFrom<Enrollment> for DomainEnrollment {
    type Error = TypeConstraintError;

    fn try_from(enrollment: Enrollment) -> Result<Self, Self::Error> {
        Ok(Self {
            enrollment_id: EnrollmentId::new(enrollment.enrollment_id)?,
            course_id: CourseId::new(enrollment.course_id)?,
            student_id: StudentId::new(enrollment.student_id)?,
            grade: enrollment
                .grade
                .as_deref()
                .map(str::parse::<Grade>)
                .transpose()?,
        })
    }
}

impl From<&DomainNewEnrollment> for NewEnrollment {
    fn from(enrollment: &DomainNewEnrollment) -> Self {
        Self {
            course_id: enrollment.course_id.get(),
            student_id: enrollment.student_id.get(),
            grade: enrollment.grade.map(Grade::as_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ungraded_enrollment_stays_ungraded() {
        let row = Enrollment {
            enrollment_id: 1,
            course_id: 1050,
            student_id: 3,
            grade: None,
        };
        let domain = DomainEnrollment::try_from(row).unwrap();
        assert_eq!(domain.grade, None);
        assert_eq!(domain.course_id.get(), 1050);
    }

    #[test]
    fn grade_letters_convert_both_ways() {
        let new = DomainNewEnrollment::new(
            StudentId::new(2).unwrap(),
            CourseId::new(3141).unwrap(),
            Some(Grade::F),
        );
        let insertable = NewEnrollment::from(&new);
        assert_eq!(insertable.grade, Some("F"));

        let row = Enrollment {
            enrollment_id: 5,
            course_id: 3141,
            student_id: 2,
            grade: Some("F".to_string()),
        };
        assert_eq!(
            DomainEnrollment::try_from(row).unwrap().grade,
            Some(Grade::F)
        );
    }
}
