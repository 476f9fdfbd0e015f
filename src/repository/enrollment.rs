use diesel::prelude::*;

use crate::domain::course::Course;
use crate::domain::enrollment::{Enrollment, NewEnrollment};
use crate::domain::types::StudentId;
use crate::models::course::Course as DbCourse;
use crate::models::enrollment::{Enrollment as DbEnrollment, NewEnrollment as DbNewEnrollment};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, EnrollmentReader, EnrollmentWriter};
use crate::schema::{courses, enrollments};

impl EnrollmentReader for DieselRepository {
    fn list_student_enrollments(
        &self,
        student_id: StudentId,
    ) -> RepositoryResult<Vec<(Enrollment, Course)>> {
        let mut conn = self.conn()?;

        let rows = enrollments::table
            .inner_join(courses::table)
            .filter(enrollments::student_id.eq(student_id.get()))
            .order(courses::course_id.asc())
            .select((DbEnrollment::as_select(), DbCourse::as_select()))
            .load::<(DbEnrollment, DbCourse)>(&mut conn)?;

        rows.into_iter()
            .map(|(enrollment, course)| -> RepositoryResult<(Enrollment, Course)> {
                Ok((
                    Enrollment::try_from(enrollment).map_err(RepositoryError::from)?,
                    Course::try_from(course).map_err(RepositoryError::from)?,
                ))
            })
            .collect()
    }
}

impl EnrollmentWriter for DieselRepository {
    fn create_enrollments(&self, new_enrollments: &[NewEnrollment]) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let insertables: Vec<DbNewEnrollment> = new_enrollments.iter().map(Into::into).collect();
        let affected = diesel::insert_into(enrollments::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
