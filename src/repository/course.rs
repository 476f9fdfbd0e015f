use diesel::prelude::*;

use crate::domain::course::Course;
use crate::models::course::{Course as DbCourse, NewCourse as DbNewCourse};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CourseReader, CourseWriter, DieselRepository};
use crate::schema::courses;

impl CourseReader for DieselRepository {
    fn list_courses(&self) -> RepositoryResult<Vec<Course>> {
        let mut conn = self.conn()?;

        courses::table
            .order(courses::course_id.asc())
            .load::<DbCourse>(&mut conn)?
            .into_iter()
            .map(|course| Course::try_from(course).map_err(RepositoryError::from))
            .collect()
    }
}

impl CourseWriter for DieselRepository {
    fn create_courses(&self, new_courses: &[Course]) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let insertables: Vec<DbNewCourse> = new_courses.iter().map(Into::into).collect();
        let affected = diesel::insert_into(courses::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
