use diesel::prelude::*;

use crate::domain::course::Course as DomainCourse;
use crate::domain::types::{CourseId, CourseTitle, Credits, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::courses)]
#[diesel(primary_key(course_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::course::Course`].
pub struct Course {
    pub course_id: i32,
    pub title: String,
    pub credits: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::courses)]
/// Insertable form of [`Course`]; the course number is supplied, not generated.
pub struct NewCourse<'a> {
    pub course_id: i32,
    pub title: &'a str,
    pub credits: i32,
}

impl TryFrom<Course> for DomainCourse {
    type Error = TypeConstraintError;

    fn try_from(course: Course) -> Result<Self, Self::Error> {
        Ok(Self {
            course_id: CourseId::new(course.course_id)?,
            title: CourseTitle::new(course.title)?,
            credits: Credits::new(course.credits)?,
        })
    }
}

impl<'a> From<&'a DomainCourse> for NewCourse<'a> {
    fn from(course: &'a DomainCourse) -> Self {
        Self {
            course_id: course.course_id.get(),
            title: course.title.as_str(),
            credits: course.credits.get(),
        }
    }
}
