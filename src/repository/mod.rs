use crate::db::{DbConnection, DbPool};
use crate::domain::course::Course;
use crate::domain::enrollment::{Enrollment, NewEnrollment};
use crate::domain::student::{NewStudent, Student, UpdateStudent};
use crate::domain::types::StudentId;
use crate::repository::errors::RepositoryResult;

pub mod course;
pub mod enrollment;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod student;

pub use student::DieselStudentSource;

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(crate::db::get_connection(&self.pool)?)
    }
}

pub trait StudentReader {
    fn get_student_by_id(&self, id: StudentId) -> RepositoryResult<Option<Student>>;
    fn count_students(&self) -> RepositoryResult<usize>;
}

pub trait StudentWriter {
    fn create_student(&self, new_student: &NewStudent) -> RepositoryResult<Student>;
    fn update_student(&self, id: StudentId, updates: &UpdateStudent) -> RepositoryResult<Student>;
    /// Removes the student together with their enrollments.
    fn delete_student(&self, id: StudentId) -> RepositoryResult<()>;
}

pub trait CourseReader {
    fn list_courses(&self) -> RepositoryResult<Vec<Course>>;
}

pub trait CourseWriter {
    fn create_courses(&self, courses: &[Course]) -> RepositoryResult<usize>;
}

pub trait EnrollmentReader {
    /// Enrollments of a student paired with their course, by course number.
    fn list_student_enrollments(
        &self,
        student_id: StudentId,
    ) -> RepositoryResult<Vec<(Enrollment, Course)>>;
}

pub trait EnrollmentWriter {
    fn create_enrollments(&self, enrollments: &[NewEnrollment]) -> RepositoryResult<usize>;
}
