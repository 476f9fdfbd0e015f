//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::course::Course;
use crate::domain::enrollment::{Enrollment, NewEnrollment};
use crate::domain::student::{NewStudent, Student, UpdateStudent};
use crate::domain::types::StudentId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CourseReader, CourseWriter, EnrollmentReader, EnrollmentWriter, StudentReader, StudentWriter,
};

mock! {
    pub Repository {}

    impl StudentReader for Repository {
        fn get_student_by_id(&self, id: StudentId) -> RepositoryResult<Option<Student>>;
        fn count_students(&self) -> RepositoryResult<usize>;
    }

    impl StudentWriter for Repository {
        fn create_student(&self, new_student: &NewStudent) -> RepositoryResult<Student>;
        fn update_student(
            &self,
            id: StudentId,
            updates: &UpdateStudent,
        ) -> RepositoryResult<Student>;
        fn delete_student(&self, id: StudentId) -> RepositoryResult<()>;
    }

    impl CourseReader for Repository {
        fn list_courses(&self) -> RepositoryResult<Vec<Course>>;
    }

    impl CourseWriter for Repository {
        fn create_courses(&self, courses: &[Course]) -> RepositoryResult<usize>;
    }

    impl EnrollmentReader for Repository {
        fn list_student_enrollments(
            &self,
            student_id: StudentId,
        ) -> RepositoryResult<Vec<(Enrollment, Course)>>;
    }

    impl EnrollmentWriter for Repository {
        fn create_enrollments(&self, enrollments: &[NewEnrollment]) -> RepositoryResult<usize>;
    }
}
