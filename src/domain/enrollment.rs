use serde::{Deserialize, Serialize};

use crate::domain::types::{CourseId, EnrollmentId, Grade, StudentId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Enrollment {
    pub enrollment_id: EnrollmentId,
    pub course_id: CourseId,
    pub student_id: StudentId,
    /// `None` until a grade is assigned.
    pub grade: Option<Grade>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewEnrollment {
    pub course_id: CourseId,
    pub student_id: StudentId,
    pub grade: Option<Grade>,
}

impl NewEnrollment {
    #[must_use]
    pub fn new(student_id: StudentId, course_id: CourseId, grade: Option<Grade>) -> Self {
        Self {
            course_id,
            student_id,
            grade,
        }
    }
}
