use serde::{Deserialize, Serialize};

use crate::domain::types::{CourseId, CourseTitle, Credits};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub course_id: CourseId,
    pub title: CourseTitle,
    pub credits: Credits,
}

impl Course {
    #[must_use]
    pub fn new(course_id: CourseId, title: CourseTitle, credits: Credits) -> Self {
        Self {
            course_id,
            title,
            credits,
        }
    }
}
