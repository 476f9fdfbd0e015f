//! DTOs exposed by the JSON API endpoints.

use serde::Serialize;

use crate::domain::course::Course;

/// Payload returned by `/api/v1/courses`.
#[derive(Debug, Serialize)]
pub struct CoursesResponse {
    pub total: usize,
    pub courses: Vec<Course>,
}
