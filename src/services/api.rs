use crate::dto::api::CoursesResponse;
use crate::repository::CourseReader;
use crate::services::{ServiceError, ServiceResult};

/// Returns every course ordered by course number.
pub fn list_courses<R>(repo: &R) -> ServiceResult<CoursesResponse>
where
    R: CourseReader + ?Sized,
{
    let courses = repo.list_courses().map_err(|err| {
        log::error!("Failed to list courses: {err}");
        ServiceError::from(err)
    })?;

    Ok(CoursesResponse {
        total: courses.len(),
        courses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::course::Course;
    use crate::domain::types::{CourseId, CourseTitle, Credits};
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    #[test]
    fn list_courses_counts_results() {
        let mut repo = MockRepository::new();
        repo.expect_list_courses().times(1).returning(|| {
            Ok(vec![Course::new(
                CourseId::new(2042).unwrap(),
                CourseTitle::new("Literature").unwrap(),
                Credits::new(4).unwrap(),
            )])
        });

        let response = list_courses(&repo).unwrap();
        assert_eq!(response.total, 1);
        assert_eq!(response.courses[0].course_id.get(), 2042);
    }

    #[test]
    fn list_courses_propagates_repository_errors() {
        let mut repo = MockRepository::new();
        repo.expect_list_courses()
            .returning(|| Err(RepositoryError::ConnectionError("offline".to_string())));

        assert!(matches!(
            list_courses(&repo),
            Err(ServiceError::Repository(RepositoryError::ConnectionError(_)))
        ));
    }
}
