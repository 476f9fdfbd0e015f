use crate::domain::student::{Student, StudentSort};
use crate::domain::types::StudentId;
use crate::dto::students::{EnrollmentDisplay, StudentIndexData, StudentIndexQuery, StudentPageData};
use crate::forms::students::StudentForm;
use crate::pagination::{ListingSource, SortOrder, build_page};
use crate::repository::{EnrollmentReader, StudentReader, StudentWriter};
use crate::services::{ServiceError, ServiceResult};

const SAVE_FAILED: &str =
    "Unable to save changes. Try again, and if the problem persists see your system administrator.";

/// Loads one page of the students index.
///
/// A submitted `search_string` starts a new search: it replaces the filter
/// and sends the caller back to the first page. Otherwise `current_filter`
/// stays in effect and the requested page is kept, also when only the sort
/// order changed.
pub fn load_students_index<S>(
    source: S,
    query: StudentIndexQuery,
    per_page: usize,
) -> ServiceResult<StudentIndexData>
where
    S: ListingSource<Item = Student, Sort = StudentSort>,
{
    let (filter, requested_page) = match query.search_string {
        Some(search) => (search, Some(1)),
        None => (query.current_filter.unwrap_or_default(), query.page_number),
    };
    let filter = Some(filter).filter(|text| !text.is_empty());

    let sort = StudentSort::from_token(query.sort_order.as_deref().unwrap_or_default());

    let students = build_page(
        source,
        sort.token(),
        filter.as_deref(),
        requested_page,
        per_page,
    )
    .map_err(|err| {
        log::error!("Failed to list students: {err}");
        ServiceError::from(err)
    })?;

    Ok(StudentIndexData {
        students,
        current_sort: sort.token().to_string(),
        current_filter: filter,
        name_sort_token: sort.name_toggle_token().to_string(),
        date_sort_token: sort.date_toggle_token().to_string(),
    })
}

fn parse_student_id(id: i32) -> ServiceResult<StudentId> {
    StudentId::new(id).map_err(|_| ServiceError::NotFound)
}

/// Loads a student with their enrollments.
pub fn load_student<R>(repo: &R, id: i32) -> ServiceResult<StudentPageData>
where
    R: StudentReader + EnrollmentReader + ?Sized,
{
    let id = parse_student_id(id)?;

    let student = repo
        .get_student_by_id(id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    let enrollments = repo
        .list_student_enrollments(id)
        .map_err(ServiceError::from)?
        .into_iter()
        .map(|(enrollment, course)| EnrollmentDisplay { enrollment, course })
        .collect();

    Ok(StudentPageData {
        student,
        enrollments,
    })
}

/// Validates the form and stores a new student.
pub fn create_student<R>(repo: &R, form: StudentForm) -> ServiceResult<Student>
where
    R: StudentWriter + ?Sized,
{
    let new_student = form.to_new_student().map_err(|err| {
        log::error!("Failed to validate form: {err}");
        ServiceError::Form(err.to_string())
    })?;

    repo.create_student(&new_student).map_err(|err| {
        log::error!("Failed to add a student: {err}");
        ServiceError::Form(SAVE_FAILED.to_string())
    })
}

/// Validates the form and overwrites the editable columns of a student.
pub fn update_student<R>(repo: &R, id: i32, form: StudentForm) -> ServiceResult<Student>
where
    R: StudentReader + StudentWriter + ?Sized,
{
    let id = parse_student_id(id)?;

    if repo
        .get_student_by_id(id)
        .map_err(ServiceError::from)?
        .is_none()
    {
        return Err(ServiceError::NotFound);
    }

    let updates = form.to_update_student().map_err(|err| {
        log::error!("Failed to validate form: {err}");
        ServiceError::Form(err.to_string())
    })?;

    repo.update_student(id, &updates).map_err(|err| {
        log::error!("Failed to update student {id}: {err}");
        ServiceError::Form(SAVE_FAILED.to_string())
    })
}

/// Deletes a student. Returns `false` when there was nothing to delete.
pub fn delete_student<R>(repo: &R, id: i32) -> ServiceResult<bool>
where
    R: StudentReader + StudentWriter + ?Sized,
{
    let Ok(id) = StudentId::new(id) else {
        return Ok(false);
    };

    if repo
        .get_student_by_id(id)
        .map_err(ServiceError::from)?
        .is_none()
    {
        log::info!("Student {id} already gone, nothing to delete");
        return Ok(false);
    }

    repo.delete_student(id).map_err(|err| {
        log::error!("Failed to delete student {id}: {err}");
        ServiceError::from(err)
    })?;

    Ok(true)
}
