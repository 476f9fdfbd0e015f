//! Reference data loaded into an empty database on start-up.

use chrono::NaiveDate;

use crate::domain::course::Course;
use crate::domain::enrollment::NewEnrollment;
use crate::domain::student::NewStudent;
use crate::domain::types::{CourseId, CourseTitle, Credits, Grade};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CourseWriter, EnrollmentWriter, StudentReader, StudentWriter};

/// (last name, first and middle names, enrollment date)
const STUDENTS: [(&str, &str, &str); 8] = [
    ("Alexander", "Carson", "2005-09-01"),
    ("Alonso", "Meredith", "2002-09-01"),
    ("Anand", "Arturo", "2003-09-01"),
    ("Barzdukas", "Gytis", "2002-09-01"),
    ("Li", "Yan", "2002-09-01"),
    ("Justice", "Peggy", "2001-09-01"),
    ("Norman", "Laura", "2003-09-01"),
    ("Olivetto", "Nino", "2005-09-01"),
];

/// (course number, title, credits)
const COURSES: [(i32, &str, i32); 7] = [
    (1050, "Chemistry", 3),
    (4022, "Microeconomics", 3),
    (4041, "Macroeconomics", 3),
    (1045, "Calculus", 4),
    (3141, "Trigonometry", 4),
    (2021, "Composition", 3),
    (2042, "Literature", 4),
];

/// (position in [`STUDENTS`], course number, grade)
const ENROLLMENTS: [(usize, i32, Option<Grade>); 12] = [
    (0, 1050, Some(Grade::A)),
    (0, 4022, Some(Grade::C)),
    (0, 4041, Some(Grade::B)),
    (1, 1045, Some(Grade::B)),
    (1, 3141, Some(Grade::F)),
    (1, 2021, Some(Grade::F)),
    (2, 1050, None),
    (3, 1050, None),
    (3, 4022, Some(Grade::F)),
    (4, 4041, Some(Grade::C)),
    (5, 1045, None),
    (6, 3141, Some(Grade::A)),
];

/// Populates an empty database with the reference students, courses and
/// enrollments.
///
/// Returns `false` without touching anything when at least one student
/// already exists.
pub fn seed_database<R>(repo: &R) -> RepositoryResult<bool>
where
    R: StudentReader + StudentWriter + CourseWriter + EnrollmentWriter + ?Sized,
{
    if repo.count_students()? > 0 {
        log::debug!("Database already seeded");
        return Ok(false);
    }

    let mut student_ids = Vec::with_capacity(STUDENTS.len());
    for (last_name, first_mid_name, enrolled) in STUDENTS {
        let enrollment_date = NaiveDate::parse_from_str(enrolled, "%Y-%m-%d")
            .map_err(|e| RepositoryError::ValidationError(format!("{enrolled}: {e}")))?;
        let student = repo.create_student(&NewStudent::try_new(
            last_name,
            first_mid_name,
            enrollment_date,
        )?)?;
        student_ids.push(student.id);
    }

    let courses = COURSES
        .iter()
        .map(|&(course_id, title, credits)| -> RepositoryResult<Course> {
            Ok(Course::new(
                CourseId::new(course_id)?,
                CourseTitle::new(title)?,
                Credits::new(credits)?,
            ))
        })
        .collect::<RepositoryResult<Vec<_>>>()?;
    repo.create_courses(&courses)?;

    let enrollments = ENROLLMENTS
        .iter()
        .map(|&(student, course_id, grade)| -> RepositoryResult<NewEnrollment> {
            Ok(NewEnrollment::new(
                student_ids[student],
                CourseId::new(course_id)?,
                grade,
            ))
        })
        .collect::<RepositoryResult<Vec<_>>>()?;
    repo.create_enrollments(&enrollments)?;

    log::info!(
        "Seeded {} students, {} courses and {} enrollments",
        student_ids.len(),
        courses.len(),
        enrollments.len()
    );

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::student::Student;
    use crate::domain::types::StudentId;
    use crate::repository::mock::MockRepository;

    #[test]
    fn skips_seeding_when_students_exist() {
        let mut repo = MockRepository::new();
        repo.expect_count_students().times(1).returning(|| Ok(8));
        repo.expect_create_student().never();
        repo.expect_create_courses().never();
        repo.expect_create_enrollments().never();

        assert!(!seed_database(&repo).unwrap());
    }

    #[test]
    fn seeds_reference_data_into_empty_store() {
        let mut repo = MockRepository::new();
        repo.expect_count_students().times(1).returning(|| Ok(0));

        let mut next_id = 0;
        repo.expect_create_student()
            .times(8)
            .returning(move |new_student| {
                next_id += 1;
                Ok(Student {
                    id: StudentId::new(next_id).unwrap(),
                    last_name: new_student.last_name.clone(),
                    first_mid_name: new_student.first_mid_name.clone(),
                    enrollment_date: new_student.enrollment_date,
                })
            });
        repo.expect_create_courses()
            .times(1)
            .withf(|courses| courses.len() == 7 && courses[0].title.as_str() == "Chemistry")
            .returning(|courses| Ok(courses.len()));
        repo.expect_create_enrollments()
            .times(1)
            .withf(|enrollments| {
                enrollments.len() == 12
                    && enrollments[0].student_id.get() == 1
                    && enrollments[11].student_id.get() == 7
                    && enrollments[6].grade.is_none()
            })
            .returning(|enrollments| Ok(enrollments.len()));

        assert!(seed_database(&repo).unwrap());
    }
}
