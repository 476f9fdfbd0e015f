use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};
use diesel::sqlite::Sqlite;

use crate::domain::student::{NewStudent, Student, StudentSort, StudentSortKey, UpdateStudent};
use crate::domain::types::StudentId;
use crate::models::student::{
    NewStudent as DbNewStudent, Student as DbStudent, UpdateStudent as DbUpdateStudent,
};
use crate::pagination::{ListingSource, SortDirection};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, StudentReader, StudentWriter};
use crate::schema::{enrollments, students};

diesel::define_sql_function! {
    /// SQLite `instr()`: 1-based position of `needle` in `haystack`, 0 when absent.
    /// Unlike `LIKE` it compares case-sensitively.
    fn instr(haystack: Text, needle: Text) -> Integer;
}

impl DieselRepository {
    /// Deferred query over the students table for [`crate::pagination::build_page`].
    pub fn student_source(&self) -> DieselStudentSource<'_> {
        DieselStudentSource::new(self)
    }
}

/// [`ListingSource`] over the `students` table.
///
/// Filters and ordering are only recorded; `count` and `slice` each build
/// and run one statement, so a page never loads more than `limit` rows.
/// No tie-break column is added to the ordering.
pub struct DieselStudentSource<'a> {
    repo: &'a DieselRepository,
    terms: Vec<String>,
    sort: Option<StudentSort>,
}

impl<'a> DieselStudentSource<'a> {
    pub fn new(repo: &'a DieselRepository) -> Self {
        Self {
            repo,
            terms: Vec::new(),
            sort: None,
        }
    }

    fn filtered(&self) -> students::BoxedQuery<'static, Sqlite> {
        let mut query = students::table.into_boxed();
        for term in &self.terms {
            query = query.filter(
                instr(students::last_name, term.clone())
                    .gt(0)
                    .or(instr(students::first_mid_name, term.clone()).gt(0)),
            );
        }
        query
    }

    fn ordered(&self) -> students::BoxedQuery<'static, Sqlite> {
        let query = self.filtered();
        let Some(sort) = self.sort else {
            return query;
        };
        match (sort.key, sort.direction) {
            (StudentSortKey::LastName, SortDirection::Ascending) => {
                query.order(students::last_name.asc())
            }
            (StudentSortKey::LastName, SortDirection::Descending) => {
                query.order(students::last_name.desc())
            }
            (StudentSortKey::EnrollmentDate, SortDirection::Ascending) => {
                query.order(students::enrollment_date.asc())
            }
            (StudentSortKey::EnrollmentDate, SortDirection::Descending) => {
                query.order(students::enrollment_date.desc())
            }
        }
    }
}

impl ListingSource for DieselStudentSource<'_> {
    type Item = Student;
    type Sort = StudentSort;

    fn filter(mut self, term: &str) -> Self {
        self.terms.push(term.to_string());
        self
    }

    fn order_by(mut self, sort: StudentSort) -> Self {
        self.sort = Some(sort);
        self
    }

    fn count(&self) -> RepositoryResult<usize> {
        let mut conn = self.repo.conn()?;
        let total: i64 = self.filtered().count().get_result(&mut conn)?;
        Ok(total as usize)
    }

    fn slice(&self, offset: usize, limit: usize) -> RepositoryResult<Vec<Student>> {
        let mut conn = self.repo.conn()?;
        self.ordered()
            .offset(offset as i64)
            .limit(limit as i64)
            .load::<DbStudent>(&mut conn)?
            .into_iter()
            .map(|student| Student::try_from(student).map_err(RepositoryError::from))
            .collect()
    }
}

impl StudentReader for DieselRepository {
    fn get_student_by_id(&self, id: StudentId) -> RepositoryResult<Option<Student>> {
        let mut conn = self.conn()?;
        let student = students::table
            .find(id.get())
            .first::<DbStudent>(&mut conn)
            .optional()?;

        student
            .map(Student::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn count_students(&self) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let total: i64 = students::table.count().get_result(&mut conn)?;
        Ok(total as usize)
    }
}

impl StudentWriter for DieselRepository {
    fn create_student(&self, new_student: &NewStudent) -> RepositoryResult<Student> {
        let mut conn = self.conn()?;
        let insertable: DbNewStudent = new_student.into();
        let created = diesel::insert_into(students::table)
            .values(&insertable)
            .get_result::<DbStudent>(&mut conn)?;

        Ok(Student::try_from(created)?)
    }

    fn update_student(&self, id: StudentId, updates: &UpdateStudent) -> RepositoryResult<Student> {
        let mut conn = self.conn()?;
        let changes: DbUpdateStudent = updates.into();
        let updated = diesel::update(students::table.find(id.get()))
            .set(&changes)
            .get_result::<DbStudent>(&mut conn)?;

        Ok(Student::try_from(updated)?)
    }

    fn delete_student(&self, id: StudentId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        diesel::delete(enrollments::table.filter(enrollments::student_id.eq(id.get())))
            .execute(&mut conn)?;
        let deleted = diesel::delete(students::table.find(id.get())).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
