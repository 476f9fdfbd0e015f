use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::student::{NewStudent, UpdateStudent};
use crate::forms::FormError;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize, Validate)]
/// Form data for creating or editing a student.
pub struct StudentForm {
    /// Family name.
    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
    /// First and middle names.
    #[validate(length(min = 1, max = 50))]
    pub first_mid_name: String,
    /// Enrollment date as `YYYY-MM-DD`.
    pub enrollment_date: String,
}

impl StudentForm {
    fn parse_date(&self) -> Result<NaiveDate, FormError> {
        NaiveDate::parse_from_str(self.enrollment_date.trim(), DATE_FORMAT)
            .map_err(|_| FormError::InvalidDate)
    }

    /// Validates the form and converts it into a creation payload.
    pub fn to_new_student(&self) -> Result<NewStudent, FormError> {
        self.validate()?;
        let enrollment_date = self.parse_date()?;
        NewStudent::try_new(&self.last_name, &self.first_mid_name, enrollment_date)
            .map_err(|_| FormError::InvalidName)
    }

    /// Validates the form and converts it into an update payload.
    pub fn to_update_student(&self) -> Result<UpdateStudent, FormError> {
        self.validate()?;
        let enrollment_date = self.parse_date()?;
        UpdateStudent::try_new(&self.last_name, &self.first_mid_name, enrollment_date)
            .map_err(|_| FormError::InvalidName)
    }
}
