//! Domain aggregates exposed by the records service layer.

pub mod course;
pub mod enrollment;
pub mod student;
pub mod types;
