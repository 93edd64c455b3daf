//! StudentService: duplicate detection and not-found handling over a `StudentRepository`.

mod student;
mod validation;
pub use student::StudentService;
pub use validation::{CreateStudentsRequest, DeleteStudentRequest, UpdateStudentRequest};
