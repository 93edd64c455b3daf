//! HTTP handlers for the student resource.

pub mod student;
pub use student::*;
