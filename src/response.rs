//! Response bodies shared by the student handlers.

use crate::model::StudentSummary;
use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Message {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<StudentSummary>,
}

#[derive(Serialize, Debug)]
pub struct StudentsAdded {
    pub message: &'static str,
    pub added_students: Vec<StudentSummary>,
}

#[derive(Serialize, Debug)]
pub struct StudentUpdated {
    pub message: &'static str,
    pub student: StudentSummary,
}

pub fn message(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<Message>) {
    (
        status,
        Json(Message {
            message: message.into(),
            data: None,
        }),
    )
}

pub fn students_added(added: Vec<StudentSummary>) -> (StatusCode, Json<StudentsAdded>) {
    (
        StatusCode::OK,
        Json(StudentsAdded {
            message: "Students Added",
            added_students: added,
        }),
    )
}

pub fn student_updated(student: StudentSummary) -> (StatusCode, Json<StudentUpdated>) {
    (
        StatusCode::OK,
        Json(StudentUpdated {
            message: "Student updated",
            student,
        }),
    )
}
