//! Student CRUD handlers: list, create (single or batch), update, delete, read.

use crate::error::AppError;
use crate::model::StudentSummary;
use crate::response;
use crate::service::{CreateStudentsRequest, DeleteStudentRequest, StudentService, UpdateStudentRequest};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::MissingJsonContentType(_)) => Err(AppError::validation("Request must be JSON")),
        // Chunked bodies have no Content-Length, so the limit layer only trips while buffering.
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => Err(AppError::PayloadTooLarge),
        Err(_) => Err(AppError::invalid_format()),
    }
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::list(state.students.as_ref()).await?;
    Ok((StatusCode::OK, Json(students)))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Response, AppError> {
    let repo = state.students.as_ref();
    match CreateStudentsRequest::from_value(json_body(body)?)? {
        CreateStudentsRequest::One(student) => {
            StudentService::create(repo, student).await?;
            Ok(response::message(StatusCode::OK, "Student Added").into_response())
        }
        CreateStudentsRequest::Many(students) => {
            let added = StudentService::create_many(repo, students).await?;
            let added = added.into_iter().map(StudentSummary::from).collect();
            Ok(response::students_added(added).into_response())
        }
    }
}

pub async fn update(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let req = UpdateStudentRequest::from_value(json_body(body)?)?;
    let student = StudentService::update(state.students.as_ref(), req.id, &req.changes).await?;
    Ok(response::student_updated(StudentSummary::from(student)))
}

pub async fn delete(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let req = DeleteStudentRequest::from_value(json_body(body)?)?;
    StudentService::delete(state.students.as_ref(), req.id).await?;
    Ok(response::message(StatusCode::OK, "Student deleted successfully"))
}

/// Single-student view: `{name, email}` without the id.
pub async fn read(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(|_| AppError::validation("Invalid student id"))?;
    let student = StudentService::read(state.students.as_ref(), id).await?;
    Ok((StatusCode::OK, Json(StudentSummary::from(student))))
}
