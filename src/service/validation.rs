//! Decoding of student request bodies into typed requests.

use crate::error::AppError;
use crate::model::{NewStudent, StudentChanges};
use serde::Deserialize;
use serde_json::Value;

/// `{name, email}` as sent by clients; either field may be missing.
#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct StudentInput {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

impl StudentInput {
    /// Both fields present and non-empty.
    fn into_new(self) -> Option<NewStudent> {
        match (non_empty(self.name), non_empty(self.email)) {
            (Some(name), Some(email)) => Some(NewStudent { name, email }),
            _ => None,
        }
    }
}

/// Body of `POST /student`: one record or an array of records.
#[derive(Clone, Debug)]
pub enum CreateStudentsRequest {
    One(NewStudent),
    Many(Vec<NewStudent>),
}

impl CreateStudentsRequest {
    pub fn from_value(body: Value) -> Result<Self, AppError> {
        match body {
            Value::Object(_) => {
                let input: StudentInput = decode(body)?;
                input
                    .into_new()
                    .map(CreateStudentsRequest::One)
                    .ok_or_else(|| AppError::validation("Email or name missing"))
            }
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    if !item.is_object() {
                        return Err(AppError::invalid_format());
                    }
                    let input: StudentInput = decode(item)?;
                    let new = input
                        .into_new()
                        .ok_or_else(|| AppError::validation("Email or name missing in one of the students"))?;
                    out.push(new);
                }
                Ok(CreateStudentsRequest::Many(out))
            }
            _ => Err(AppError::invalid_format()),
        }
    }
}

/// Body of `PUT /student`.
#[derive(Clone, Debug)]
pub struct UpdateStudentRequest {
    pub id: i64,
    pub changes: StudentChanges,
}

#[derive(Deserialize)]
struct RawUpdate {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

impl UpdateStudentRequest {
    pub fn from_value(body: Value) -> Result<Self, AppError> {
        if !body.is_object() {
            return Err(AppError::invalid_format());
        }
        let raw: RawUpdate = decode(body)?;
        let id = required_id(raw.id).ok_or_else(|| AppError::validation("Student id required"))?;
        Ok(UpdateStudentRequest {
            id,
            changes: StudentChanges {
                name: non_empty(raw.name),
                email: non_empty(raw.email),
            },
        })
    }
}

/// Body of `DELETE /student`.
#[derive(Clone, Debug)]
pub struct DeleteStudentRequest {
    pub id: i64,
}

#[derive(Deserialize)]
struct RawDelete {
    #[serde(default)]
    id: Option<i64>,
}

impl DeleteStudentRequest {
    pub fn from_value(body: Value) -> Result<Self, AppError> {
        if !body.is_object() {
            return Err(AppError::invalid_format());
        }
        let raw: RawDelete = decode(body)?;
        let id = required_id(raw.id).ok_or_else(|| AppError::validation("Id required to delete student"))?;
        Ok(DeleteStudentRequest { id })
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, AppError> {
    serde_json::from_value(value).map_err(|_| AppError::invalid_format())
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}

/// Ids are assigned from 1; zero counts as absent.
fn required_id(id: Option<i64>) -> Option<i64> {
    id.filter(|id| *id != 0)
}
