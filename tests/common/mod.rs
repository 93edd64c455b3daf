//! In-memory `StudentRepository` and request helpers for router tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Mutex;
use student_service::{
    app, AppState, NewStudent, Student, StudentChanges, StoreError, StudentRepository,
};
use tower::ServiceExt;

#[derive(Default)]
struct Rows {
    next_id: i64,
    students: Vec<Student>,
}

/// Keeps rows in a vector and enforces the unique email constraint like the database does.
#[derive(Default)]
pub struct MemoryStudentRepository {
    rows: Mutex<Rows>,
}

impl MemoryStudentRepository {
    fn lock(&self) -> std::sync::MutexGuard<'_, Rows> {
        self.rows.lock().unwrap()
    }
}

impl Rows {
    fn email_taken(&self, email: &str, except: Option<i64>) -> bool {
        self.students
            .iter()
            .any(|s| s.email == email && Some(s.id) != except)
    }

    fn push(&mut self, student: &NewStudent) -> Student {
        self.next_id += 1;
        let row = Student {
            id: self.next_id,
            name: student.name.clone(),
            email: student.email.clone(),
        };
        self.students.push(row.clone());
        row
    }
}

#[async_trait]
impl StudentRepository for MemoryStudentRepository {
    async fn find_all(&self) -> Result<Vec<Student>, StoreError> {
        Ok(self.lock().students.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, StoreError> {
        Ok(self.lock().students.iter().find(|s| s.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, StoreError> {
        Ok(self.lock().students.iter().find(|s| s.email == email).cloned())
    }

    async fn insert(&self, student: &NewStudent) -> Result<Student, StoreError> {
        let mut rows = self.lock();
        if rows.email_taken(&student.email, None) {
            return Err(StoreError::EmailTaken(student.email.clone()));
        }
        Ok(rows.push(student))
    }

    async fn insert_many(&self, students: &[NewStudent]) -> Result<Vec<Student>, StoreError> {
        let mut rows = self.lock();
        for (i, student) in students.iter().enumerate() {
            let dup_in_batch = students[..i].iter().any(|s| s.email == student.email);
            if dup_in_batch || rows.email_taken(&student.email, None) {
                return Err(StoreError::EmailTaken(student.email.clone()));
            }
        }
        Ok(students.iter().map(|s| rows.push(s)).collect())
    }

    async fn update(&self, id: i64, changes: &StudentChanges) -> Result<Option<Student>, StoreError> {
        let mut rows = self.lock();
        if let Some(email) = &changes.email {
            if rows.email_taken(email, Some(id)) {
                return Err(StoreError::EmailTaken(email.clone()));
            }
        }
        let Some(row) = rows.students.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        if let Some(name) = &changes.name {
            row.name = name.clone();
        }
        if let Some(email) = &changes.email {
            row.email = email.clone();
        }
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut rows = self.lock();
        let before = rows.students.len();
        rows.students.retain(|s| s.id != id);
        Ok(rows.students.len() != before)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Every operation fails as if the database were unreachable.
pub struct UnavailableRepository;

fn unavailable() -> StoreError {
    StoreError::Db(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl StudentRepository for UnavailableRepository {
    async fn find_all(&self) -> Result<Vec<Student>, StoreError> {
        Err(unavailable())
    }
    async fn find_by_id(&self, _id: i64) -> Result<Option<Student>, StoreError> {
        Err(unavailable())
    }
    async fn find_by_email(&self, _email: &str) -> Result<Option<Student>, StoreError> {
        Err(unavailable())
    }
    async fn insert(&self, _student: &NewStudent) -> Result<Student, StoreError> {
        Err(unavailable())
    }
    async fn insert_many(&self, _students: &[NewStudent]) -> Result<Vec<Student>, StoreError> {
        Err(unavailable())
    }
    async fn update(&self, _id: i64, _changes: &StudentChanges) -> Result<Option<Student>, StoreError> {
        Err(unavailable())
    }
    async fn delete(&self, _id: i64) -> Result<bool, StoreError> {
        Err(unavailable())
    }
    async fn ping(&self) -> Result<(), StoreError> {
        Err(unavailable())
    }
}

pub fn memory_app() -> Router {
    app(AppState::new(MemoryStudentRepository::default()))
}

pub fn unavailable_app() -> Router {
    app(AppState::new(UnavailableRepository))
}

/// Send a request through the router. Returns the status and the body parsed as
/// JSON (or as a JSON string when it is not JSON).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, value)
}
