//! Student operations shared by the HTTP handlers.

use crate::error::AppError;
use crate::model::{NewStudent, Student, StudentChanges, StudentSummary};
use crate::store::StudentRepository;
use std::collections::HashSet;

pub struct StudentService;

impl StudentService {
    pub async fn list(repo: &dyn StudentRepository) -> Result<Vec<Student>, AppError> {
        Ok(repo.find_all().await?)
    }

    pub async fn read(repo: &dyn StudentRepository, id: i64) -> Result<Student, AppError> {
        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student with id {} does not exist", id)))
    }

    /// Insert one student, rejecting an email that is already taken with the existing record.
    pub async fn create(repo: &dyn StudentRepository, student: NewStudent) -> Result<Student, AppError> {
        if let Some(existing) = repo.find_by_email(&student.email).await? {
            return Err(AppError::EmailTaken {
                email: student.email,
                existing: Some(StudentSummary::from(existing)),
            });
        }
        let created = repo.insert(&student).await?;
        tracing::debug!(id = created.id, "student added");
        Ok(created)
    }

    /// Insert a batch in one commit. Students whose email already exists, either in
    /// storage or earlier in the same batch, are skipped. Returns the rows added.
    pub async fn create_many(
        repo: &dyn StudentRepository,
        students: Vec<NewStudent>,
    ) -> Result<Vec<Student>, AppError> {
        let mut seen: HashSet<String> = HashSet::with_capacity(students.len());
        let mut accepted = Vec::with_capacity(students.len());
        for student in students {
            if seen.contains(&student.email) {
                continue;
            }
            if repo.find_by_email(&student.email).await?.is_some() {
                tracing::debug!(email = %student.email, "skipping existing student");
                continue;
            }
            seen.insert(student.email.clone());
            accepted.push(student);
        }
        let added = repo.insert_many(&accepted).await?;
        tracing::debug!(count = added.len(), "students added");
        Ok(added)
    }

    pub async fn update(
        repo: &dyn StudentRepository,
        id: i64,
        changes: &StudentChanges,
    ) -> Result<Student, AppError> {
        let updated = repo
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student with id {} does not exist", id)))?;
        tracing::debug!(id, "student updated");
        Ok(updated)
    }

    pub async fn delete(repo: &dyn StudentRepository, id: i64) -> Result<(), AppError> {
        if !repo.delete(id).await? {
            return Err(AppError::NotFound("Student to delete does not exist".into()));
        }
        tracing::debug!(id, "student deleted");
        Ok(())
    }
}
