//! PostgreSQL-backed `StudentRepository`.

use super::StudentRepository;
use crate::error::StoreError;
use crate::model::{NewStudent, Student, StudentChanges};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone, Debug)]
pub struct PgStudentRepository {
    pool: PgPool,
}

impl PgStudentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a unique-constraint violation to `EmailTaken`; the only unique column is `email`.
fn map_write_error(e: sqlx::Error, email: &str) -> StoreError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return StoreError::EmailTaken(email.to_string());
        }
    }
    StoreError::Db(e)
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn find_all(&self) -> Result<Vec<Student>, StoreError> {
        let rows = sqlx::query_as::<_, Student>("SELECT id, name, email FROM student")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, StoreError> {
        let row = sqlx::query_as::<_, Student>("SELECT id, name, email FROM student WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, StoreError> {
        let row = sqlx::query_as::<_, Student>("SELECT id, name, email FROM student WHERE email = $1 LIMIT 1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, student: &NewStudent) -> Result<Student, StoreError> {
        sqlx::query_as::<_, Student>(
            "INSERT INTO student (name, email) VALUES ($1, $2) RETURNING id, name, email",
        )
        .bind(&student.name)
        .bind(&student.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &student.email))
    }

    async fn insert_many(&self, students: &[NewStudent]) -> Result<Vec<Student>, StoreError> {
        if students.is_empty() {
            return Ok(Vec::new());
        }
        let mut out = Vec::with_capacity(students.len());
        let mut tx = self.pool.begin().await?;
        for student in students {
            let row = sqlx::query_as::<_, Student>(
                "INSERT INTO student (name, email) VALUES ($1, $2) RETURNING id, name, email",
            )
            .bind(&student.name)
            .bind(&student.email)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| map_write_error(e, &student.email))?;
            out.push(row);
        }
        tx.commit().await?;
        Ok(out)
    }

    async fn update(&self, id: i64, changes: &StudentChanges) -> Result<Option<Student>, StoreError> {
        sqlx::query_as::<_, Student>(
            "UPDATE student SET name = COALESCE($2, name), email = COALESCE($3, email) \
             WHERE id = $1 RETURNING id, name, email",
        )
        .bind(id)
        .bind(changes.name.as_deref())
        .bind(changes.email.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, changes.email.as_deref().unwrap_or_default()))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM student WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
