//! Entity access for the `student` table and idempotent schema setup.

mod postgres;

pub use postgres::PgStudentRepository;

use crate::error::StoreError;
use crate::model::{Car, Fruit, NewStudent, Pet, Student, StudentChanges, Table};
use async_trait::async_trait;
use sqlx::PgPool;

/// Query operations against the student table. Every write commits before returning.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// All rows, in no particular order.
    async fn find_all(&self) -> Result<Vec<Student>, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, StoreError>;

    /// Insert one row; storage assigns the id.
    async fn insert(&self, student: &NewStudent) -> Result<Student, StoreError>;

    /// Insert all rows in a single transaction. Either every row is stored or none is.
    async fn insert_many(&self, students: &[NewStudent]) -> Result<Vec<Student>, StoreError>;

    /// Apply the provided fields. Returns `None` when no row has this id.
    async fn update(&self, id: i64, changes: &StudentChanges) -> Result<Option<Student>, StoreError>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;

    /// Round-trip to storage, used by the readiness probe.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Create every table if it does not exist. Existing tables are left untouched.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), StoreError> {
    for (name, ddl) in [
        (Student::NAME, Student::DDL),
        (Car::NAME, Car::DDL),
        (Pet::NAME, Pet::DDL),
        (Fruit::NAME, Fruit::DDL),
    ] {
        sqlx::query(ddl).execute(pool).await?;
        tracing::debug!(table = name, "table ensured");
    }
    Ok(())
}
