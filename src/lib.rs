//! Student service: JSON CRUD over a PostgreSQL `student` table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{DbConfig, LISTEN_PORT};
pub use error::{AppError, ConfigError, StoreError};
pub use model::{NewStudent, Student, StudentChanges, StudentSummary};
pub use routes::{app, common_routes, student_routes};
pub use service::StudentService;
pub use state::AppState;
pub use store::{ensure_schema, PgStudentRepository, StudentRepository};
