//! Shared application state for all routes.

use crate::store::StudentRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Storage client created once at startup and shared by every handler.
    pub students: Arc<dyn StudentRepository>,
}

impl AppState {
    pub fn new<R: StudentRepository + 'static>(students: R) -> Self {
        Self {
            students: Arc::new(students),
        }
    }
}
