//! `/student` and `/student/:id`, bound to the student handlers.

use crate::handlers::student::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn student_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/student",
            get(list).post(create).put(update).delete(delete_handler),
        )
        .route("/student/:id", get(read))
        .with_state(state)
}
