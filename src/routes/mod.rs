//! Router assembly: common routes, student routes, and middleware.

mod common;
mod student;

pub use common::common_routes;
pub use student::student_routes;

use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Maximum accepted request body.
pub const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(student_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES)),
        )
}
