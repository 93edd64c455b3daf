//! Server binary: reads config from env, ensures the schema, serves on port 9000.

use sqlx::postgres::PgPoolOptions;
use student_service::{app, ensure_schema, AppState, DbConfig, PgStudentRepository, LISTEN_PORT};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("student_service=info,tower_http=info")),
        )
        .init();

    let db = DbConfig::from_env()?;
    tracing::info!(config = ?db, "connecting to database");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_with(db.connect_options()?)
        .await?;

    ensure_schema(&pool).await?;
    let state = AppState::new(PgStudentRepository::new(pool));

    let listener = TcpListener::bind(("0.0.0.0", LISTEN_PORT)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
