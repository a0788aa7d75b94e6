//! PostgreSQL infrastructure for the member directory
//!
//! This crate provides the connection pool, the member repository, and the
//! adapter implementing the domain port on top of it. The repository
//! pattern keeps SQL out of the domain and API layers.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, PostgresMemberAdapter};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/members")).await?;
//! infra_db::run_migrations(&pool).await?;
//! let adapter = PostgresMemberAdapter::new(pool);
//! ```

pub mod adapters;
pub mod error;
pub mod pool;
pub mod repositories;

pub use adapters::PostgresMemberAdapter;
pub use error::DatabaseError;
pub use pool::{create_pool, DatabaseConfig, DatabasePool};
pub use repositories::MemberRepository;

use sqlx::PgPool;

/// Applies the embedded schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))
}
