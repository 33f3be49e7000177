//! Connection resource: the `BookStore` seam and its PostgreSQL implementation.

use crate::config::Settings;
use crate::error::AppError;
use crate::model::BookRow;
use crate::sql::QueryBuf;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Executes built queries. Shared across concurrent requests.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Run the query and return every row; nothing is delivered on failure.
    async fn fetch_rows(&self, q: &QueryBuf) -> Result<Vec<BookRow>, AppError>;

    /// Cheap round trip used by readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct PgBookStore {
    pool: PgPool,
}

impl PgBookStore {
    pub fn new(pool: PgPool) -> Self {
        PgBookStore { pool }
    }

    /// Open the pool and check out one connection so bad credentials fail at startup.
    pub async fn connect(settings: &Settings) -> Result<Self, AppError> {
        tracing::info!(
            url = %settings.db.redacted_url()?,
            max_connections = settings.server.max_connections,
            "connecting to database"
        );
        let pool = PgPoolOptions::new()
            .max_connections(settings.server.max_connections)
            .connect_with(settings.db.connect_options())
            .await?;
        Ok(PgBookStore { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Wait for checked-out connections to return, then close them all.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("database pool closed");
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn fetch_rows(&self, q: &QueryBuf) -> Result<Vec<BookRow>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, BookRow>(&q.sql);
        for v in q.values() {
            query = query.bind(v.clone());
        }
        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
