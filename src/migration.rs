//! DDL for the two tables the books query reads. Idempotent.

use crate::error::AppError;
use sqlx::PgPool;

const DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS authors (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS books (
        id BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        author_id BIGINT REFERENCES authors (id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS books_author_id_idx ON books (author_id)",
];

/// Create `authors` and `books` (and the author_id index) when absent.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    for ddl in DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::info!("books schema ensured");
    Ok(())
}
