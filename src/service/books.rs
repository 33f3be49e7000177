//! The books query: filter in, nested books out.

use crate::error::AppError;
use crate::model::{Book, BookFilter};
use crate::projection::project;
use crate::sql::books_query;
use crate::store::BookStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct BookService {
    store: Arc<dyn BookStore>,
}

impl BookService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        BookService { store }
    }

    pub fn store(&self) -> &Arc<dyn BookStore> {
        &self.store
    }

    /// Books matching every effective field of `filter`. No rows is `Ok(vec![])`.
    /// Store errors are returned as-is; nothing is retried.
    pub async fn books(&self, filter: &BookFilter) -> Result<Vec<Book>, AppError> {
        let q = books_query(filter);
        let rows = self.store.fetch_rows(&q).await?;
        tracing::debug!(rows = rows.len(), "books fetched");
        Ok(project(rows))
    }
}
