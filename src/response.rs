//! Success envelope for the books operation.

use crate::model::Book;
use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MetaCount {
    pub count: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookList {
    pub data: Vec<Book>,
    pub meta: MetaCount,
}

pub fn success_books(data: Vec<Book>) -> (StatusCode, Json<BookList>) {
    let count = data.len() as u64;
    (
        StatusCode::OK,
        Json(BookList {
            data,
            meta: MetaCount { count },
        }),
    )
}
