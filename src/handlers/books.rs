//! `books` over HTTP: typed arguments in, `BookList` out.
//! The transport types here are converted to `BookFilter` before reaching the service.

use crate::error::{AppError, ErrorBody};
use crate::model::BookFilter;
use crate::response::{success_books, BookList};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// JSON arguments for `POST /graphql/books`.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct BooksArgs {
    /// Only books by one of these authors. Empty means no restriction.
    #[serde(default)]
    pub author_ids: Option<Vec<i64>>,
    /// Case-insensitive ILIKE pattern matched against the title; `%` and `_` are wildcards.
    #[serde(default)]
    pub search: Option<String>,
    /// Maximum number of books. Zero or negative means no cap.
    #[serde(default)]
    pub limit: Option<i64>,
}

impl From<BooksArgs> for BookFilter {
    fn from(args: BooksArgs) -> Self {
        BookFilter {
            author_ids: args.author_ids,
            search: args.search,
            limit: args.limit,
        }
    }
}

/// Query-string arguments for `GET /graphql/books`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(deny_unknown_fields)]
#[into_params(parameter_in = Query)]
pub struct BooksParams {
    /// Comma-separated author ids, e.g. `1,2,3`.
    pub author_ids: Option<String>,
    pub search: Option<String>,
    pub limit: Option<String>,
}

impl TryFrom<BooksParams> for BookFilter {
    type Error = AppError;

    fn try_from(params: BooksParams) -> Result<Self, AppError> {
        let author_ids = match params.author_ids.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_id_list(raw)?),
        };
        let limit = match params.limit.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<i64>()
                    .map_err(|_| AppError::BadRequest(format!("limit: '{}' is not an integer", raw)))?,
            ),
        };
        Ok(BookFilter {
            author_ids,
            search: params.search,
            limit,
        })
    }
}

fn parse_id_list(raw: &str) -> Result<Vec<i64>, AppError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map_err(|_| AppError::BadRequest(format!("author_ids: '{}' is not an integer", s)))
        })
        .collect()
}

#[utoipa::path(
    get,
    path = "/graphql/books",
    params(BooksParams),
    responses(
        (status = 200, description = "Matching books", body = BookList),
        (status = 400, description = "Unknown, repeated or non-integer argument", body = ErrorBody),
        (status = 500, description = "Database failure", body = ErrorBody)
    )
)]
pub async fn get_books(
    State(state): State<AppState>,
    params: Result<Query<BooksParams>, QueryRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let filter = BookFilter::try_from(params)?;
    let books = state.books.books(&filter).await?;
    Ok(success_books(books))
}

#[utoipa::path(
    post,
    path = "/graphql/books",
    request_body = BooksArgs,
    responses(
        (status = 200, description = "Matching books", body = BookList),
        (status = 400, description = "Malformed body: invalid JSON, unknown field or wrong type", body = ErrorBody),
        (status = 500, description = "Database failure", body = ErrorBody)
    )
)]
pub async fn post_books(
    State(state): State<AppState>,
    args: Result<Json<BooksArgs>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let Json(args) = args.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let filter = BookFilter::from(args);
    let books = state.books.books(&filter).await?;
    Ok(success_books(books))
}
