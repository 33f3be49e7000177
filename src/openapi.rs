//! OpenAPI description of the books contract.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::books::BooksArgs;
use crate::model::{Author, Book};
use crate::response::{BookList, MetaCount};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(crate::handlers::books::get_books, crate::handlers::books::post_books),
    components(schemas(Author, Book, BookList, MetaCount, BooksArgs, ErrorBody, ErrorDetail)),
    tags((name = "books", description = "Read-only books query"))
)]
pub struct ApiDoc;
