//! Bookshelf: a read-only books query over PostgreSQL.
//!
//! A `BookFilter` is turned into one parameterized SELECT over `books JOIN authors`,
//! executed through a `BookStore`, and the flat rows are projected into nested `Book`s.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod openapi;
pub mod projection;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{DbSettings, ServerSettings, Settings};
pub use error::{AppError, ConfigError};
pub use migration::ensure_tables;
pub use model::{Author, Book, BookFilter, BookRow};
pub use routes::{app, books_routes, common_routes_with_ready};
pub use service::BookService;
pub use state::AppState;
pub use store::{BookStore, PgBookStore};
