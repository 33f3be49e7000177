//! Flat join rows to nested books.

use crate::model::{Author, Book, BookRow};

/// One book per row, in row order. No grouping or deduplication.
pub fn project(rows: Vec<BookRow>) -> Vec<Book> {
    rows.into_iter()
        .map(|row| Book {
            title: row.title,
            author: Author { name: row.author_name },
        })
        .collect()
}
