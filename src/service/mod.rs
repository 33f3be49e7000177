//! BookService: build, execute, project.

mod books;
pub use books::BookService;
