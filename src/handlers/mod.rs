//! HTTP handlers for the books operation.

pub mod books;
pub use books::*;
