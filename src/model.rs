//! Request-scoped DTOs: the filter a caller supplies, the flat row the join returns,
//! and the nested shape handed back.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Author {
    pub name: String,
}

/// A book with its author embedded by value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub title: String,
    pub author: Author,
}

/// One row of `books JOIN authors`, as selected by the query builder.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct BookRow {
    pub title: String,
    pub author_name: String,
}

/// Optional constraints for a books query.
///
/// Empty ids, an empty search string and a non-positive limit all mean "not set";
/// use the `effective_*` accessors rather than the raw fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub author_ids: Option<Vec<i64>>,
    pub search: Option<String>,
    pub limit: Option<i64>,
}

impl BookFilter {
    pub fn effective_author_ids(&self) -> Option<&[i64]> {
        self.author_ids.as_deref().filter(|ids| !ids.is_empty())
    }

    /// Passed through verbatim; `%` and `_` keep their ILIKE meaning.
    pub fn effective_search(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    pub fn effective_limit(&self) -> Option<i64> {
        self.limit.filter(|n| *n > 0)
    }
}
