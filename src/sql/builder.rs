//! Builds the parameterized books SELECT from a filter.

use crate::model::BookFilter;
use crate::sql::params::{ParamName, PgBindValue};

/// Inner join: books whose author row is missing are never returned.
const BOOKS_SELECT: &str =
    "SELECT b.title AS title, a.name AS author_name FROM books b JOIN authors a ON b.author_id = a.id";

/// SQL text plus bindings. Placeholder `$n` is bound to `params[n - 1]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<(ParamName, PgBindValue)>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, name: ParamName, v: PgBindValue) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push((name, v));
        n
    }

    pub fn param(&self, name: ParamName) -> Option<&PgBindValue> {
        self.params.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    pub fn values(&self) -> impl Iterator<Item = &PgBindValue> {
        self.params.iter().map(|(_, v)| v)
    }
}

/// SELECT title and author name for books matching every effective filter field.
/// Predicates are emitted author ids first, then search; LIMIT last. No ORDER BY.
pub fn books_query(filter: &BookFilter) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut where_parts = Vec::new();

    if let Some(ids) = filter.effective_author_ids() {
        let n = q.push_param(ParamName::AuthorIds, PgBindValue::BigIntArray(ids.to_vec()));
        where_parts.push(format!("b.author_id = ANY(${}::bigint[])", n));
    }
    if let Some(search) = filter.effective_search() {
        let n = q.push_param(ParamName::Search, PgBindValue::Text(search.to_string()));
        where_parts.push(format!("b.title ILIKE ${}::text", n));
    }

    let where_clause = if where_parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_parts.join(" AND "))
    };
    let limit_clause = filter
        .effective_limit()
        .map(|limit| {
            let n = q.push_param(ParamName::Limit, PgBindValue::BigInt(limit));
            format!(" LIMIT ${}::bigint", n)
        })
        .unwrap_or_default();

    q.sql = format!("{}{}{}", BOOKS_SELECT, where_clause, limit_clause);
    q
}
