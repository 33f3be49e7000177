//! Values bound to the books query, and how sqlx encodes them.

use sqlx::encode::{Encode, IsNull};
use sqlx::postgres::{PgTypeInfo, Postgres};
use sqlx::Database;

/// Name of a bound parameter. Each name appears at most once per query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamName {
    AuthorIds,
    Search,
    Limit,
}

impl ParamName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamName::AuthorIds => "author_ids",
            ParamName::Search => "search",
            ParamName::Limit => "limit",
        }
    }
}

/// A value that can be bound to a PostgreSQL query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PgBindValue {
    BigIntArray(Vec<i64>),
    Text(String),
    BigInt(i64),
}

impl<'q> Encode<'q, Postgres> for PgBindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            PgBindValue::BigIntArray(v) => <Vec<i64> as Encode<Postgres>>::encode_by_ref(v, buf),
            PgBindValue::Text(s) => <String as Encode<Postgres>>::encode_by_ref(s, buf),
            PgBindValue::BigInt(n) => <i64 as Encode<Postgres>>::encode_by_ref(n, buf),
        }
    }

    fn produces(&self) -> Option<PgTypeInfo> {
        Some(match self {
            PgBindValue::BigIntArray(_) => <Vec<i64> as sqlx::Type<Postgres>>::type_info(),
            PgBindValue::Text(_) => <String as sqlx::Type<Postgres>>::type_info(),
            PgBindValue::BigInt(_) => <i64 as sqlx::Type<Postgres>>::type_info(),
        })
    }
}

impl sqlx::Type<Postgres> for PgBindValue {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("TEXT")
    }

    fn compatible(_ty: &PgTypeInfo) -> bool {
        true
    }
}
