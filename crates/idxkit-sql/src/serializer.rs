#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{comma, period};

mod ident;

// Fragment serializers
mod statement;

use crate::stmt::Statement;

/// Serialize a statement to a SQL string
#[derive(Debug, Default)]
pub struct Serializer {
    _priv: (),
}

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    /// A serializer for the PostgreSQL dialect.
    pub fn postgresql() -> Serializer {
        Serializer::default()
    }

    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter { dst: &mut ret };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }
}
