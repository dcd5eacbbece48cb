use super::{period, Formatter, ToSql};

use crate::stmt;

/// A double-quoted identifier.
struct Ident<S>(S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push('"');
        for ch in self.0.as_ref().chars() {
            if ch == '"' {
                f.dst.push('"');
            }
            f.dst.push(ch);
        }
        f.dst.push('"');
    }
}

/// Each part of a qualified name is quoted on its own.
impl ToSql for &stmt::Name {
    fn to_sql(self, f: &mut Formatter<'_>) {
        period(self.0.iter().map(Ident)).to_sql(f);
    }
}
