use super::{comma, Formatter, ToSql};

use crate::stmt;

impl ToSql for &stmt::Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            stmt::Statement::CreateIndex(stmt) => stmt.to_sql(f),
            stmt::Statement::DropIndex(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::CreateIndex {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let unique = if self.unique { "UNIQUE " } else { "" };
        let name = &self.name;
        let table = &self.on;
        let columns = comma(&self.columns);

        fmt!(f, "CREATE " unique "INDEX " name " ON " table);

        if let Some(using) = &self.using {
            fmt!(f, " USING " using);
        }

        fmt!(f, " (" columns ")");

        if let Some(predicate) = &self.predicate {
            fmt!(f, " WHERE " predicate);
        }
    }
}

impl ToSql for &stmt::IndexColumn {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let expr = &self.expr;

        if self.is_column() {
            fmt!(f, expr);
        } else {
            // Arbitrary expressions must be parenthesized in an index key.
            fmt!(f, "(" expr ")");
        }

        if let Some(opclass) = &self.opclass {
            fmt!(f, " " opclass);
        }

        if let Some(ordering) = &self.ordering {
            fmt!(f, " " ordering);
        }
    }
}

impl ToSql for &stmt::DropIndex {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let if_exists = if self.if_exists { "IF EXISTS " } else { "" };
        let name = &self.name;
        fmt!(f, "DROP INDEX " if_exists name);
    }
}
