use super::{Formatter, ToSql};

/// Fragments written in order with `separator` between them.
pub(super) struct Delimited<L> {
    items: L,
    separator: &'static str,
}

/// `a, b, c`
pub(super) fn comma<L>(items: L) -> Delimited<L> {
    Delimited {
        items,
        separator: ", ",
    }
}

/// `a.b.c`
pub(super) fn period<L>(items: L) -> Delimited<L> {
    Delimited {
        items,
        separator: ".",
    }
}

impl<L> ToSql for Delimited<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) {
        for (i, item) in self.items.into_iter().enumerate() {
            if i > 0 {
                f.dst.push_str(self.separator);
            }
            item.to_sql(f);
        }
    }
}
