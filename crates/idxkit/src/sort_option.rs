/// Sort options of a single index key, as stored in the catalog's
/// per-key bitmask.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SortOption(pub i16);

impl SortOption {
    const DESC: i16 = 0x0001;
    const NULLS_FIRST: i16 = 0x0002;

    /// `true` when no option bit is set: ascending, nulls last.
    pub fn is_default(self) -> bool {
        self.0 == 0
    }

    pub fn is_descending(self) -> bool {
        self.0 & Self::DESC != 0
    }

    pub fn is_nulls_first(self) -> bool {
        self.0 & Self::NULLS_FIRST != 0
    }

    /// The ordering annotation appended to a column name.
    ///
    /// A zero bitmask yields no annotation at all. Downstream DDL generation
    /// reads a bare column name as "use the database default".
    pub fn suffix(self) -> &'static str {
        match (self.is_descending(), self.is_nulls_first()) {
            (true, true) => " DESC NULLS FIRST",
            (true, false) => " DESC",
            (false, true) => " NULLS FIRST",
            (false, false) if self.is_default() => "",
            (false, false) => " NULLS LAST",
        }
    }
}

impl From<i16> for SortOption {
    fn from(value: i16) -> Self {
        Self(value)
    }
}

/// Decodes a sort-option bitmask into the suffix for its column.
pub fn decode_sort_option(option: i16) -> &'static str {
    SortOption(option).suffix()
}
