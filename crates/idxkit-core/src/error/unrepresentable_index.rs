use super::Error;

/// Error when an index resolves to neither named columns nor an expression
/// list.
///
/// Only raised in strict mode; by default such indexes are skipped and
/// reported in the listing instead.
#[derive(Debug)]
pub(super) struct UnrepresentableIndex {
    index: Box<str>,
}

impl std::error::Error for UnrepresentableIndex {}

impl core::fmt::Display for UnrepresentableIndex {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "index `{}` has no resolvable columns or expressions",
            self.index
        )
    }
}

impl Error {
    /// Creates an unrepresentable index error for the named index.
    pub fn unrepresentable_index(index: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnrepresentableIndex(UnrepresentableIndex {
            index: index.into().into(),
        }))
    }

    /// Returns `true` if this error is an unrepresentable index error.
    pub fn is_unrepresentable_index(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::UnrepresentableIndex(_)))
    }
}
