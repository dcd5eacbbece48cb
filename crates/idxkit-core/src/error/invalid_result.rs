use super::Error;

/// Error when a catalog row has an unexpected shape.
///
/// This occurs when:
/// - A column that is never NULL in the catalog comes back NULL
/// - The per-key vectors of an index row disagree in length
/// - A value has a type the driver cannot decode
///
/// The catalog answered, but its answer cannot be interpreted as an index row.
#[derive(Debug)]
pub(super) struct InvalidResult {
    message: Box<str>,
}

impl std::error::Error for InvalidResult {}

impl core::fmt::Display for InvalidResult {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid result: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid result error.
    pub fn invalid_result(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidResult(InvalidResult {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid result error.
    pub fn is_invalid_result(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::InvalidResult(_)))
    }
}
