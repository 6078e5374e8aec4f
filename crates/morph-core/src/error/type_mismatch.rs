use super::{Error, ErrorKind};

/// Error when a value cannot be written to a field of another type.
#[derive(Debug)]
pub(super) struct TypeMismatchError {
    shape: &'static str,
    member: &'static str,
    expected: &'static str,
    found: &'static str,
}

impl std::error::Error for TypeMismatchError {}

impl core::fmt::Display for TypeMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "type mismatch for `{}.{}`: expected {}, found {}",
            self.shape, self.member, self.expected, self.found
        )
    }
}

impl Error {
    /// Creates a type mismatch error.
    ///
    /// This is used when a same-named source field has a different type
    /// than the destination field it would be copied into.
    pub fn type_mismatch(
        shape: &'static str,
        member: &'static str,
        expected: &'static str,
        found: &'static str,
    ) -> Error {
        Error::from(ErrorKind::TypeMismatch(TypeMismatchError {
            shape,
            member,
            expected,
            found,
        }))
    }

    /// Returns `true` if this error is a type mismatch error.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind(), ErrorKind::TypeMismatch(_))
    }
}
