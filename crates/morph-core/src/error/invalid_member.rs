use super::{Error, ErrorKind};

/// Error when a member selector does not resolve to exactly one usable
/// field of the shape.
#[derive(Debug)]
pub(super) struct InvalidMemberError {
    shape: &'static str,
    member: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for InvalidMemberError {}

impl core::fmt::Display for InvalidMemberError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid member `{}.{}`: {}",
            self.shape, self.member, self.reason
        )
    }
}

impl Error {
    /// Creates a configuration error for a member selector that cannot be
    /// bound.
    pub fn invalid_member(
        shape: &'static str,
        member: impl Into<String>,
        reason: impl Into<String>,
    ) -> Error {
        Error::from(ErrorKind::InvalidMember(InvalidMemberError {
            shape,
            member: member.into().into_boxed_str(),
            reason: reason.into().into_boxed_str(),
        }))
    }

    /// Returns `true` if this error is an invalid member selector.
    pub fn is_invalid_member(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidMember(_))
    }
}
