use super::{Error, ErrorKind};

/// Error when a destination member is given a second override.
#[derive(Debug)]
pub(super) struct DuplicateMemberError {
    shape: &'static str,
    member: &'static str,
}

impl std::error::Error for DuplicateMemberError {}

impl core::fmt::Display for DuplicateMemberError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "member `{}.{}` already has an override",
            self.shape, self.member
        )
    }
}

impl Error {
    /// Creates a configuration error for a repeated member override.
    pub fn duplicate_member(shape: &'static str, member: &'static str) -> Error {
        Error::from(ErrorKind::DuplicateMember(DuplicateMemberError { shape, member }))
    }

    /// Returns `true` if this error is a repeated member override.
    pub fn is_duplicate_member(&self) -> bool {
        matches!(self.kind(), ErrorKind::DuplicateMember(_))
    }

    /// Returns `true` if this error was raised while declaring a mapping.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::DuplicateMember(_) | ErrorKind::InvalidMember(_)
        )
    }
}
