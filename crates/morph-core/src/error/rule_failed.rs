use super::{Error, ErrorKind};

/// Failure raised by a computed member rule.
///
/// Displays as the rule's own error.
#[derive(Debug)]
pub(super) struct RuleFailedError {
    /// Destination shape name
    shape: &'static str,
    /// Destination field the rule computes
    member: &'static str,
    pub(super) err: anyhow::Error,
}

impl std::error::Error for RuleFailedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.err.as_ref())
    }
}

impl core::fmt::Display for RuleFailedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.err, f)
    }
}

impl Error {
    /// Wraps the error returned by a member rule.
    pub fn rule_failed(shape: &'static str, member: &'static str, err: anyhow::Error) -> Error {
        Error::from(ErrorKind::RuleFailed(RuleFailedError { shape, member, err }))
    }

    /// Returns `true` if a member rule failed while mapping.
    pub fn is_rule_failed(&self) -> bool {
        matches!(self.kind(), ErrorKind::RuleFailed(_))
    }

    /// Returns the destination shape and field whose rule failed.
    pub fn rule_member(&self) -> Option<(&'static str, &'static str)> {
        match self.kind() {
            ErrorKind::RuleFailed(err) => Some((err.shape, err.member)),
            _ => None,
        }
    }

    /// Returns the error raised by the member rule, unchanged.
    pub fn rule_error(&self) -> Option<&anyhow::Error> {
        match self.kind() {
            ErrorKind::RuleFailed(err) => Some(&err.err),
            _ => None,
        }
    }
}
