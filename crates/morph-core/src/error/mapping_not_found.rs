use super::{Error, ErrorKind};

/// Error when no mapping is registered for a (source, destination) pair.
#[derive(Debug)]
pub(super) struct MappingNotFoundError {
    source: &'static str,
    destination: &'static str,
}

impl std::error::Error for MappingNotFoundError {}

impl core::fmt::Display for MappingNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "no mapping found for types {} and {}",
            self.source, self.destination
        )
    }
}

impl Error {
    /// Creates a lookup error naming both types of the requested pair.
    pub fn mapping_not_found(source: &'static str, destination: &'static str) -> Error {
        Error::from(ErrorKind::MappingNotFound(MappingNotFoundError {
            source,
            destination,
        }))
    }

    /// Returns `true` if no mapping was registered for the requested pair.
    pub fn is_mapping_not_found(&self) -> bool {
        matches!(self.kind(), ErrorKind::MappingNotFound(_))
    }
}
