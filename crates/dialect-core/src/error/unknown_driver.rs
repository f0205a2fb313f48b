use super::Error;

/// Error when no connector is registered under the requested driver name.
#[derive(Debug)]
pub(super) struct UnknownDriver {
    name: Box<str>,
}

impl std::error::Error for UnknownDriver {}

impl core::fmt::Display for UnknownDriver {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "sql: unknown driver {:?} (forgotten registration?)",
            self.name
        )
    }
}

impl Error {
    /// Creates an unknown driver error.
    pub fn unknown_driver(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownDriver(UnknownDriver {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown driver error.
    pub fn is_unknown_driver(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownDriver(_))
    }
}
