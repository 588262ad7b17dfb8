use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_version(version: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidVersion {
                version: version.into(),
            }
            .into(),
        )
    }

    pub fn malformed_payload(offset: usize, reason: impl Into<String>) -> Error {
        Error(
            ErrorKind::MalformedPayload {
                offset,
                reason: reason.into(),
            }
            .into(),
        )
    }

    pub fn allocation(context: impl Into<String>) -> Error {
        Error(
            ErrorKind::AllocationFailure {
                context: context.into(),
            }
            .into(),
        )
    }

    pub fn out_of_range(value: impl Into<String>) -> Error {
        Error(
            ErrorKind::OutOfRangeReference {
                value: value.into(),
            }
            .into(),
        )
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Error {
        Error(
            ErrorKind::Io {
                context: context.into(),
                source,
            }
            .into(),
        )
    }

    /// Returns `true` if this error reports an unknown version identifier.
    pub fn is_invalid_version(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidVersion { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("invalid version {version}")]
    InvalidVersion { version: String },

    #[error("malformed payload at byte {offset}: {reason}")]
    MalformedPayload { offset: usize, reason: String },

    #[error("allocation failed: {context}")]
    AllocationFailure { context: String },

    #[error("reference out of range: {value}")]
    OutOfRangeReference { value: String },

    #[error("IO error for '{context}': {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::io("", e)
    }
}

impl From<std::collections::TryReserveError> for Error {
    fn from(e: std::collections::TryReserveError) -> Self {
        Error::allocation(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_version("NotAVersion");
        assert!(err.is_invalid_version());
        assert_eq!(err.to_string(), "invalid version NotAVersion");

        let err = Error::malformed_payload(12, "missing ']'");
        assert_eq!(err.to_string(), "malformed payload at byte 12: missing ']'");
        assert!(!err.is_invalid_version());
    }

    #[test]
    fn test_into_kind() {
        let kind = Error::invalid_version("NotAVersion").into_kind();
        assert!(matches!(kind, ErrorKind::InvalidVersion { version } if version == "NotAVersion"));

        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        match Error::io("KJV.json", source).into_kind() {
            ErrorKind::Io { context, source } => {
                assert_eq!(context, "KJV.json");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_try_reserve_conversion() {
        let mut v = Vec::<u64>::new();
        let err: Error = v.try_reserve(usize::MAX).unwrap_err().into();
        assert!(matches!(err.kind(), ErrorKind::AllocationFailure { .. }));
    }
}
