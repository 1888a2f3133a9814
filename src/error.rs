//! Contains the Error and Result types used by the decoder.

/// Errors that can occur while decoding NBT data.
///
/// Any error aborts the decode of the current source: there is no partial or
/// resumable decode, and no usable partial tree on failure.
#[derive(Debug, Clone)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The byte source reported a failure unrelated to running out of data.
    Transport,

    /// The input ended before the declared structure was satisfied.
    PrematureEnd,

    /// The data does not conform to the NBT format: a tag id outside the
    /// recognised 0..=11 range, or `End` declared as a list's element type.
    Malformed,

    /// The decoder broke one of its own invariants. Seeing this is a bug in
    /// this crate, not in the input.
    Internal,
}

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn is_premature_end(&self) -> bool {
        matches!(self.kind, ErrorKind::PrematureEnd)
    }

    pub(crate) fn premature_end() -> Self {
        Self {
            msg: "input ended part way through a value".into(),
            kind: ErrorKind::PrematureEnd,
        }
    }

    pub(crate) fn invalid_tag(t: u8) -> Self {
        Self {
            msg: format!("invalid tag: {}", t),
            kind: ErrorKind::Malformed,
        }
    }

    pub(crate) fn list_of_end() -> Self {
        Self {
            msg: "list declared TAG_End as its element type".into(),
            kind: ErrorKind::Malformed,
        }
    }

    pub(crate) fn root_end() -> Self {
        Self {
            msg: "document root was TAG_End, expected a value".into(),
            kind: ErrorKind::Malformed,
        }
    }

    pub(crate) fn internal(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind: ErrorKind::Internal,
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self {
                msg: e.to_string(),
                kind: ErrorKind::PrematureEnd,
            },
            _ => Self {
                msg: format!("io error: {}", e),
                kind: ErrorKind::Transport,
            },
        }
    }
}
