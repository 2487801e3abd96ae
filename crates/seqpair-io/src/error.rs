use std::fmt;
use std::path::PathBuf;

/// Errors raised while reading or writing the rect/net/options file formats.
#[derive(Debug)]
pub enum Error {
    /// Could not open or read a file at all.
    Io { path: PathBuf, source: std::io::Error },
    /// A line did not match the expected token shape for its file kind.
    Malformed { path: PathBuf, line: usize, detail: String },
    /// A validated value (net index, rectangle dimension, option field) was
    /// outside its documented domain.
    Core(seqpair_core::Error),
    /// The test-case generator was asked for a net/rectangle count it cannot satisfy.
    InvalidTestCaseParams { detail: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Error::Malformed { path, line, detail } => {
                write!(f, "{}:{line}: {detail}", path.display())
            }
            Error::Core(e) => write!(f, "{e}"),
            Error::InvalidTestCaseParams { detail } => write!(f, "invalid test-case parameters: {detail}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Core(e) => Some(e),
            Error::Malformed { .. } | Error::InvalidTestCaseParams { .. } => None,
        }
    }
}

impl From<seqpair_core::Error> for Error {
    fn from(e: seqpair_core::Error) -> Self {
        Error::Core(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
