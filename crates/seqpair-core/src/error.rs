use std::fmt;

/// Errors raised by the sequence-pair core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An `Options` field was outside its documented domain.
    InvalidOption { field: &'static str, value: String },
    /// A net referenced a rectangle index that does not exist.
    NetIndexOutOfRange { index: usize, len: usize },
    /// A rectangle had non-positive width or height.
    InvalidRectangle { index: usize, width: i64, height: i64 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidOption { field, value } => {
                write!(f, "option '{field}' out of domain: {value}")
            }
            Error::NetIndexOutOfRange { index, len } => {
                write!(f, "net index {index} out of range for {len} rectangles")
            }
            Error::InvalidRectangle { index, width, height } => {
                write!(f, "rectangle {index} has non-positive dimensions ({width} x {height})")
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
