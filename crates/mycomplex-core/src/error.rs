//! Error types for complex number parsing and stream extraction

use std::fmt;
use std::io;

use thiserror::Error;

/// Which of the three extractions of a complex value failed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Part {
    /// First number
    Real,
    /// Second number
    Imaginary,
    /// Trailing marker token, conventionally `i`
    Suffix,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Real => write!(f, "real part"),
            Part::Imaginary => write!(f, "imaginary part"),
            Part::Suffix => write!(f, "suffix"),
        }
    }
}

/// Text could not be read as a complex value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseComplexError {
    #[error("Unexpected end of input: missing {part}")]
    UnexpectedEnd { part: Part },

    #[error("Invalid {part}: {found:?} is not a floating-point number")]
    InvalidNumber { part: Part, found: String },

    #[error("Trailing input after complex value: {0:?}")]
    TrailingInput(String),
}

/// Errors raised while extracting complex values from a stream
#[derive(Error, Debug)]
pub enum ComplexError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseComplexError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Reader failed on an earlier extraction")]
    Failed,
}

/// Result type for stream operations
pub type ComplexResult<T> = Result<T, ComplexError>;
