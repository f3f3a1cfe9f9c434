//! Error types for the calc tool

use std::io;

use mycomplex_core::ComplexError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Input error: {0}")]
    Complex(#[from] ComplexError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for calc operations
pub type CalcResult<T> = Result<T, CalcError>;
