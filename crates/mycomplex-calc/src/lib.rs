//! mycomplex calc - reads complex values from a text stream
//!
//! Each value is echoed with its modulus, followed by the sum and product of
//! everything read. Input uses the `mycomplex-core` extraction format, so
//! `1 2 i` and `1+2i` are both accepted.

pub mod config;
pub mod calc;
pub mod error;

pub use config::*;
pub use calc::*;
pub use error::*;
