//! mycomplex core - complex number value type
//!
//! This crate defines a single numeric type, [`Complex`], and its operator surface:
//! - Construction, mutation and magnitude
//! - Arithmetic with other complex values and with `f64` scalars (both sides)
//! - Text formatting (`3+2i`, `3-2i`) and stream extraction
//!
//! There is no implicit conversion to a magnitude. Use [`Complex::abs`] or
//! [`Complex::to_scalar`] where a plain number is needed.

pub mod complex;
pub mod ops;
pub mod text;
pub mod reader;
pub mod error;

pub use complex::*;
pub use text::write_scalar;
pub use reader::*;
pub use error::*;
