//! Metron Core - Fundamental types
//!
//! This crate provides the types shared by every Metron crate:
//! - `MeasurementError`: structured errors with machine-readable codes
//! - `number`: finiteness checks, rounding, tolerance and hash policy

mod error;
pub mod number;

pub use error::{codes, MeasurementError, Result};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::number::{approx_eq, ensure_finite, round_half_away};
    pub use crate::{MeasurementError, Result};
}
