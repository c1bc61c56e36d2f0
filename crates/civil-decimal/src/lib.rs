//! Civil Decimal - fixed-point decimal values
//!
//! This crate wraps `rust_decimal` with the operations the civil workspace
//! uses for numeric values:
//! - Construction from integers, floats and text (with a lenient variant)
//! - Checked arithmetic and division with an explicit rounding mode
//! - Scale control, sign queries, comparisons, powers and percentages
//!
//! Values carry up to 28 significant digits after the point and 96 bits of
//! mantissa; anything larger reports [`DecimalError::Overflow`].

pub mod decimal;
pub mod error;

pub use decimal::*;
pub use error::*;
