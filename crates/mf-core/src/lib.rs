//! mf-core: stable foundation for moodyflow.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (finite/positive checks)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::MfError;
pub use numeric::*;
pub use units::*;
