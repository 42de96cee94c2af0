//! mf-moody: Moody diagram data for moodyflow.
//!
//! Builds the laminar, transition, and per-roughness turbulent curves of a
//! Moody diagram from `mf-friction`, with optional operating points, and
//! exports them as CSV or JSON. Rendering is left to the consumer.

pub mod chart;
pub mod config;
pub mod error;
pub mod sweep;

// Re-exports for ergonomics
pub use chart::{Curve, MarkedPoint, MoodyChart, RoughnessCurve};
pub use config::{MoodyConfig, ROUGHNESS_TABLE, validate_roughness};
pub use error::{MoodyError, MoodyResult};
pub use sweep::LogSweep;
