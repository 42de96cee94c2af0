//! mf-pipe: pipe head-loss calculator for moodyflow.
//!
//! Converts pipe geometry and flow rate (SI, via `uom`) into Reynolds number
//! and relative roughness, evaluates the friction factor with `mf-friction`,
//! and reports the Darcy-Weisbach head loss per unit length.
//!
//! # Example
//!
//! ```
//! use mf_core::units::{m, m3ps};
//! use mf_pipe::PipeFlow;
//! use rand::SeedableRng;
//!
//! // 6 in pipe, 0.01 m^3/s of water
//! let pipe = PipeFlow::new(m(0.1524), m(4.6e-5), m3ps(0.01));
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! let result = pipe.analyze(&mut rng).unwrap();
//! println!("hf/L = {:.6} m/m", result.head_loss_per_length.value);
//! ```

pub mod error;
pub mod head_loss;

// Re-exports
pub use error::{PipeError, PipeResult};
pub use head_loss::{HeadLoss, PipeFlow};
