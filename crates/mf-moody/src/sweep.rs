//! Logarithmic Reynolds-number sweeps.

use crate::error::{MoodyError, MoodyResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logarithmically spaced points between two positive bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSweep {
    pub start: f64,
    pub end: f64,
    pub num_points: usize,
}

impl LogSweep {
    pub fn new(start: f64, end: f64, num_points: usize) -> Self {
        Self {
            start,
            end,
            num_points,
        }
    }

    /// Check bounds and point count. `which` names the sweep in errors.
    pub fn validate(&self, which: &'static str) -> MoodyResult<()> {
        let invalid = |reason: String| MoodyError::InvalidSweep { which, reason };

        if self.num_points < 2 {
            return Err(invalid("Sweep must have at least 2 points".to_string()));
        }
        if !(self.start.is_finite() && self.end.is_finite()) {
            return Err(invalid("Bounds must be finite".to_string()));
        }
        if self.start <= 0.0 || self.end <= 0.0 {
            return Err(invalid(format!(
                "Bounds must be positive, got {} to {}",
                self.start, self.end
            )));
        }
        if (self.start - self.end).abs() < 1e-12 {
            return Err(invalid("Start and end values must be different".to_string()));
        }
        Ok(())
    }

    /// Generate all points in the sweep.
    pub fn points(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        let mut points = Vec::with_capacity(self.num_points);
        let log_start = self.start.log10();
        let log_end = self.end.log10();
        let log_delta = (log_end - log_start) / (self.num_points - 1) as f64;

        for i in 0..self.num_points {
            points.push(10f64.powf(log_start + i as f64 * log_delta));
        }

        // Ensure exact endpoints
        points[0] = self.start;
        points[self.num_points - 1] = self.end;
        points
    }
}

impl fmt::Display for LogSweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Re {} to {} ({} points, logarithmic)",
            self.start, self.end, self.num_points
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logarithmic_sweep_generation() {
        let sweep = LogSweep::new(1e3, 1e5, 3);
        let points = sweep.points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], 1e3);
        assert_eq!(points[2], 1e5);
        assert!((points[1] - 1e4).abs() / 1e4 < 1e-12);
    }

    #[test]
    fn points_are_increasing() {
        let points = LogSweep::new(4000.0, 1e8, 200).points();
        assert!(points.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn single_point_sweep() {
        let sweep = LogSweep::new(600.0, 2000.0, 1);
        assert_eq!(sweep.points(), vec![600.0]);
    }

    #[test]
    fn reject_invalid_point_count() {
        assert!(LogSweep::new(600.0, 2000.0, 1).validate("laminar").is_err());
    }

    #[test]
    fn reject_identical_bounds() {
        let err = LogSweep::new(2000.0, 2000.0, 5).validate("laminar").unwrap_err();
        assert!(matches!(err, MoodyError::InvalidSweep { which: "laminar", .. }));
    }

    #[test]
    fn reject_non_positive_bounds() {
        assert!(LogSweep::new(0.0, 2000.0, 5).validate("laminar").is_err());
        assert!(LogSweep::new(f64::NAN, 2000.0, 5).validate("laminar").is_err());
    }

    #[test]
    fn display() {
        let text = LogSweep::new(600.0, 2000.0, 20).to_string();
        assert!(text.contains("20 points"));
    }
}
