//! Moody diagram data: friction factor against Reynolds number.

use crate::config::MoodyConfig;
use crate::error::MoodyResult;
use mf_friction::friction_factor;
use rayon::prelude::*;
use serde::Serialize;
use std::io::Write;
use tracing::info;

/// Friction factor sampled along a Reynolds sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Curve {
    pub reynolds: Vec<f64>,
    pub friction_factor: Vec<f64>,
}

impl Curve {
    fn from_fn(reynolds: Vec<f64>, f: impl Fn(f64) -> f64) -> Self {
        let friction_factor = reynolds.iter().map(|&re| f(re)).collect();
        Self {
            reynolds,
            friction_factor,
        }
    }

    pub fn len(&self) -> usize {
        self.reynolds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reynolds.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.reynolds
            .iter()
            .copied()
            .zip(self.friction_factor.iter().copied())
    }
}

/// Turbulent curve for one relative roughness.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoughnessCurve {
    pub relative_roughness: f64,
    #[serde(flatten)]
    pub curve: Curve,
}

/// Operating point overlaid on the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkedPoint {
    pub reynolds: f64,
    pub friction_factor: f64,
}

/// Complete data set for a Moody diagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodyChart {
    pub laminar: Curve,
    /// Laminar law carried across the transition band
    pub transition: Curve,
    /// Ordered like the configured roughness values
    pub turbulent: Vec<RoughnessCurve>,
    pub marked_points: Vec<MarkedPoint>,
}

impl MoodyChart {
    /// Evaluate every curve described by `config`.
    ///
    /// Turbulent curves are independent Colebrook solves and run in parallel.
    pub fn generate(config: &MoodyConfig) -> MoodyResult<Self> {
        config.validate()?;

        let laminar = Curve::from_fn(config.laminar.points(), |re| friction_factor(re, 0.0, false));
        let transition =
            Curve::from_fn(config.transition.points(), |re| friction_factor(re, 0.0, false));

        let reynolds = config.turbulent.points();
        let turbulent: Vec<RoughnessCurve> = config
            .relative_roughness
            .par_iter()
            .map(|&rr| RoughnessCurve {
                relative_roughness: rr,
                curve: Curve::from_fn(reynolds.clone(), |re| friction_factor(re, rr, true)),
            })
            .collect();

        info!(
            curves = turbulent.len(),
            points_per_curve = reynolds.len(),
            "Generated Moody diagram"
        );

        Ok(Self {
            laminar,
            transition,
            turbulent,
            marked_points: Vec::new(),
        })
    }

    /// Record an operating point to overlay on the diagram.
    pub fn mark_point(&mut self, reynolds: f64, friction_factor: f64) {
        self.marked_points.push(MarkedPoint {
            reynolds,
            friction_factor,
        });
    }

    /// Write all curves as `curve,relative_roughness,reynolds,friction_factor` rows.
    ///
    /// Roughness is left empty for curves that do not depend on it.
    pub fn write_csv<W: Write>(&self, mut out: W) -> MoodyResult<()> {
        writeln!(out, "curve,relative_roughness,reynolds,friction_factor")?;
        for (re, f) in self.laminar.points() {
            writeln!(out, "laminar,,{},{}", re, f)?;
        }
        for (re, f) in self.transition.points() {
            writeln!(out, "transition,,{},{}", re, f)?;
        }
        for rc in &self.turbulent {
            for (re, f) in rc.curve.points() {
                writeln!(out, "turbulent,{},{},{}", rc.relative_roughness, re, f)?;
            }
        }
        for p in &self.marked_points {
            writeln!(out, "point,,{},{}", p.reynolds, p.friction_factor)?;
        }
        Ok(())
    }

    pub fn write_json<W: Write>(&self, out: W) -> MoodyResult<()> {
        serde_json::to_writer_pretty(out, self)?;
        Ok(())
    }

    /// Number of data rows written by [`Self::write_csv`].
    pub fn row_count(&self) -> usize {
        self.laminar.len()
            + self.transition.len()
            + self.turbulent.iter().map(|c| c.curve.len()).sum::<usize>()
            + self.marked_points.len()
    }
}
