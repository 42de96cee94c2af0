//! Darcy-Weisbach head loss for a straight circular pipe.

use crate::error::{PipeError, PipeResult};
use mf_core::numeric::{ensure_finite, ensure_non_negative, ensure_positive};
use mf_core::units::{
    Area, KinVisc, Length, Ratio, Velocity, VolRate, constants, m, m2, mps, unitless,
};
use mf_friction::{FlowRegime, evaluate_at_point};
use rand::Rng;
use tracing::debug;

/// Steady flow through a circular pipe.
#[derive(Debug, Clone)]
pub struct PipeFlow {
    /// Pipe inner diameter
    pub diameter: Length,
    /// Surface roughness (absolute)
    pub roughness: Length,
    /// Volumetric flow rate
    pub flow_rate: VolRate,
    /// Kinematic viscosity of the fluid
    pub kinematic_viscosity: KinVisc,
}

/// Operating point and head loss of a [`PipeFlow`].
#[derive(Debug, Clone)]
pub struct HeadLoss {
    pub velocity: Velocity,
    pub reynolds: f64,
    pub relative_roughness: f64,
    pub friction_factor: f64,
    pub regime: FlowRegime,
    /// Frictional head loss per unit pipe length (hf/L)
    pub head_loss_per_length: Ratio,
}

impl HeadLoss {
    /// Frictional head loss over a pipe of the given length.
    pub fn head_loss(&self, length: Length) -> Length {
        m(self.head_loss_per_length.value * length.value)
    }
}

impl PipeFlow {
    /// Create a pipe flow of water at 60 °F.
    pub fn new(diameter: Length, roughness: Length, flow_rate: VolRate) -> Self {
        Self {
            diameter,
            roughness,
            flow_rate,
            kinematic_viscosity: constants::water_60f_nu(),
        }
    }

    pub fn with_viscosity(mut self, kinematic_viscosity: KinVisc) -> Self {
        self.kinematic_viscosity = kinematic_viscosity;
        self
    }

    pub fn area(&self) -> Area {
        m2(std::f64::consts::PI * self.diameter.value.powi(2) / 4.0)
    }

    /// Mean velocity `Q / A`.
    pub fn velocity(&self) -> PipeResult<Velocity> {
        self.check_geometry()?;
        self.mean_velocity()
    }

    /// Reynolds number `V D / nu`.
    pub fn reynolds(&self) -> PipeResult<f64> {
        self.check_geometry()?;
        let velocity = self.mean_velocity()?;
        self.reynolds_at(velocity)
    }

    /// Relative roughness `epsilon / D`.
    pub fn relative_roughness(&self) -> PipeResult<f64> {
        self.check_geometry()?;
        Ok(self.roughness_ratio())
    }

    /// Evaluate the friction factor and Darcy-Weisbach head loss.
    ///
    /// `rng` is only drawn from when the flow is transitional.
    pub fn analyze<R: Rng + ?Sized>(&self, rng: &mut R) -> PipeResult<HeadLoss> {
        self.check_geometry()?;
        let velocity = self.mean_velocity()?;
        let reynolds = self.reynolds_at(velocity)?;
        let relative_roughness = self.roughness_ratio();
        let regime = FlowRegime::classify(reynolds);

        let friction_factor = evaluate_at_point(reynolds, relative_roughness, rng);
        ensure_finite(friction_factor, "friction factor")?;

        // hf/L = f V^2 / (2 g D)
        let v = velocity.value;
        let hf_l =
            friction_factor * v.powi(2) / (2.0 * constants::g0().value * self.diameter.value);
        ensure_finite(hf_l, "head loss")?;

        debug!(reynolds, relative_roughness, friction_factor, %regime, "Pipe head loss");

        Ok(HeadLoss {
            velocity,
            reynolds,
            relative_roughness,
            friction_factor,
            regime,
            head_loss_per_length: unitless(hf_l),
        })
    }

    // Callers check geometry first.
    fn mean_velocity(&self) -> PipeResult<Velocity> {
        let q = ensure_finite(self.flow_rate.value, "flow rate")?;
        if q <= 0.0 {
            return Err(PipeError::NonPhysical { what: "flow rate" });
        }
        let v = ensure_finite(q / self.area().value, "velocity")?;
        Ok(mps(v))
    }

    fn reynolds_at(&self, velocity: Velocity) -> PipeResult<f64> {
        let re = velocity.value * self.diameter.value / self.kinematic_viscosity.value;
        Ok(ensure_finite(re, "Reynolds number")?)
    }

    fn roughness_ratio(&self) -> f64 {
        self.roughness.value / self.diameter.value
    }

    fn check_geometry(&self) -> PipeResult<()> {
        ensure_positive(self.diameter.value, "diameter")?;
        ensure_non_negative(self.roughness.value, "roughness")?;
        ensure_positive(self.kinematic_viscosity.value, "kinematic viscosity")?;
        Ok(())
    }
}
