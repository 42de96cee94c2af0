// mf-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration, Area as UomArea,
    DiffusionCoefficient as UomDiffusionCoefficient, Length as UomLength, Ratio as UomRatio,
    Velocity as UomVelocity, VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
pub type Area = UomArea;
/// Kinematic viscosity; uom files m²/s under diffusion coefficient.
pub type KinVisc = UomDiffusionCoefficient;
pub type Length = UomLength;
pub type Ratio = UomRatio;
pub type Velocity = UomVelocity;
pub type VolRate = UomVolumeRate;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn m3ps(v: f64) -> VolRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolRate::new::<cubic_meter_per_second>(v)
}

#[inline]
pub fn m2ps(v: f64) -> KinVisc {
    use uom::si::diffusion_coefficient::square_meter_per_second;
    KinVisc::new::<square_meter_per_second>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

pub mod constants {
    use super::*;

    pub const G0_MPS2: f64 = 9.806_65;

    /// Water at 60 °F, 1.08e-5 ft²/s.
    pub const WATER_60F_NU_M2PS: f64 = 1.08e-5 * 0.3048 * 0.3048;

    #[inline]
    pub fn g0() -> Accel {
        use uom::si::acceleration::meter_per_second_squared;
        Accel::new::<meter_per_second_squared>(G0_MPS2)
    }

    #[inline]
    pub fn water_60f_nu() -> KinVisc {
        m2ps(WATER_60F_NU_M2PS)
    }
}
