//! Integration tests for mf-pipe against the friction factor engine.

use mf_core::units::{m, m2ps, m3ps};
use mf_friction::{FlowRegime, friction_factor};
use mf_pipe::PipeFlow;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn commercial_steel_water_line_is_turbulent() {
    // 6 in commercial steel, 0.01 m^3/s water at 60 F
    let pipe = PipeFlow::new(m(0.1524), m(4.6e-5), m3ps(0.01));
    let mut rng = StdRng::seed_from_u64(0);
    let result = pipe.analyze(&mut rng).unwrap();

    assert_eq!(result.regime, FlowRegime::Turbulent);
    assert!(result.reynolds > 8.0e4 && result.reynolds < 8.5e4, "Re = {}", result.reynolds);
    assert_eq!(
        result.friction_factor,
        friction_factor(result.reynolds, result.relative_roughness, true)
    );

    let v = result.velocity.value;
    let expected = result.friction_factor * v * v / (2.0 * 9.806_65 * 0.1524);
    assert!((result.head_loss_per_length.value - expected).abs() < 1e-15);
    assert!(result.head_loss_per_length.value > 0.0);
}

#[test]
fn transitional_pipe_is_reproducible_with_seed() {
    // D = 2 cm, nu = 1e-6, V = 0.15 m/s -> Re = 3000
    let d = 0.02;
    let area = std::f64::consts::PI * d * d / 4.0;
    let pipe = PipeFlow::new(m(d), m(2e-5), m3ps(0.15 * area)).with_viscosity(m2ps(1e-6));

    let a = pipe.analyze(&mut StdRng::seed_from_u64(9)).unwrap();
    let b = pipe.analyze(&mut StdRng::seed_from_u64(9)).unwrap();

    assert_eq!(a.regime, FlowRegime::Transitional);
    assert_eq!(a.friction_factor, b.friction_factor);
    assert_eq!(a.head_loss_per_length.value, b.head_loss_per_length.value);
}

proptest! {
    #[test]
    fn more_turbulent_flow_means_more_head_loss(q in 0.005_f64..0.05, scale in 1.1_f64..3.0) {
        let mut rng = StdRng::seed_from_u64(0);
        let low = PipeFlow::new(m(0.1), m(4.6e-5), m3ps(q)).analyze(&mut rng).unwrap();
        let high = PipeFlow::new(m(0.1), m(4.6e-5), m3ps(q * scale)).analyze(&mut rng).unwrap();

        prop_assert_eq!(low.regime, FlowRegime::Turbulent);
        prop_assert!(high.head_loss_per_length.value > low.head_loss_per_length.value);
    }
}
