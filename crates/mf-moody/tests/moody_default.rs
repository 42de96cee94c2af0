//! Integration tests for the default Moody diagram and config loading.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use mf_friction::friction_factor;
use mf_moody::{MoodyChart, MoodyConfig, MoodyError, ROUGHNESS_TABLE};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

#[test]
fn default_chart_shape() {
    let chart = MoodyChart::generate(&MoodyConfig::default()).unwrap();

    assert_eq!(chart.laminar.len(), 20);
    assert_eq!(chart.transition.len(), 20);
    assert_eq!(chart.turbulent.len(), ROUGHNESS_TABLE.len());
    assert!(chart.turbulent.iter().all(|c| c.curve.len() == 200));

    assert_eq!(chart.laminar.reynolds[0], 600.0);
    assert_eq!(*chart.laminar.reynolds.last().unwrap(), 2000.0);
    assert_eq!(chart.turbulent[0].curve.reynolds[0], 4000.0);
    assert_eq!(*chart.turbulent[0].curve.reynolds.last().unwrap(), 1e8);
}

#[test]
fn parallel_curves_match_serial_evaluation() {
    let chart = MoodyChart::generate(&MoodyConfig::default()).unwrap();
    for rc in &chart.turbulent {
        for (re, f) in rc.curve.points() {
            assert_eq!(f.to_bits(), friction_factor(re, rc.relative_roughness, true).to_bits());
        }
    }
}

#[test]
fn default_roughness_table_is_strictly_increasing() {
    assert!(ROUGHNESS_TABLE.windows(2).all(|w| w[1] > w[0]));
    assert!(ROUGHNESS_TABLE.contains(&8e-3));
    assert!(!ROUGHNESS_TABLE.contains(&8e-8));
}

#[test]
fn load_config_from_file() {
    let dir = unique_temp_dir("mf_moody_config");
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    let path = dir.join("moody.yaml");
    fs::write(
        &path,
        "relative_roughness: [0.0, 1.0e-3, 1.0e-2]\nturbulent:\n  start: 4000.0\n  end: 1.0e7\n  num_points: 25\n",
    )
    .expect("failed to write config");

    let config = MoodyConfig::load(&path).unwrap();
    let chart = MoodyChart::generate(&config).unwrap();
    assert_eq!(chart.turbulent.len(), 3);
    assert_eq!(chart.turbulent[2].curve.len(), 25);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn load_flags_out_of_order_table() {
    let dir = unique_temp_dir("mf_moody_bad_table");
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    let path = dir.join("moody.yaml");
    fs::write(&path, "relative_roughness: [0.0, 6.0e-3, 8.0e-8, 1.5e-2]\n")
        .expect("failed to write config");

    let err = MoodyConfig::load(&path).unwrap_err();
    assert!(matches!(
        err,
        MoodyError::RoughnessNotIncreasing { index: 2, .. }
    ));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_config_file_is_io_error() {
    let path = unique_temp_dir("mf_moody_missing").join("nope.yaml");
    assert!(matches!(MoodyConfig::load(&path), Err(MoodyError::Io(_))));
}
