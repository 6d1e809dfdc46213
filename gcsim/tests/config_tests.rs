use std::io::Write;

use gcsim::{Color, NVec3, Scenario, ScenarioConfig, SimError};

const FULL: &str = r##"
engine:
  dt: 0.001
  ticks: 10
  parallel: true

parameters:
  G: 2.5
  collision_enabled: false
  restitution: 0.25
  paused: true

seed: 9
random_bodies: 2

bodies:
  - x: [ -0.45, 0.0, 0.0 ]
    v: [  1.0, 0.0, 0.0 ]
    m: 1.0
    radius: 0.5
    color: "#ff4040"
  - x: [ 0.45, 0.0, 0.0 ]
"##;

#[test]
fn full_scenario_builds() {
    let cfg = ScenarioConfig::from_yaml_str(FULL).unwrap();
    let s = Scenario::build_scenario(&cfg).unwrap();

    assert_eq!(s.engine.dt, 0.001);
    assert_eq!(s.engine.ticks, 10);
    assert!(s.engine.parallel);
    assert_eq!(s.parameters.G, 2.5);
    assert!(!s.parameters.collision_enabled);
    assert_eq!(s.parameters.restitution, 0.25);
    assert!(s.parameters.paused);

    assert_eq!(s.body_count(), 4);
    let bodies = s.bodies();
    assert_eq!(bodies[0].x, NVec3::new(-0.45, 0.0, 0.0));
    assert_eq!(bodies[0].color, Color(0xff4040));
    assert_eq!(bodies[1].x, NVec3::new(0.45, 0.0, 0.0));
    assert!(bodies[1].m > 0.0);
}

#[test]
fn missing_sections_use_defaults() {
    let cfg = ScenarioConfig::from_yaml_str("random_bodies: 3\n").unwrap();
    let s = Scenario::build_scenario(&cfg).unwrap();

    assert_eq!(s.engine, gcsim::Engine::default());
    assert_eq!(s.parameters, gcsim::Parameters::default());
    assert_eq!(s.body_count(), 3);
}

#[test]
fn malformed_color_is_a_parse_error() {
    let yaml = "bodies:\n  - color: \"#12345\"\n";
    assert!(ScenarioConfig::from_yaml_str(yaml).is_err());

    let yaml = "bodies:\n  - color: \"#zzzzzz\"\n";
    assert!(ScenarioConfig::from_yaml_str(yaml).is_err());

    let yaml = "bodies:\n  - color: \"##ffffff\"\n";
    assert!(ScenarioConfig::from_yaml_str(yaml).is_err());

    let yaml = "bodies:\n  - color: \"#+12345\"\n";
    assert!(ScenarioConfig::from_yaml_str(yaml).is_err());
}

#[test]
fn out_of_range_parameters_are_rejected() {
    let cfg = ScenarioConfig::from_yaml_str("parameters:\n  G: 250.0\n").unwrap();
    assert!(matches!(
        Scenario::build_scenario(&cfg),
        Err(SimError::InvalidParameter { name: "G", .. })
    ));

    let cfg = ScenarioConfig::from_yaml_str("parameters:\n  restitution: -0.1\n").unwrap();
    assert!(Scenario::build_scenario(&cfg).is_err());

    let cfg = ScenarioConfig::from_yaml_str("engine:\n  dt: -1.0\n").unwrap();
    assert!(matches!(Scenario::build_scenario(&cfg), Err(SimError::InvalidTimeStep(_))));
}

#[test]
fn invalid_body_in_file_is_rejected() {
    let cfg = ScenarioConfig::from_yaml_str("bodies:\n  - m: 0.0\n").unwrap();
    assert!(matches!(Scenario::build_scenario(&cfg), Err(SimError::InvalidBody { .. })));
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FULL.as_bytes()).unwrap();

    let cfg = ScenarioConfig::from_path(file.path()).unwrap();
    assert_eq!(cfg.bodies.len(), 2);
    assert_eq!(cfg.seed, Some(9));
}

#[test]
fn missing_file_reports_path() {
    let err = ScenarioConfig::from_path(std::path::Path::new("/nonexistent/scenario.yaml")).unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/scenario.yaml"));
}

#[test]
fn shipped_scenarios_parse() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios");
    for name in ["two_body_collision.yaml", "orbit.yaml", "random_cluster.yaml"] {
        let cfg = ScenarioConfig::from_path(&dir.join(name)).unwrap();
        Scenario::build_scenario(&cfg).unwrap();
    }
}
