use tetvaders::core::WorldConfig;
use tetvaders::headless;
use tetvaders::settings::parse_script;
use tetvaders::types::Preset;

#[test]
fn headless_fire_script_spends_all_load() {
    let report = headless::run(&WorldConfig::default(), 30, &parse_script("f"));
    assert_eq!(report.snapshot.tick, 30);
    assert_eq!(report.snapshot.base.load, 0);
    assert_eq!(report.snapshot.bullets, 10);
}

#[test]
fn headless_runs_are_reproducible() {
    let cfg = WorldConfig::preset(Preset::Tetvaders).with_seed(3);
    let script = parse_script("llff..rrf");
    let a = headless::run(&cfg, 900, &script);
    let b = headless::run(&cfg, 900, &script);
    assert_eq!(a, b);
    assert!(a.snapshot.shapes_spawned >= 8);
}

#[test]
fn headless_report_serializes_to_json() {
    let report = headless::run(&WorldConfig::default(), 5, &[]);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["snapshot"]["tick"], 5);
    assert_eq!(json["snapshot"]["base"]["load"], 10);
    assert_eq!(json["config"]["width"], 80);
}
