use std::io::Write;
use road_damage_detect::common::{DamageBox, DamageLabel};
use road_damage_detect::data::{FsAccess, FusionConfig, LabelMap, SeverityThresholds, CONFIG_FILE_NAME};

#[test]
fn defaults() {
    let config = FusionConfig::default();

    assert_eq!(config.merge_iou, 0.5);
    assert_eq!(config.min_confidence, 0.01);
    assert_eq!(config.label_thresholds.len(), 4);
    assert_eq!(config.threshold_for(DamageLabel::Pothole), 0.01);
    assert_eq!(config.threshold_for(DamageLabel::LongitudinalCrack), 0.4);
    assert_eq!(config.threshold_for(DamageLabel::LateralCrack), 0.4);
    assert_eq!(config.threshold_for(DamageLabel::AlligatorCrack), 0.01);
    assert_eq!(config.severity, SeverityThresholds::default());
}

#[test]
fn builder_validates_ranges() {
    assert!(FusionConfig::new().with_merge_iou(1.5).is_err());
    assert!(FusionConfig::new().with_merge_iou(-0.1).is_err());
    assert!(FusionConfig::new().with_min_confidence(2.).is_err());

    let config = FusionConfig::new()
        .with_merge_iou(0.3).unwrap()
        .with_min_confidence(0.25).unwrap()
        .with_profile(true);
    assert_eq!(config.merge_iou, 0.3);
    assert_eq!(config.min_confidence, 0.25);
    assert!(config.profile);
}

#[test]
fn save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("fusion.json");

    let config = FusionConfig::new()
        .with_merge_iou(0.6).unwrap()
        .with_label_threshold(DamageLabel::LateralCrack, 0.25)
        .with_severity(SeverityThresholds { severe_area: 40., ..Default::default() });
    config.save(&path).unwrap();

    let loaded = FusionConfig::from_file(&path).unwrap();
    assert_eq!(loaded, config);

    let via_init = road_damage_detect::init_fusion(path.to_str()).unwrap();
    assert_eq!(via_init, config);
}

#[test]
fn partial_file_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"merge_iou": 0.35, "severity": {{"high_count": 8}}}}"#).unwrap();

    let config = FusionConfig::from_file(file.path()).unwrap();

    assert_eq!(config.merge_iou, 0.35);
    assert_eq!(config.min_confidence, 0.01);
    assert_eq!(config.severity.high_count, 8);
    assert_eq!(config.severity.severe_count, 15);
    assert_eq!(config.label_thresholds.len(), 4);
}

#[test]
fn bad_config_files_fail() {
    assert!(FusionConfig::from_file("/nonexistent/fusion.json").is_err());

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"merge_iou": 3.0}}"#).unwrap();
    assert!(FusionConfig::from_file(file.path()).is_err());

    let mut garbage = tempfile::NamedTempFile::new().unwrap();
    write!(garbage, "not json").unwrap();
    assert!(FusionConfig::from_file(garbage.path()).is_err());
}

#[test]
fn label_map_from_metadata() {
    let map = LabelMap::from_metadata(r#"{0: 'alligator crack', 1: 'longitudinal crack', 2: "lateral_crack", 3: 'pothole'}"#).unwrap();

    assert_eq!(map.len(), 4);
    assert_eq!(map.name(0), Some("alligator crack"));
    assert_eq!(map.name(2), Some("lateral_crack"));
    assert_eq!(map.name(3), Some("pothole"));
    assert_eq!(map.name(4), None);
}

#[test]
fn label_map_rejects_gaps_and_empty_metadata() {
    assert!(LabelMap::from_metadata("{0: 'pothole', 2: 'lateral crack'}").is_err());
    assert!(LabelMap::from_metadata("{}").is_err());
}

#[test]
fn label_map_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "pothole\n\nlongitudinal_crack\n  lateral_crack  \nalligator_crack").unwrap();

    let map = LabelMap::from_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(map.names(), &["pothole", "longitudinal_crack", "lateral_crack", "alligator_crack"]);
    assert!(LabelMap::from_file("/nonexistent/labels.txt").is_err());
}

#[test]
fn label_map_builds_raw_detections() {
    let map = LabelMap::new(vec!["pothole".to_string(), "lateral_crack".to_string()]);

    let det = map.detection((1., 2., 3., 4.), 1, 0.7).unwrap();
    assert_eq!(det.label, "lateral_crack");
    assert_eq!(det.bbox, DamageBox::new(1., 2., 3., 4.));
    assert_eq!(det.confidence, 0.7);

    assert!(map.detection((1., 2., 3., 4.), 5, 0.7).is_err());
}

#[test]
fn config_directory_is_under_rdd() {
    // No config directory on exotic hosts without a home
    if let Ok(path) = FsAccess::Config.path() {
        assert!(path.ends_with("rdd"));
        assert!(!path.join(CONFIG_FILE_NAME).as_os_str().is_empty());
    }
}

#[test]
fn save_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    FsAccess::create_directory(&nested).unwrap();
    assert!(nested.is_dir());

    let path = dir.path().join("c").join(CONFIG_FILE_NAME);
    FusionConfig::default().save(&path).unwrap();
    assert_eq!(FusionConfig::from_file(&path).unwrap(), FusionConfig::default());
}
