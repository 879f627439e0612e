use road_damage_detect::common::{ClassifierOutcome, DamageColour, DamageLabel};
use road_damage_detect::data::{FusionConfig, LabelThreshold};

#[test]
fn scores_are_thresholded_per_label() {
    let outcome = ClassifierOutcome::from_scores(&[0.02, 0.4, 0.41, 0.0], &LabelThreshold::defaults()).unwrap();

    assert_eq!(outcome.labels(), &[DamageLabel::Pothole, DamageLabel::LateralCrack]);
    assert!(!outcome.contains(DamageLabel::LongitudinalCrack));
}

#[test]
fn score_equal_to_threshold_is_not_flagged() {
    let outcome = ClassifierOutcome::from_scores(&[0.01, 0.4, 0.4, 0.01], &LabelThreshold::defaults()).unwrap();
    assert!(outcome.is_empty());
}

#[test]
fn all_labels_can_fire_together() {
    let outcome = ClassifierOutcome::from_scores(&[0.9, 0.9, 0.9, 0.9], &LabelThreshold::defaults()).unwrap();
    assert_eq!(outcome.len(), 4);
    assert_eq!(outcome.labels(), &DamageLabel::ALL);
}

#[test]
fn wrong_score_count_is_an_error() {
    assert!(ClassifierOutcome::from_scores(&[0.5; 3], &LabelThreshold::defaults()).is_err());
    assert!(ClassifierOutcome::from_scores(&[], &LabelThreshold::defaults()).is_err());
}

#[test]
fn missing_thresholds_fall_back_to_label_defaults() {
    let outcome = ClassifierOutcome::from_scores(&[0.0, 0.5, 0.0, 0.0], &[]).unwrap();
    assert_eq!(outcome.labels(), &[DamageLabel::LongitudinalCrack]);
}

#[test]
fn configured_thresholds_override_defaults() {
    let config = FusionConfig::default().with_label_threshold(DamageLabel::Pothole, 0.5);
    assert_eq!(config.threshold_for(DamageLabel::Pothole), 0.5);
    assert_eq!(config.threshold_for(DamageLabel::LateralCrack), 0.4);

    let outcome = ClassifierOutcome::from_scores(&[0.3, 0.0, 0.0, 0.0], &config.label_thresholds).unwrap();
    assert!(outcome.is_empty());
}

#[test]
fn outcome_serializes_as_label_list() {
    let outcome = ClassifierOutcome::new(&[DamageLabel::AlligatorCrack, DamageLabel::Pothole]);

    let json = serde_json::to_string(&outcome).unwrap();
    assert_eq!(json, r#"["pothole","alligator_crack"]"#);
}

#[test]
fn label_names_round_trip() {
    for label in DamageLabel::ALL {
        assert_eq!(DamageLabel::from_str(label.str()), Some(label));
        assert_eq!(DamageLabel::from_str(label.display_name()), Some(label));
        assert_eq!(DamageLabel::ALL[label.index()], label);
    }
    assert!(!DamageLabel::is_valid_damage_label("manhole"));
}

#[test]
fn colour_table() {
    assert_eq!(DamageColour::from_label("pothole").as_array(), [255, 0, 0]);
    assert_eq!(DamageColour::from_label("Longitudinal_Crack").as_array(), [0, 0, 255]);
    assert_eq!(DamageColour::from_label("LATERAL CRACK").as_array(), [255, 165, 0]);
    assert_eq!(DamageColour::from_label("alligator_crack").as_array(), [128, 0, 128]);
    assert_eq!(DamageColour::from_label("manhole").as_array(), [0, 255, 0]);
    assert_eq!(DamageColour::from_label("").as_array(), [0, 255, 0]);
    assert_eq!(DamageColour::default(), DamageColour::Unrecognised);
}

#[test]
fn colour_keyword_order_decides_ties() {
    // "pothole" is checked before "lateral"
    assert_eq!(DamageColour::from_label("lateral_pothole"), DamageColour::Pothole);
}
