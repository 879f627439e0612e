use std::time::Instant;
use road_damage_detect::common::{ClassifierOutcome, DamageBox, DamageLabel, FusionInput, ImageDimensions, RawDetection, SeverityLevel};
use road_damage_detect::data::send_channels::fusion_channels;
use road_damage_detect::data::FusionConfig;

fn input(n: usize) -> FusionInput {
    let detections = (0..n)
        .map(|i| {
            let x = (i * 20) as f32;
            RawDetection::new(DamageBox::new(x, 0., x + 10., 10.), "pothole", 0.8)
        })
        .collect();

    FusionInput::new(detections, ClassifierOutcome::new(&[DamageLabel::Pothole]), ImageDimensions::new(400, 100))
}

#[tokio::test]
async fn worker_replies_in_order_and_stops_on_disconnect() {
    let (send_state, fusion_state) = fusion_channels();
    let config = FusionConfig::default();

    let worker = tokio::task::spawn_blocking(move || road_damage_detect::fusion_worker(fusion_state, config));

    for n in [0, 3, 12] {
        send_state.input_tx.send(Box::new(input(n))).unwrap();
    }
    send_state.input_tx
        .send(Box::new(FusionInput::new(vec![], ClassifierOutcome::default(), ImageDimensions::new(0, 0))))
        .unwrap();
    drop(send_state.input_tx);

    let outcomes: Vec<_> = send_state.outcome_rx.iter().collect();
    assert_eq!(outcomes.len(), 4);

    let counts: Vec<usize> = outcomes[..3]
        .iter()
        .map(|o| o.record().unwrap().severity.count_score)
        .collect();
    assert_eq!(counts, vec![0, 3, 12]);
    assert_eq!(outcomes[2].record().unwrap().severity.level, SeverityLevel::High);
    assert!(outcomes[3].is_error());

    worker.await.unwrap().unwrap();
}

#[tokio::test]
async fn worker_fails_when_outcomes_are_abandoned() {
    let (send_state, fusion_state) = fusion_channels();
    let worker = tokio::task::spawn_blocking(move || road_damage_detect::fusion_worker(fusion_state, FusionConfig::default()));

    drop(send_state.outcome_rx);
    send_state.input_tx.send(Box::new(input(1))).unwrap();
    drop(send_state.input_tx);

    assert!(worker.await.unwrap().is_err());
}

#[test]
fn batch_matches_single_image_fusion() {
    let config = FusionConfig::default();
    let inputs: Vec<FusionInput> = (0..8).map(input).collect();

    let batch = road_damage_detect::fuse_batch(&inputs, &config);
    assert_eq!(batch.len(), inputs.len());

    for (input, outcome) in inputs.iter().zip(&batch) {
        let single = road_damage_detect::fuse(input, &config, Instant::now());
        let record = outcome.record().unwrap();
        assert_eq!(record.detections, single.detections);
        assert_eq!(record.severity, single.severity);
        assert_eq!(record.classifier, single.classifier);
    }
}

#[test]
fn fusion_input_from_json() {
    let json = r#"{
        "detections": [
            {"bbox": [0, 0, 10, 10], "class": "pothole", "conf": 0.9},
            {"bbox": [1, 1, 11, 11], "class": "pothole", "conf": 0.95}
        ],
        "image_dimensions": [100, 100],
        "latitude": 6.9
    }"#;

    let input: FusionInput = serde_json::from_str(json).unwrap();
    assert!(input.classifier.is_empty());
    assert_eq!(input.latitude, Some(6.9));
    assert_eq!(input.longitude, None);

    let record = road_damage_detect::fuse(&input, &FusionConfig::default(), Instant::now());
    assert_eq!(record.detections.len(), 1);
    assert_eq!(record.detections[0].bbox, DamageBox::new(0., 0., 11., 11.));
    assert_eq!(record.latitude, Some(6.9));
    assert_eq!(record.longitude, None);
}

#[test]
fn classifier_labels_from_json_are_canonicalised() {
    let json = r#"{
        "detections": [],
        "classifier": ["alligator_crack", "pothole", "alligator_crack", "lateral_crack"],
        "image_dimensions": [100, 100]
    }"#;

    let input: FusionInput = serde_json::from_str(json).unwrap();
    assert_eq!(
        input.classifier.labels(),
        &[DamageLabel::Pothole, DamageLabel::LateralCrack, DamageLabel::AlligatorCrack]
    );
    assert_eq!(
        input.classifier,
        ClassifierOutcome::new(&[DamageLabel::AlligatorCrack, DamageLabel::Pothole, DamageLabel::LateralCrack])
    );
}
