mod utils;
mod detectors;
pub mod assembler;
pub mod common;
pub mod data;
pub mod detection_processing;
pub mod detection_runners;
pub mod severity;

use std::time::Instant;
use crate::common::{ClassifierOutcome, DetectionOutcome, FusionInput, RoadVerdict};
use crate::data::FusionConfig;
use crate::detection_runners::{DamageClassifier, DamageDetector, DetectionRequest, RoadGate};

pub use crate::detectors::{fuse, fuse_batch, fuse_outcome, fusion_worker};

pub type Result<T, E = anyhow::Error> = std::result::Result<T, E>;

/// Loads the fusion config from `config_path`, or from the per-user config
/// directory when no path is given.
pub fn init_fusion(config_path: Option<&str>) -> Result<FusionConfig> {
    let config = match config_path {
        Some(path) => FusionConfig::from_file(path)?,
        None => FusionConfig::load_default()?,
    };

    log::info!("Initialized fusion pipeline\n{}", config.to_string());
    Ok(config)
}

/// Runs both models on one image and fuses their outputs.
///
/// A model failure is reported as [`DetectionOutcome::Error`] rather than a
/// partial record.
pub fn run_detection<I, D, C>(detector: &mut D, classifier: &mut C, request: &DetectionRequest<I>,
                              config: &FusionConfig) -> DetectionOutcome
where
    D: DamageDetector<Input = I>,
    C: DamageClassifier<Input = I>,
{
    let started = Instant::now();
    let mut _elapsed = started.elapsed();

    let detections = match detector.inference(&request.image) {
        Ok(detections) => detections,
        Err(e) => {
            log::error!("Detector failed: {:#}", e);
            return DetectionOutcome::error(format!("Detector failed: {:#}", e));
        }
    };
    _elapsed = utils::trace(config.profile, "TIME", "Detector", started, _elapsed);

    let classifier_outcome = match classifier
        .inference(&request.image)
        .and_then(|scores| ClassifierOutcome::from_scores(&scores, &config.label_thresholds))
    {
        Ok(outcome) => outcome,
        Err(e) => {
            log::error!("Classifier failed: {:#}", e);
            return DetectionOutcome::error(format!("Classifier failed: {:#}", e));
        }
    };
    _elapsed = utils::trace(config.profile, "TIME", "Classifier", started, _elapsed);

    let location = request.location.unwrap_or_default();
    let input = FusionInput::new(detections, classifier_outcome, request.image_dimensions)
        .with_location(location.latitude, location.longitude);

    let outcome = fuse_outcome(&input, config, started);

    log::info!("Total detection completed in {:.2?}", started.elapsed());

    outcome
}

/// Asks the road gate whether `image` shows a road before damage detection is
/// worth running.
pub fn run_road_check<I, G>(gate: &mut G, image: &I) -> Result<RoadVerdict>
where
    G: RoadGate<Input = I>,
{
    let started = Instant::now();

    let verdict = gate
        .inference(image)
        .and_then(|logits| RoadVerdict::from_logits(&logits))
        .map_err(|e| anyhow::anyhow!("Road check failed: {:#}", e));

    match &verdict {
        Ok(v) => log::info!("{} in {:.2?}", v, started.elapsed()),
        Err(e) => log::error!("{:#}", e),
    }
    verdict
}
