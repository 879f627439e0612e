use std::time::Instant;
use rayon::prelude::*;
use crate::assembler::assemble_result;
use crate::common::{DetectionOutcome, FusionInput, ResultRecord};
use crate::data::send_channels::FusionState;
use crate::data::{FusionConfig, TimeCalc};
use crate::detection_processing::{filter_by_confidence, merge_boxes};
use crate::severity::assess_severity;
use crate::utils;

/// Fuses already-inferred model outputs for one image. `started` marks when the
/// caller began working on the image; the record's processing time runs from it.
pub fn fuse(input: &FusionInput, config: &FusionConfig, started: Instant) -> ResultRecord {
    let mut _elapsed = started.elapsed();

    let raw = filter_by_confidence(&input.detections, config.min_confidence);
    let merged = merge_boxes(&raw, config.merge_iou, input.image_dimensions);
    _elapsed = utils::trace(config.profile, "TIME", "Merge", started, _elapsed);

    let severity = assess_severity(&merged, &config.severity);
    _elapsed = utils::trace(config.profile, "TIME", "Severity", started, _elapsed);

    log::debug!(
        "{} raw -> {} merged detection(s), severity {} (count={}, area={:.2}, types={})",
        input.detections.len(), merged.len(), severity.level,
        severity.count_score, severity.area_score, severity.type_score
    );

    assemble_result(
        merged,
        severity,
        input.classifier.clone(),
        input.image_dimensions,
        input.location(),
        started.elapsed(),
    )
}

/// Like [`fuse`], but rejects inputs the pipeline cannot score instead of
/// producing a record from them.
pub fn fuse_outcome(input: &FusionInput, config: &FusionConfig, started: Instant) -> DetectionOutcome {
    match validate_input(input) {
        Ok(()) => fuse(input, config, started).into(),
        Err(e) => {
            log::warn!("Rejected fusion input: {:#}", e);
            e.into()
        }
    }
}

/// Fuses independent images on the rayon pool. Output order matches input order.
pub fn fuse_batch(inputs: &[FusionInput], config: &FusionConfig) -> Vec<DetectionOutcome> {
    inputs
        .par_iter()
        .map(|input| fuse_outcome(input, config, Instant::now()))
        .collect()
}

/// Receives inputs until every sender is dropped, replying with one outcome per input.
pub fn fusion_worker(state: FusionState, config: FusionConfig) -> anyhow::Result<()> {
    let mut time_calc = TimeCalc::default();

    // Exits once the request side disconnects
    while let Ok(input) = state.input_rx.recv() {
        let started = Instant::now();
        let outcome = fuse_outcome(&input, &config, started);
        time_calc.push(started.elapsed());

        state.outcome_tx
            .send(Box::new(outcome))
            .map_err(|e| anyhow::anyhow!("Failed to send fusion outcome: {}", e))?;
    }

    log::info!(
        "Fusion worker stopped after {} image(s) | Avg={:.2?} | Max={:.2?}",
        time_calc.n(), time_calc.avg(), time_calc.max()
    );
    Ok(())
}

fn validate_input(input: &FusionInput) -> anyhow::Result<()> {
    let dims = input.image_dimensions;
    if dims.area() == 0 {
        anyhow::bail!("Invalid image dimensions {}x{}", dims.width, dims.height);
    }
    for (i, det) in input.detections.iter().enumerate() {
        let (x1, y1, x2, y2) = det.bbox.xy1_xy2();
        if !(x1 <= x2 && y1 <= y2) {
            anyhow::bail!("Detection {} has an inverted box [{}, {}, {}, {}]", i, x1, y1, x2, y2);
        }
        if !(0.0..=1.0).contains(&det.confidence) {
            anyhow::bail!("Detection {} has confidence {} outside [0, 1]", i, det.confidence);
        }
    }
    Ok(())
}
