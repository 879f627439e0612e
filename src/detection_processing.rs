use crate::common::{DamageColour, ImageDimensions, MergedDetection, RawDetection};

pub const DEFAULT_MERGE_IOU: f32 = 0.5;

/// Drops raw detections below `min_confidence` (inclusive bound), keeping order.
pub fn filter_by_confidence(detections: &[RawDetection], min_confidence: f32) -> Vec<RawDetection> {
    detections
        .iter()
        .filter(|d| d.confidence >= min_confidence)
        .cloned()
        .collect()
}

/// Collapses same-class detections that overlap into one merged detection per group.
///
/// Groups are seed-anchored: each unconsumed detection, in input order, seeds a
/// group, and only *later* unconsumed detections of the same class whose IoU
/// with that seed is at least `iou_threshold` join it. Members are never
/// compared with each other or with the growing merged box, so a chain of
/// boxes A~B~C where only B overlaps C can end up split across two groups.
/// Every input lands in exactly one group; groups come out in seed order.
pub fn merge_boxes(detections: &[RawDetection], iou_threshold: f32, dims: ImageDimensions) -> Vec<MergedDetection> {
    let mut merged = Vec::new();
    let mut used = vec![false; detections.len()];

    for i in 0..detections.len() {
        if used[i] {
            continue;
        }

        let seed = &detections[i];
        used[i] = true;

        let mut bbox = seed.bbox;
        let mut confidence = seed.confidence;
        let mut members = 1;

        for j in (i + 1)..detections.len() {
            if used[j] {
                continue;
            }

            let other = &detections[j];
            if other.label != seed.label {
                continue;
            }

            if seed.bbox.iou(&other.bbox) >= iou_threshold {
                bbox = bbox.enclose(&other.bbox);
                confidence = confidence.max(other.confidence);
                used[j] = true;
                members += 1;
            }
        }

        log::trace!("Merged {} '{}' detection(s) into {:?}", members, seed.label, bbox.xy1_xy2());

        merged.push(MergedDetection::new(
            bbox,
            &seed.label,
            confidence,
            DamageColour::from_label(&seed.label),
            dims,
        ));
    }

    merged
}
