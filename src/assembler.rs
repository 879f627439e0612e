use std::time::Duration;
use crate::common::{ClassifierOutcome, GeoLocation, ImageDimensions, MergedDetection, ResultRecord, SeverityAssessment};
use crate::utils::round_to_f64;

/// Packs the fused outputs of one image into its record. Nothing is recomputed;
/// only the elapsed time is rounded to hundredths of a second.
pub fn assemble_result(
    detections: Vec<MergedDetection>,
    severity: SeverityAssessment,
    classifier: ClassifierOutcome,
    image_dimensions: ImageDimensions,
    location: Option<GeoLocation>,
    elapsed: Duration,
) -> ResultRecord {
    let location = location.unwrap_or_default();

    ResultRecord {
        detections,
        severity,
        classifier,
        image_dimensions,
        latitude: location.latitude,
        longitude: location.longitude,
        processing_time: round_to_f64(elapsed.as_secs_f64(), 2),
    }
}
