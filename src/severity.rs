use std::collections::HashSet;
use crate::common::{MergedDetection, SeverityAssessment, SeverityLevel};
use crate::data::SeverityThresholds;

/// Scores the final detection list of one image.
///
/// The three escalation checks all run; a later one that fires overrides the
/// earlier level, so the result is the highest tier reached. The type score only
/// ever contributes to `Moderate`.
pub fn assess_severity(detections: &[MergedDetection], thresholds: &SeverityThresholds) -> SeverityAssessment {
    let count_score = detections.len();
    let area_score: f64 = detections.iter().map(|d| d.relative_area).sum();
    let type_score = detections
        .iter()
        .map(|d| d.label.as_str())
        .collect::<HashSet<_>>()
        .len();

    let mut level = SeverityLevel::Low;
    if count_score > thresholds.moderate_count
        || area_score > thresholds.moderate_area
        || type_score > thresholds.moderate_types {
        level = SeverityLevel::Moderate;
    }
    if count_score > thresholds.high_count || area_score > thresholds.high_area {
        level = SeverityLevel::High;
    }
    if count_score > thresholds.severe_count || area_score > thresholds.severe_area {
        level = SeverityLevel::Severe;
    }

    SeverityAssessment {
        level,
        count_score,
        area_score,
        type_score,
    }
}
