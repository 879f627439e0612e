use serde::{Deserialize, Serialize};
use crate::common::DamageLabel;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelThreshold {
    pub label: DamageLabel,
    pub threshold: f32,
}

impl LabelThreshold {
    pub fn new(label: DamageLabel, threshold: f32) -> Self {
        Self {
            label,
            threshold,
        }
    }

    pub fn default_for(label: DamageLabel) -> Self {
        Self::new(label, label.default_threshold())
    }

    /// The classifier's validated thresholds, one per label.
    pub fn defaults() -> Vec<LabelThreshold> {
        DamageLabel::ALL.into_iter().map(Self::default_for).collect()
    }

    /// `true` when `score` flags this label. Strictly greater: a score equal to
    /// the threshold is not a hit.
    pub fn check_score(self, score: f32) -> bool {
        score > self.threshold
    }
}
