use serde::{Deserialize, Serialize};
use crate::common::{DamageBox, MergedDetection};

/// One detector output before fusion.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDetection {
    pub bbox: DamageBox,
    #[serde(rename = "class")]
    pub label: String,
    #[serde(rename = "conf")]
    pub confidence: f32,
}

impl RawDetection {
    pub fn new(bbox: DamageBox, label: &str, confidence: f32) -> Self {
        Self {
            bbox,
            label: label.to_string(),
            confidence,
        }
    }

    /// Computes the intersection over union (IoU) between this detection and another.
    pub fn iou(&self, other: &RawDetection) -> f32 {
        self.bbox.iou(&other.bbox)
    }
}

impl From<&MergedDetection> for RawDetection {
    fn from(merged: &MergedDetection) -> Self {
        Self {
            bbox: merged.bbox,
            label: merged.label.clone(),
            confidence: merged.confidence,
        }
    }
}
