use serde::{Deserialize, Serialize};
use crate::common::{relative_area, DamageBox, DamageColour, ImageDimensions};
use crate::utils::{round_to, round_to_f64};

/// A deduplicated detection, produced once per merge group.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedDetection {
    pub bbox: DamageBox,
    #[serde(rename = "class")]
    pub label: String,
    #[serde(rename = "conf")]
    pub confidence: f32,
    pub area: f64,
    #[serde(rename = "rel_area")]
    pub relative_area: f64,
    #[serde(rename = "color")]
    pub colour: [u8; 3],
}

impl MergedDetection {
    /// Derives the area metrics of `bbox` against the dimensions of the image it
    /// was detected in. `confidence` is stored rounded to 2 decimals, `area` to 1,
    /// `relative_area` to 2.
    pub fn new(bbox: DamageBox, label: &str, confidence: f32, colour: DamageColour, dims: ImageDimensions) -> Self {
        let area = bbox.area_f64();
        let rel_area = relative_area(area, dims.width, dims.height);

        Self {
            bbox,
            label: label.to_string(),
            confidence: round_to(confidence, 2),
            area: round_to_f64(area, 1),
            relative_area: round_to_f64(rel_area, 2),
            colour: colour.as_array(),
        }
    }
}
