use serde::{Deserialize, Serialize};
use crate::common::{ClassifierOutcome, ImageDimensions, RawDetection};

/// Where an image was taken. Either coordinate may be unknown on its own.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }
}

/// Already-inferred model outputs for one image, ready to be fused.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusionInput {
    pub detections: Vec<RawDetection>,
    #[serde(default)]
    pub classifier: ClassifierOutcome,
    pub image_dimensions: ImageDimensions,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl FusionInput {
    pub fn new(detections: Vec<RawDetection>, classifier: ClassifierOutcome, image_dimensions: ImageDimensions) -> Self {
        Self {
            detections,
            classifier,
            image_dimensions,
            latitude: None,
            longitude: None,
        }
    }

    pub fn with_location(mut self, latitude: Option<f64>, longitude: Option<f64>) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// `None` when neither coordinate is known.
    pub fn location(&self) -> Option<GeoLocation> {
        if self.latitude.is_none() && self.longitude.is_none() {
            return None;
        }
        Some(GeoLocation {
            latitude: self.latitude,
            longitude: self.longitude,
        })
    }
}
