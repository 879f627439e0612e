use crate::common::{GeoLocation, ImageDimensions, RawDetection};

/// Seam for the external vision models. Implementations own their weights and
/// runtime; the fusion pipeline only sees their outputs.
pub trait InferenceProcess {
    type Input;
    type Output;

    /// Runs the model on one decoded image.
    fn inference(&mut self, x: &Self::Input) -> anyhow::Result<Self::Output>;
}

/// Object detector: ordered boxes with class names and confidences.
pub trait DamageDetector: InferenceProcess<Output = Vec<RawDetection>> {}
impl<T: InferenceProcess<Output = Vec<RawDetection>>> DamageDetector for T {}

/// Multi-label classifier: one score per [`crate::common::DamageLabel`], in label order.
pub trait DamageClassifier: InferenceProcess<Output = Vec<f32>> {}
impl<T: InferenceProcess<Output = Vec<f32>>> DamageClassifier for T {}

/// Road / not-road gate: two logits, `[not_road, road]`.
pub trait RoadGate: InferenceProcess<Output = Vec<f32>> {}
impl<T: InferenceProcess<Output = Vec<f32>>> RoadGate for T {}

/// One image to run through both models.
#[derive(Debug, Clone)]
pub struct DetectionRequest<I> {
    pub image: I,
    pub image_dimensions: ImageDimensions,
    pub location: Option<GeoLocation>,
}

impl<I> DetectionRequest<I> {
    pub fn new(image: I, image_dimensions: ImageDimensions) -> Self {
        Self {
            image,
            image_dimensions,
            location: None,
        }
    }

    pub fn with_location(mut self, location: GeoLocation) -> Self {
        self.location = Some(location);
        self
    }
}
