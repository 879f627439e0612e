use serde::{Deserialize, Serialize};
use crate::common::{ClassifierOutcome, ImageDimensions, MergedDetection, SeverityAssessment};

/// Fused assessment of one image, handed to the caller for transport or storage.
///
/// `latitude` and `longitude` always serialize, as `null` when unknown.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub detections: Vec<MergedDetection>,
    pub severity: SeverityAssessment,
    #[serde(rename = "vit_predictions")]
    pub classifier: ClassifierOutcome,
    pub image_dimensions: ImageDimensions,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Seconds, rounded to 2 decimals.
    pub processing_time: f64,
}

/// Either a finished record or the reason the image could not be assessed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DetectionOutcome {
    Record(Box<ResultRecord>),
    Error { error: String },
}

impl DetectionOutcome {
    pub fn error(message: impl Into<String>) -> Self {
        DetectionOutcome::Error { error: message.into() }
    }

    pub fn record(&self) -> Option<&ResultRecord> {
        match self {
            DetectionOutcome::Record(record) => Some(&**record),
            DetectionOutcome::Error { .. } => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DetectionOutcome::Error { .. })
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<ResultRecord> for DetectionOutcome {
    fn from(record: ResultRecord) -> Self {
        DetectionOutcome::Record(Box::new(record))
    }
}

impl From<anyhow::Error> for DetectionOutcome {
    fn from(err: anyhow::Error) -> Self {
        DetectionOutcome::error(format!("{:#}", err))
    }
}
