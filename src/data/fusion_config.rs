//! Options for the fusion pipeline.
//!
//! Built once at startup (defaults, a JSON file, or the per-user config
//! directory) and passed by reference into the pipeline functions.

use std::path::Path;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use crate::common::DamageLabel;
use crate::data::{FsAccess, LabelThreshold, SeverityThresholds};
use crate::detection_processing::DEFAULT_MERGE_IOU;

pub const CONFIG_FILE_NAME: &str = "fusion.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// Minimum IoU against a group's seed for a same-class box to join it.
    pub merge_iou: f32,
    /// Raw detections below this confidence are dropped before merging.
    pub min_confidence: f32,
    pub label_thresholds: Vec<LabelThreshold>,
    pub severity: SeverityThresholds,
    pub profile: bool,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            merge_iou: DEFAULT_MERGE_IOU,
            min_confidence: 0.01,
            label_thresholds: LabelThreshold::defaults(),
            severity: SeverityThresholds::default(),
            profile: false,
        }
    }
}

impl FusionConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_merge_iou(mut self, iou: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&iou) {
            anyhow::bail!("Merge IoU threshold must be within [0, 1], got {}", iou);
        }
        self.merge_iou = iou;
        Ok(self)
    }

    pub fn with_min_confidence(mut self, conf: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&conf) {
            anyhow::bail!("Minimum confidence must be within [0, 1], got {}", conf);
        }
        self.min_confidence = conf;
        Ok(self)
    }

    pub fn with_label_threshold(mut self, label: DamageLabel, threshold: f32) -> Self {
        match self.label_thresholds.iter_mut().find(|t| t.label == label) {
            Some(t) => t.threshold = threshold,
            None => self.label_thresholds.push(LabelThreshold::new(label, threshold)),
        }
        self
    }

    pub fn with_severity(mut self, severity: SeverityThresholds) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_profile(mut self, profile: bool) -> Self {
        self.profile = profile;
        self
    }

    pub fn threshold_for(&self, label: DamageLabel) -> f32 {
        self.label_thresholds
            .iter()
            .find(|t| t.label == label)
            .map(|t| t.threshold)
            .unwrap_or_else(|| label.default_threshold())
    }

    /// Reads a JSON config. Missing fields fall back to their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
        let config: FusionConfig = serde_json::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `fusion.json` from the per-user config directory (e.g.
    /// `~/.config/rdd/fusion.json`), or the defaults when there is none.
    pub fn load_default() -> Result<Self> {
        let path = FsAccess::Config.path()?.join(CONFIG_FILE_NAME);
        if path.exists() {
            log::info!("Loading fusion config from {}", path.display());
            Self::from_file(&path)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            FsAccess::create_directory(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.merge_iou) {
            anyhow::bail!("Merge IoU threshold must be within [0, 1], got {}", self.merge_iou);
        }
        if !(0.0..=1.0).contains(&self.min_confidence) {
            anyhow::bail!("Minimum confidence must be within [0, 1], got {}", self.min_confidence);
        }
        Ok(())
    }

    pub fn to_string(&self) -> String {
        let thresholds = self.label_thresholds
            .iter()
            .map(|t| format!("{}={}", t.label, t.threshold))
            .collect::<Vec<_>>()
            .join(", ");

        format!("Merge IoU: {}\n\
        Minimum Confidence: {}\n\
        Classifier Thresholds: {}\n\
        Severity Thresholds: {:?}",
                self.merge_iou, self.min_confidence, thresholds, self.severity)
    }
}
