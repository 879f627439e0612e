use serde::{Deserialize, Serialize};

/// Overall damage verdict for one image. Ordered `Low < Moderate < High < Severe`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    #[default] Low,
    Moderate,
    High,
    Severe,
}

impl SeverityLevel {
    pub fn str(&self) -> &'static str {
        match self {
            SeverityLevel::Low => "low",
            SeverityLevel::Moderate => "moderate",
            SeverityLevel::High => "high",
            SeverityLevel::Severe => "severe",
        }
    }
}

impl std::fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.str())
    }
}

/// Severity verdict and the three scores it was derived from.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityAssessment {
    pub level: SeverityLevel,
    /// Number of merged detections.
    pub count_score: usize,
    /// Sum of relative areas, in percent. Overlapping boxes can push it past 100.
    pub area_score: f64,
    /// Number of distinct damage classes.
    pub type_score: usize,
}
