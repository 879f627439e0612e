use serde::{Deserialize, Serialize};

/// Escalation limits for the severity verdict. Every comparison is strict
/// (`score > limit`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityThresholds {
    pub moderate_count: usize,
    pub moderate_area: f64,
    pub moderate_types: usize,
    pub high_count: usize,
    pub high_area: f64,
    pub severe_count: usize,
    pub severe_area: f64,
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        Self {
            moderate_count: 5,
            moderate_area: 15.,
            moderate_types: 2,
            high_count: 10,
            high_area: 30.,
            severe_count: 15,
            severe_area: 50.,
        }
    }
}
