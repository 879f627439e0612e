use serde::{Deserialize, Serialize};

/// Damage types flagged by the multi-label classifier, in the classifier's
/// output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageLabel {
    Pothole,
    LongitudinalCrack,
    LateralCrack,
    AlligatorCrack,
}

// Hardcoded label names. Storing the display spelling and the wire (snake_case) version.
const POTHOLE: [&str; 2] = ["Pothole", "pothole"];
const LONGITUDINAL_CRACK: [&str; 2] = ["Longitudinal Crack", "longitudinal_crack"];
const LATERAL_CRACK: [&str; 2] = ["Lateral Crack", "lateral_crack"];
const ALLIGATOR_CRACK: [&str; 2] = ["Alligator Crack", "alligator_crack"];

impl DamageLabel {
    /// Every label, in classifier output order.
    pub const ALL: [DamageLabel; 4] = [
        DamageLabel::Pothole,
        DamageLabel::LongitudinalCrack,
        DamageLabel::LateralCrack,
        DamageLabel::AlligatorCrack,
    ];

    pub fn from_str(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().replace(' ', "_").as_str() {
            "pothole" => Some(DamageLabel::Pothole),
            "longitudinal_crack" => Some(DamageLabel::LongitudinalCrack),
            "lateral_crack" => Some(DamageLabel::LateralCrack),
            "alligator_crack" => Some(DamageLabel::AlligatorCrack),
            _ => None,
        }
    }

    pub fn str(&self) -> &'static str {
        match self {
            DamageLabel::Pothole => POTHOLE[1],
            DamageLabel::LongitudinalCrack => LONGITUDINAL_CRACK[1],
            DamageLabel::LateralCrack => LATERAL_CRACK[1],
            DamageLabel::AlligatorCrack => ALLIGATOR_CRACK[1],
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DamageLabel::Pothole => POTHOLE[0],
            DamageLabel::LongitudinalCrack => LONGITUDINAL_CRACK[0],
            DamageLabel::LateralCrack => LATERAL_CRACK[0],
            DamageLabel::AlligatorCrack => ALLIGATOR_CRACK[0],
        }
    }

    /// Position of this label in the classifier's score vector.
    pub fn index(&self) -> usize {
        match self {
            DamageLabel::Pothole => 0,
            DamageLabel::LongitudinalCrack => 1,
            DamageLabel::LateralCrack => 2,
            DamageLabel::AlligatorCrack => 3,
        }
    }

    /// Threshold the classifier was validated against for this label.
    pub fn default_threshold(&self) -> f32 {
        match self {
            DamageLabel::Pothole => 0.01,
            DamageLabel::LongitudinalCrack => 0.4,
            DamageLabel::LateralCrack => 0.4,
            DamageLabel::AlligatorCrack => 0.01,
        }
    }

    pub fn all_damage_labels() -> Vec<String> {
        DamageLabel::ALL.iter().map(|l| l.str().to_string()).collect()
    }

    pub fn is_valid_damage_label(label: &str) -> bool {
        DamageLabel::from_str(label).is_some()
    }
}

impl std::fmt::Display for DamageLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.str())
    }
}
