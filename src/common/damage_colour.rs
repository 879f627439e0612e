use image::Rgb;

/// Display colour assigned to a detection by its class name. Not used in scoring.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DamageColour {
    Pothole,
    Longitudinal,
    Lateral,
    Alligator,
    #[default] Unrecognised,
}

impl DamageColour {
    /// Matches the class name against the known damage keywords, case-insensitive
    /// with underscores read as spaces. First match wins.
    pub fn from_label(class_name: &str) -> Self {
        let normalized = class_name.replace('_', " ").to_lowercase();

        if normalized.contains("pothole") {
            DamageColour::Pothole
        } else if normalized.contains("longitudinal") {
            DamageColour::Longitudinal
        } else if normalized.contains("lateral") {
            DamageColour::Lateral
        } else if normalized.contains("alligator") {
            DamageColour::Alligator
        } else {
            DamageColour::Unrecognised
        }
    }

    pub fn rgb(&self) -> Rgb<u8> {
        match self {
            DamageColour::Pothole => Rgb([255, 0, 0]),        // red
            DamageColour::Longitudinal => Rgb([0, 0, 255]),   // blue
            DamageColour::Lateral => Rgb([255, 165, 0]),      // orange
            DamageColour::Alligator => Rgb([128, 0, 128]),    // purple
            DamageColour::Unrecognised => Rgb([0, 255, 0]),   // green
        }
    }

    pub fn as_array(&self) -> [u8; 3] {
        self.rgb().0
    }
}
