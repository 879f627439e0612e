use regex::Regex;
use crate::common::{DamageBox, RawDetection};
use crate::utils;

/// Detector class names, indexed by class id.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LabelMap {
    names: Vec<String>,
}

impl LabelMap {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// One class name per line; blank lines are skipped.
    pub fn from_file(filename: &str) -> anyhow::Result<Self> {
        let names = utils::file_to_vec(filename.to_string())
            .map_err(|e| anyhow::anyhow!("Failed to read labels file {}: {}", filename, e))?
            .into_iter()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>();

        if names.is_empty() {
            anyhow::bail!("Labels file {} contains no class names", filename);
        }
        Ok(Self { names })
    }

    /// Parses the class-name table embedded in model metadata.
    /// String format: `{0: 'pothole', 1: 'alligator crack', 2: "lateral_crack"}`
    pub fn from_metadata(names: &str) -> anyhow::Result<Self> {
        let re = Regex::new(r#"(\d+)\s*:\s*(['"])([-()\w '"]+?)(['"])"#)?;
        let mut indexed = Vec::new();
        for (_, [id, _, name, _]) in re.captures_iter(names).map(|x| x.extract()) {
            indexed.push((id.parse::<usize>()?, name.to_string()));
        }

        if indexed.is_empty() {
            anyhow::bail!("No class names found in model metadata: {}", names);
        }
        indexed.sort_by_key(|(id, _)| *id);
        for (expected, (id, _)) in indexed.iter().enumerate() {
            if *id != expected {
                anyhow::bail!("Model metadata class ids are not contiguous: missing id {}", expected);
            }
        }

        Ok(Self {
            names: indexed.into_iter().map(|(_, name)| name).collect(),
        })
    }

    pub fn name(&self, class_id: usize) -> Option<&str> {
        self.names.get(class_id).map(|s| s.as_str())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Builds a raw detection from a detector row of `(x1, y1, x2, y2)`, class id and confidence.
    pub fn detection(&self, xyxy: (f32, f32, f32, f32), class_id: usize, confidence: f32) -> anyhow::Result<RawDetection> {
        let label = self.name(class_id).ok_or_else(|| {
            anyhow::anyhow!("Class id {} is outside the label map ({} names)", class_id, self.names.len())
        })?;
        let (x1, y1, x2, y2) = xyxy;
        Ok(RawDetection::new(DamageBox::new(x1, y1, x2, y2), label, confidence))
    }
}
