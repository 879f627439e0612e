use serde::{Deserialize, Serialize};
use crate::common::DamageLabel;
use crate::data::LabelThreshold;

/// Labels flagged by the multi-label classifier, kept in classifier output order
/// without duplicates. Serialized as a plain list of labels.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<DamageLabel>", into = "Vec<DamageLabel>")]
pub struct ClassifierOutcome {
    labels: Vec<DamageLabel>,
}

impl ClassifierOutcome {
    pub fn new(labels: &[DamageLabel]) -> Self {
        let labels = DamageLabel::ALL
            .into_iter()
            .filter(|l| labels.contains(l))
            .collect();
        Self { labels }
    }

    /// Thresholds one continuous score per label. `scores` must be in
    /// [`DamageLabel::ALL`] order; each label is flagged when its score is
    /// strictly above its own threshold.
    pub fn from_scores(scores: &[f32], thresholds: &[LabelThreshold]) -> anyhow::Result<Self> {
        if scores.len() != DamageLabel::ALL.len() {
            anyhow::bail!(
                "Classifier returned {} scores, expected {} ({})",
                scores.len(),
                DamageLabel::ALL.len(),
                DamageLabel::all_damage_labels().join(", ")
            );
        }

        let mut labels = Vec::new();
        for label in DamageLabel::ALL {
            let threshold = thresholds
                .iter()
                .find(|t| t.label == label)
                .copied()
                .unwrap_or_else(|| LabelThreshold::default_for(label));

            if threshold.check_score(scores[label.index()]) {
                labels.push(label);
            }
        }

        Ok(Self { labels })
    }

    pub fn labels(&self) -> &[DamageLabel] {
        &self.labels
    }

    pub fn contains(&self, label: DamageLabel) -> bool {
        self.labels.contains(&label)
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }
}

impl From<Vec<DamageLabel>> for ClassifierOutcome {
    fn from(labels: Vec<DamageLabel>) -> Self {
        Self::new(&labels)
    }
}

impl From<ClassifierOutcome> for Vec<DamageLabel> {
    fn from(outcome: ClassifierOutcome) -> Self {
        outcome.labels
    }
}
