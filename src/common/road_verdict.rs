use serde::{Deserialize, Serialize};

/// Output classes of the road gate, in logit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoadClass {
    #[serde(rename = "Not a Road")]
    NotRoad,
    #[serde(rename = "Road")]
    Road,
}

impl RoadClass {
    pub const ALL: [RoadClass; 2] = [RoadClass::NotRoad, RoadClass::Road];

    pub fn str(&self) -> &'static str {
        match self {
            RoadClass::NotRoad => "Not a Road",
            RoadClass::Road => "Road",
        }
    }
}

impl std::fmt::Display for RoadClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.str())
    }
}

/// Whether an image shows a road at all, with the softmax probability of the
/// winning class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoadVerdict {
    pub prediction: RoadClass,
    pub confidence: f32,
}

impl RoadVerdict {
    /// Softmax over the two gate logits (`[not_road, road]`), then argmax.
    /// Equal probabilities resolve to the first class.
    pub fn from_logits(logits: &[f32]) -> anyhow::Result<Self> {
        if logits.len() != RoadClass::ALL.len() {
            anyhow::bail!("Road gate returned {} logits, expected {}", logits.len(), RoadClass::ALL.len());
        }
        if logits.iter().any(|l| !l.is_finite()) {
            anyhow::bail!("Road gate returned non-finite logits {:?}", logits);
        }

        let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let exps: Vec<f32> = logits.iter().map(|l| (l - max).exp()).collect();
        let sum: f32 = exps.iter().sum();

        let mut best = 0;
        for (i, e) in exps.iter().enumerate() {
            if *e > exps[best] {
                best = i;
            }
        }

        Ok(Self {
            prediction: RoadClass::ALL[best],
            confidence: exps[best] / sum,
        })
    }

    pub fn is_road(&self) -> bool {
        self.prediction == RoadClass::Road
    }
}

impl std::fmt::Display for RoadVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (confidence: {:.4})", self.prediction, self.confidence)
    }
}

/// Short label for a road check: the class name, or `"Error"` when the check failed.
pub fn road_prediction(result: &anyhow::Result<RoadVerdict>) -> &'static str {
    match result {
        Ok(verdict) => verdict.prediction.str(),
        Err(_) => "Error",
    }
}
