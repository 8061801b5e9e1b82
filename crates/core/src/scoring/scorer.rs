//! Single-layer feed-forward scorer for CRM feature vectors.

use rand::Rng;

use crate::errors::{Result, ScoringError};

/// Fixed-topology scorer: a weight vector and a sigmoid over the weighted sum.
///
/// Weights are drawn once at construction and never updated, so a shared
/// scorer is safe for unsynchronized concurrent reads. The random source is
/// injected so callers (and tests) control reproducibility; weights are not
/// security-sensitive.
pub struct CrmScorer {
    weights: Vec<f64>,
}

impl CrmScorer {
    /// Builds a scorer for `inputs` features with weights drawn uniformly
    /// from [0, 1).
    pub fn new<R: Rng>(inputs: usize, rng: &mut R) -> Self {
        let weights = (0..inputs).map(|_| rng.gen::<f64>()).collect();
        CrmScorer { weights }
    }

    /// Builds a scorer with explicit weights.
    pub fn from_weights(weights: Vec<f64>) -> Self {
        CrmScorer { weights }
    }

    /// Number of features the scorer expects.
    pub fn inputs(&self) -> usize {
        self.weights.len()
    }

    /// Scores a feature vector: `sigmoid(sum(features[i] * weights[i]))`.
    ///
    /// The result is always in (0, 1); an empty scorer degenerates to
    /// `sigmoid(0) = 0.5`.
    pub fn score(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.weights.len() {
            return Err(ScoringError::DimensionMismatch {
                expected: self.weights.len(),
                actual: features.len(),
            }
            .into());
        }
        let weighted_sum: f64 = features
            .iter()
            .zip(self.weights.iter())
            .map(|(feature, weight)| feature * weight)
            .sum();
        Ok(sigmoid(weighted_sum))
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
