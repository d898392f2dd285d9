use serde::Serialize;

use super::dimension::Dimension;
use super::vectors::{InputVector, WeightVector};

/// A computed score. Plain IEEE-754 double; infinities and NaN propagate.
pub type Score = f64;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionContribution {
    pub dimension: Dimension,
    pub input: f64,
    pub weight_text: String, // As configured, e.g. "2", "", "abc"
    pub weight: f64,         // Parsed value, 0 when the text is not a number
    pub contribution: f64,   // input * weight
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: Score,
    pub breakdown: Vec<DimensionContribution>,
}

/// Weighted sum of the six readings.
///
/// Holds the active weight configuration; computing never mutates it and
/// never fails.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedScoreCalculator {
    weights: WeightVector,
}

impl WeightedScoreCalculator {
    /// Calculator with every weight at its default of "1"
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: WeightVector) -> Self {
        Self { weights }
    }

    /// Replace the active weights. No validation: text that is not a number
    /// simply counts as 0 when scoring.
    pub fn configure(&mut self, weights: WeightVector) {
        self.weights = weights;
    }

    pub fn compute(&self, inputs: &InputVector) -> Score {
        Dimension::ALL
            .iter()
            .map(|d| inputs.get(*d) * self.weights.value(*d))
            .sum()
    }

    /// Score a possibly short list of readings; missing trailing ones count as 0
    pub fn compute_slice(&self, inputs: &[f64]) -> Score {
        self.compute(&InputVector::from_slice(inputs))
    }

    /// Same sum as [`compute`](Self::compute), with the per-dimension terms.
    pub fn score(&self, inputs: &InputVector) -> ScoreResult {
        let breakdown: Vec<DimensionContribution> = Dimension::ALL
            .iter()
            .map(|d| {
                let input = inputs.get(*d);
                let weight = self.weights.value(*d);
                DimensionContribution {
                    dimension: *d,
                    input,
                    weight_text: self.weights.text(*d).to_string(),
                    weight,
                    contribution: input * weight,
                }
            })
            .collect();

        ScoreResult {
            score: breakdown.iter().map(|c| c.contribution).sum(),
            breakdown,
        }
    }
}
