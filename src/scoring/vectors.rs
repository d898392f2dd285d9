use super::dimension::{Dimension, DIMENSION_COUNT};
use super::number::number_or_zero;

/// Text every weight starts out with.
pub const DEFAULT_WEIGHT: &str = "1";

/// The six configured multipliers, one per [`Dimension`].
///
/// Weights are kept as the text the user typed so empty or half-typed
/// values survive a save/load cycle. They are only turned into numbers when a
/// score is computed; text that does not parse counts as 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightVector([String; DIMENSION_COUNT]);

impl Default for WeightVector {
    fn default() -> Self {
        Self(std::array::from_fn(|_| DEFAULT_WEIGHT.to_string()))
    }
}

impl WeightVector {
    pub fn new(weights: [String; DIMENSION_COUNT]) -> Self {
        Self(weights)
    }

    pub fn text(&self, dimension: Dimension) -> &str {
        &self.0[dimension.index()]
    }

    pub fn set_text(&mut self, dimension: Dimension, text: impl Into<String>) {
        self.0[dimension.index()] = text.into();
    }

    /// Numeric value of a weight, 0 when its text is not a number
    pub fn value(&self, dimension: Dimension) -> f64 {
        number_or_zero(self.text(dimension))
    }

    /// (dimension, text) pairs in dimension order
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &str)> {
        Dimension::ALL.iter().map(move |d| (*d, self.text(*d)))
    }
}

impl<S: Into<String>> From<[S; DIMENSION_COUNT]> for WeightVector {
    fn from(weights: [S; DIMENSION_COUNT]) -> Self {
        Self(weights.map(Into::into))
    }
}

/// The six readings of one scoring session.
///
/// Lives only as long as the input surface that filled it; never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputVector([f64; DIMENSION_COUNT]);

impl InputVector {
    pub fn new(values: [f64; DIMENSION_COUNT]) -> Self {
        Self(values)
    }

    /// Build from a possibly short slice.
    ///
    /// Missing trailing positions are 0; entries past the sixth are ignored.
    pub fn from_slice(values: &[f64]) -> Self {
        let mut inputs = [0.0; DIMENSION_COUNT];
        for (slot, value) in inputs.iter_mut().zip(values) {
            *slot = *value;
        }
        Self(inputs)
    }

    /// Build from user-entered texts, padding like [`InputVector::from_slice`].
    pub fn from_texts<S: AsRef<str>>(texts: &[S]) -> Self {
        let values: Vec<f64> = texts.iter().map(|t| number_or_zero(t.as_ref())).collect();
        Self::from_slice(&values)
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        self.0[dimension.index()]
    }

    pub fn set(&mut self, dimension: Dimension, value: f64) {
        self.0[dimension.index()] = value;
    }

    /// Store a user-entered text; unreadable text becomes 0
    pub fn set_text(&mut self, dimension: Dimension, text: &str) {
        self.set(dimension, number_or_zero(text));
    }

    pub fn values(&self) -> &[f64; DIMENSION_COUNT] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_are_one() {
        let weights = WeightVector::default();
        for (_, text) in weights.iter() {
            assert_eq!(text, "1");
        }
        assert_eq!(weights.value(Dimension::Help), 1.0);
    }

    #[test]
    fn test_weight_text_preserved() {
        let mut weights = WeightVector::default();
        weights.set_text(Dimension::Study, " 2.50 ");
        assert_eq!(weights.text(Dimension::Study), " 2.50 ");
        assert_eq!(weights.value(Dimension::Study), 2.5);

        weights.set_text(Dimension::Study, "");
        assert_eq!(weights.text(Dimension::Study), "");
        assert_eq!(weights.value(Dimension::Study), 0.0);
    }

    #[test]
    fn test_weights_from_array() {
        let weights = WeightVector::from(["2", "0", "1", "1", "1", "abc"]);
        assert_eq!(weights.value(Dimension::Work), 2.0);
        assert_eq!(weights.value(Dimension::Sport), 0.0);
        assert_eq!(weights.value(Dimension::MoodFactor), 0.0);
        assert_eq!(weights.text(Dimension::MoodFactor), "abc");
    }

    #[test]
    fn test_inputs_from_short_slice_pad_with_zero() {
        let inputs = InputVector::from_slice(&[3.0, 5.0]);
        assert_eq!(inputs.values(), &[3.0, 5.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_inputs_from_long_slice_truncate() {
        let inputs = InputVector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(inputs.values(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_inputs_from_texts() {
        let inputs = InputVector::from_texts(&["4", "", "x", "1.5"]);
        assert_eq!(inputs.values(), &[4.0, 0.0, 0.0, 1.5, 0.0, 0.0]);
    }

    #[test]
    fn test_input_set_text() {
        let mut inputs = InputVector::default();
        inputs.set_text(Dimension::Sport, "7");
        inputs.set_text(Dimension::Help, "nope");
        assert_eq!(inputs.get(Dimension::Sport), 7.0);
        assert_eq!(inputs.get(Dimension::Help), 0.0);
    }
}
