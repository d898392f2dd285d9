use serde::{Deserialize, Serialize};

use crate::scoring::{Dimension, WeightVector, DEFAULT_WEIGHT};

/// Persisted settings record.
///
/// A flat mapping so the file stays easy to edit by hand:
///
/// ```yaml
/// profile: default
/// weight1: "1"
/// weight2: "0.5"
/// weight3: "2"
/// weight4: "1"
/// weight5: "1"
/// weight6: "1"
/// ```
///
/// Missing keys take their default, so a file that only sets `weight2` is
/// valid. Weights are strings so whatever the user typed is kept as-is.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Free-form identification string
    pub profile: String,
    pub weight1: String,
    pub weight2: String,
    pub weight3: String,
    pub weight4: String,
    pub weight5: String,
    pub weight6: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
            weight1: DEFAULT_WEIGHT.to_string(),
            weight2: DEFAULT_WEIGHT.to_string(),
            weight3: DEFAULT_WEIGHT.to_string(),
            weight4: DEFAULT_WEIGHT.to_string(),
            weight5: DEFAULT_WEIGHT.to_string(),
            weight6: DEFAULT_WEIGHT.to_string(),
        }
    }
}

impl Settings {
    pub fn weight(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Work => &self.weight1,
            Dimension::Sport => &self.weight2,
            Dimension::Study => &self.weight3,
            Dimension::Help => &self.weight4,
            Dimension::SocialAct => &self.weight5,
            Dimension::MoodFactor => &self.weight6,
        }
    }

    pub fn set_weight(&mut self, dimension: Dimension, text: String) {
        let slot = match dimension {
            Dimension::Work => &mut self.weight1,
            Dimension::Sport => &mut self.weight2,
            Dimension::Study => &mut self.weight3,
            Dimension::Help => &mut self.weight4,
            Dimension::SocialAct => &mut self.weight5,
            Dimension::MoodFactor => &mut self.weight6,
        };
        *slot = text;
    }

    /// Snapshot of the weights in dimension order
    pub fn weights(&self) -> WeightVector {
        WeightVector::new(Dimension::ALL.map(|d| self.weight(d).to_string()))
    }

    /// Put every weight back to its default, keeping the profile name
    pub fn reset_weights(&mut self) {
        for dimension in Dimension::ALL {
            self.set_weight(dimension, DEFAULT_WEIGHT.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.profile, "default");
        for dimension in Dimension::ALL {
            assert_eq!(settings.weight(dimension), "1");
        }
    }

    #[test]
    fn test_set_weight_targets_one_field() {
        let mut settings = Settings::default();
        settings.set_weight(Dimension::SocialAct, "4".to_string());
        assert_eq!(settings.weight5, "4");
        assert_eq!(settings.weight4, "1");
        assert_eq!(settings.weight6, "1");
    }

    #[test]
    fn test_weights_snapshot_in_order() {
        let mut settings = Settings::default();
        settings.set_weight(Dimension::Work, "2".to_string());
        settings.set_weight(Dimension::MoodFactor, "abc".to_string());
        let weights = settings.weights();
        assert_eq!(weights.text(Dimension::Work), "2");
        assert_eq!(weights.text(Dimension::MoodFactor), "abc");
        assert_eq!(weights.text(Dimension::Study), "1");
    }

    #[test]
    fn test_reset_weights_keeps_profile() {
        let mut settings = Settings {
            profile: "weekdays".to_string(),
            weight1: "9".to_string(),
            weight3: String::new(),
            ..Settings::default()
        };
        settings.reset_weights();
        assert_eq!(settings.profile, "weekdays");
        assert_eq!(settings.weights(), WeightVector::default());
    }

    #[test]
    fn test_settings_serde_roundtrip() {
        let mut settings = Settings::default();
        settings.set_weight(Dimension::Sport, "0.5".to_string());
        settings.set_weight(Dimension::Help, String::new());
        let yaml = serde_saphyr::to_string(&settings).unwrap();
        let parsed: Settings = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(settings, parsed);
    }

    #[test]
    fn test_partial_settings_merge_over_defaults() {
        let yaml = r#"
weight2: "3"
"#;
        let settings: Settings = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(settings.profile, "default");
        assert_eq!(settings.weight2, "3");
        assert_eq!(settings.weight1, "1");
        assert_eq!(settings.weight6, "1");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let yaml = r#"
profile: evenings
weight1: "2"
theme: solarized
"#;
        let settings: Settings = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(settings.profile, "evenings");
        assert_eq!(settings.weight1, "2");
    }
}
