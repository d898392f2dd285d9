use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of scored dimensions. Fixed; every vector in this crate has this length.
pub const DIMENSION_COUNT: usize = 6;

/// One of the fixed categories a day is scored on.
///
/// The order of the variants is the order of every weight and input vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Work,
    Sport,
    Study,
    Help,
    SocialAct,
    MoodFactor,
}

impl Dimension {
    pub const ALL: [Dimension; DIMENSION_COUNT] = [
        Dimension::Work,
        Dimension::Sport,
        Dimension::Study,
        Dimension::Help,
        Dimension::SocialAct,
        Dimension::MoodFactor,
    ];

    /// Stable position of this dimension (0..5)
    pub fn index(self) -> usize {
        match self {
            Dimension::Work => 0,
            Dimension::Sport => 1,
            Dimension::Study => 2,
            Dimension::Help => 3,
            Dimension::SocialAct => 4,
            Dimension::MoodFactor => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Dimension> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable label, as shown in tables and the TUI
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Work => "Work",
            Dimension::Sport => "Sport",
            Dimension::Study => "Study",
            Dimension::Help => "Help",
            Dimension::SocialAct => "Social Act",
            Dimension::MoodFactor => "Mood Factor",
        }
    }

    /// Key of this dimension's weight in the settings file (`weight1`..`weight6`)
    pub fn settings_key(self) -> &'static str {
        match self {
            Dimension::Work => "weight1",
            Dimension::Sport => "weight2",
            Dimension::Study => "weight3",
            Dimension::Help => "weight4",
            Dimension::SocialAct => "weight5",
            Dimension::MoodFactor => "weight6",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse a dimension from user text.
///
/// Accepts the label in any case with spaces, dashes or underscores
/// ("social act", "Social-Act", "social_act", "socialact"), the 1-based
/// position ("5") or the settings key ("weight5").
impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let position = normalized
            .strip_prefix("weight")
            .unwrap_or(&normalized)
            .parse::<usize>()
            .ok();
        if let Some(pos) = position {
            return pos
                .checked_sub(1)
                .and_then(Dimension::from_index)
                .ok_or_else(|| format!("position must be between 1 and {}, got {}", DIMENSION_COUNT, pos));
        }

        Dimension::ALL
            .iter()
            .copied()
            .find(|d| d.label().replace(' ', "").eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| {
                let names: Vec<&str> = Dimension::ALL.iter().map(|d| d.label()).collect();
                format!("unknown dimension '{}' (expected one of: {})", s.trim(), names.join(", "))
            })
    }
}
