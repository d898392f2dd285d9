pub mod dimension;
pub mod engine;
pub mod number;
pub mod validation;
pub mod vectors;

pub use dimension::{Dimension, DIMENSION_COUNT};
pub use engine::{DimensionContribution, Score, ScoreResult, WeightedScoreCalculator};
pub use number::{number_or_zero, parse_number};
pub use validation::check_weights;
pub use vectors::{InputVector, WeightVector, DEFAULT_WEIGHT};
