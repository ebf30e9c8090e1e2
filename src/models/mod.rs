//! Scoring model: coefficient tables, indicator encoding, risk scorer

pub mod coefficients;
pub mod encoding;
pub mod scorer;

pub use coefficients::{CoefficientTable, LevelWeights};
pub use encoding::encode;
pub use scorer::{decision_function, score, sigmoid, PredictionResult, RiskLabel, ScoreError};
