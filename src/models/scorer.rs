//! The risk scorer: linear score, logistic transform, classification
//!
//! A single stateless computation. Every evaluation either returns a
//! valid [`PredictionResult`] or fails because the input violated the
//! table's schema; there is no other failure mode.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::data::profile::BorrowerProfile;
use crate::models::coefficients::CoefficientTable;
use crate::models::encoding::encode;

/// Errors for the scoring core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    #[error("monthly income must be finite, got {0}")]
    NonFiniteIncome(f64),

    #[error("coefficient table '{version}' has no weight for {field} level '{level}'")]
    UnknownLevel {
        version: String,
        field: &'static str,
        level: String,
    },
}

/// Risk classification at the 0.5 threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    /// Probability of default at or above 0.5
    Risky,
    /// Probability of default below 0.5
    NotRisky,
}

impl RiskLabel {
    /// Classify a default probability. The boundary value 0.5 is Risky.
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 0.5 {
            RiskLabel::Risky
        } else {
            RiskLabel::NotRisky
        }
    }

    /// Whether this is the positive (default) class
    pub fn is_risky(&self) -> bool {
        matches!(self, RiskLabel::Risky)
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLabel::Risky => write!(f, "Risky"),
            RiskLabel::NotRisky => write!(f, "Not Risky"),
        }
    }
}

/// Outcome of a single borrower evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Probability of default in [0, 1]
    pub probability: f64,
    /// Classification at the 0.5 threshold
    pub label: RiskLabel,
}

/// Numerically stable sigmoid
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let exp_z = z.exp();
        exp_z / (1.0 + exp_z)
    }
}

/// Linear score prior to the logistic transform (log-odds)
pub fn decision_function(
    profile: &BorrowerProfile,
    table: &CoefficientTable,
) -> Result<f64, ScoreError> {
    if !profile.monthly_income.is_finite() {
        return Err(ScoreError::NonFiniteIncome(profile.monthly_income));
    }

    let x = encode(profile, table)?;
    Ok(table.intercept + table.weight_vector().dot(&x))
}

/// Score a borrower against one coefficient table.
///
/// Pure and deterministic: identical inputs produce a bit-identical
/// probability.
pub fn score(
    profile: &BorrowerProfile,
    table: &CoefficientTable,
) -> Result<PredictionResult, ScoreError> {
    let z = decision_function(profile, table)?;
    let probability = sigmoid(z);

    Ok(PredictionResult {
        probability,
        label: RiskLabel::from_probability(probability),
    })
}
