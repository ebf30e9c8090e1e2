//! # Loan Default Risk
//!
//! This library computes the probability that a borrower defaults on a
//! loan using fixed logistic regression coefficient tables, and
//! classifies the borrower as risky or not at the 0.5 threshold.
//!
//! ## Modules
//!
//! - `data` - Borrower profile types and the form-input boundary
//! - `models` - Coefficient tables, indicator encoding, the risk scorer
//! - `utils` - Configuration and logging

pub mod data;
pub mod models;
pub mod utils;

pub use data::{BorrowerProfile, CreditRating, EmploymentStatus, InvalidInput, LoanType, Location};
pub use models::{
    score, CoefficientTable, LevelWeights, PredictionResult, RiskLabel, ScoreError,
};
pub use utils::{load_config, setup_logging, Config};
