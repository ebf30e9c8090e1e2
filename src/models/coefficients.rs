//! Versioned logistic regression coefficient tables
//!
//! Each historical model variant ships as a named table value rather
//! than a code fork. A table fixes both the weights and the encoding
//! schema: the reference level of every categorical field and the set
//! of levels a weight exists for. A table and a profile from different
//! schemas must never be combined; the encoder surfaces any mismatch
//! as an error instead of silently mixing versions.

use anyhow::{Context, Result};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::data::profile::{CreditRating, EmploymentStatus, LoanType, Location};

/// Reference level plus per-level weights for one categorical field.
///
/// The reference level's indicator is implicitly zero, so its weight
/// is zero. A level with no entry is outside this table's schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelWeights<L> {
    /// Level whose indicator is implicitly zero
    pub reference: L,
    /// Weights for the non-reference levels, in encoding order
    pub weights: Vec<(L, f64)>,
}

impl<L: Copy + PartialEq> LevelWeights<L> {
    /// Create level weights with the given reference level
    pub fn new(reference: L, weights: Vec<(L, f64)>) -> Self {
        Self { reference, weights }
    }

    /// Weight for `level`: zero for the reference, `None` for a level
    /// this table has no coefficient for
    pub fn weight(&self, level: L) -> Option<f64> {
        if level == self.reference {
            return Some(0.0);
        }
        self.weights
            .iter()
            .find(|(l, _)| *l == level)
            .map(|(_, w)| *w)
    }

    /// Levels carrying an explicit weight (everything but the reference)
    pub fn levels(&self) -> impl Iterator<Item = L> + '_ {
        self.weights.iter().map(|(l, _)| *l)
    }
}

/// A complete, immutable coefficient table for one model version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientTable {
    /// Model version identifier, e.g. "baseline-v1"
    pub version: String,
    /// Intercept of the linear score
    pub intercept: f64,
    /// Weight applied to monthly income
    pub income: f64,
    /// Employment status weights
    pub employment: LevelWeights<EmploymentStatus>,
    /// Location weights
    pub location: LevelWeights<Location>,
    /// Loan type weights
    pub loan_type: LevelWeights<LoanType>,
    /// Credit rating weights
    pub credit_rating: LevelWeights<CreditRating>,
}

impl CoefficientTable {
    /// The baseline estimates shipped with the crate.
    ///
    /// Reference levels: Salaried, Rural, Home, Bad.
    pub fn baseline() -> Self {
        Self {
            version: "baseline-v1".to_string(),
            intercept: 7.8038,
            income: -0.0000117906553604,
            employment: LevelWeights::new(
                EmploymentStatus::Salaried,
                vec![(EmploymentStatus::SelfEmployed, 1.2768)],
            ),
            location: LevelWeights::new(Location::Rural, vec![(Location::Urban, -2.4431)]),
            loan_type: LevelWeights::new(LoanType::Home, vec![(LoanType::Personal, 2.1736)]),
            credit_rating: LevelWeights::new(
                CreditRating::Bad,
                vec![(CreditRating::Good, -2.5169)],
            ),
        }
    }

    /// Load a coefficient table from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read coefficient table: {:?}", path.as_ref()))?;

        let table: CoefficientTable =
            toml::from_str(&content).context("Failed to parse coefficient table")?;

        Ok(table)
    }

    /// Save a coefficient table to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize table")?;

        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write coefficient table: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Number of encoded features (indicators plus the income term)
    pub fn n_features(&self) -> usize {
        self.employment.weights.len()
            + self.location.weights.len()
            + self.loan_type.weights.len()
            + self.credit_rating.weights.len()
            + 1
    }

    /// Feature names in encoding order, income last
    pub fn feature_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.n_features());
        names.extend(self.employment.levels().map(|l| format!("employment[{}]", l)));
        names.extend(self.location.levels().map(|l| format!("location[{}]", l)));
        names.extend(self.loan_type.levels().map(|l| format!("loan_type[{}]", l)));
        names.extend(
            self.credit_rating
                .levels()
                .map(|l| format!("credit_rating[{}]", l)),
        );
        names.push("monthly_income".to_string());
        names
    }

    /// Weight vector aligned with [`CoefficientTable::feature_names`]
    pub fn weight_vector(&self) -> Array1<f64> {
        let mut w = Vec::with_capacity(self.n_features());
        w.extend(self.employment.weights.iter().map(|(_, c)| *c));
        w.extend(self.location.weights.iter().map(|(_, c)| *c));
        w.extend(self.loan_type.weights.iter().map(|(_, c)| *c));
        w.extend(self.credit_rating.weights.iter().map(|(_, c)| *c));
        w.push(self.income);
        Array1::from_vec(w)
    }

    /// Human-readable table summary with odds ratios
    pub fn summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Coefficient table '{}'\n", self.version));
        s.push_str("===========================\n\n");
        s.push_str(&format!("Intercept: {:.6}\n\n", self.intercept));
        s.push_str("Coefficients (log-odds):\n");

        for (name, &c) in self.feature_names().iter().zip(self.weight_vector().iter()) {
            let odds_ratio = c.exp();
            s.push_str(&format!(
                "  {:28}: {:>14.10} (OR: {:.4})\n",
                name, c, odds_ratio
            ));
        }

        s.push_str(&format!(
            "\nReference levels: {} / {} / {} / {}\n",
            self.employment.reference,
            self.location.reference,
            self.loan_type.reference,
            self.credit_rating.reference,
        ));

        s
    }
}

impl fmt::Display for CoefficientTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} features)", self.version, self.n_features())
    }
}
