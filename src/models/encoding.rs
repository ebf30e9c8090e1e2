//! Indicator encoding of borrower profiles
//!
//! The indicator layout is derived from the coefficient table itself,
//! so the encoding cannot drift from the weights it is dotted with.
//! A profile using a level the table has no weight for fails here.

use ndarray::Array1;
use std::fmt;

use crate::data::profile::BorrowerProfile;
use crate::models::coefficients::{CoefficientTable, LevelWeights};
use crate::models::scorer::ScoreError;

/// 0/1 indicators for one categorical field, in the table's level order
fn indicators<L>(
    field: &'static str,
    weights: &LevelWeights<L>,
    value: L,
    version: &str,
) -> Result<Vec<f64>, ScoreError>
where
    L: Copy + PartialEq + fmt::Display,
{
    if weights.weight(value).is_none() {
        return Err(ScoreError::UnknownLevel {
            version: version.to_string(),
            field,
            level: value.to_string(),
        });
    }

    Ok(weights
        .levels()
        .map(|l| if l == value { 1.0 } else { 0.0 })
        .collect())
}

/// Encode `profile` against `table`'s schema.
///
/// One indicator per non-reference level, income as the final element,
/// aligned with [`CoefficientTable::weight_vector`].
pub fn encode(
    profile: &BorrowerProfile,
    table: &CoefficientTable,
) -> Result<Array1<f64>, ScoreError> {
    let mut x = Vec::with_capacity(table.n_features());

    x.extend(indicators(
        "employment",
        &table.employment,
        profile.employment,
        &table.version,
    )?);
    x.extend(indicators(
        "location",
        &table.location,
        profile.location,
        &table.version,
    )?);
    x.extend(indicators(
        "loan_type",
        &table.loan_type,
        profile.loan_type,
        &table.version,
    )?);
    x.extend(indicators(
        "credit_rating",
        &table.credit_rating,
        profile.credit_rating,
        &table.version,
    )?);
    x.push(profile.monthly_income);

    Ok(Array1::from_vec(x))
}
