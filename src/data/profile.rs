//! Borrower profile and categorical domains
//!
//! A profile is built fresh for every evaluation, either from typed
//! values or from raw form strings via [`BorrowerProfile::from_form`].
//! Parsing is the validation boundary: everything past it is assumed
//! to be a well-formed profile.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors for raw form values that fail to parse into a profile
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInput {
    #[error("'{0}' is not a valid employment status (expected Salaried, Self Employed or Unemployed)")]
    Employment(String),

    #[error("'{0}' is not a valid location (expected Urban or Rural)")]
    Location(String),

    #[error("'{0}' is not a valid loan type (expected Home, Personal or Car)")]
    LoanType(String),

    #[error("'{0}' is not a valid credit rating (expected Good or Bad)")]
    CreditRating(String),

    #[error("'{0}' is not a valid number for monthly income")]
    Income(String),

    #[error("monthly income must be finite, got {0}")]
    NonFiniteIncome(f64),
}

/// Employment status of the borrower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentStatus {
    Salaried,
    SelfEmployed,
    Unemployed,
}

/// Whether the borrower lives in an urban or rural area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    Urban,
    Rural,
}

/// Kind of loan being applied for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanType {
    Home,
    Personal,
    Car,
}

/// Bureau credit rating bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditRating {
    Good,
    Bad,
}

/// Normalize a form label for matching: trim, lowercase, strip separators.
fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .replace([' ', '-', '_'], "")
}

impl FromStr for EmploymentStatus {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "salaried" => Ok(Self::Salaried),
            "selfemployed" => Ok(Self::SelfEmployed),
            "unemployed" => Ok(Self::Unemployed),
            _ => Err(InvalidInput::Employment(s.to_string())),
        }
    }
}

impl FromStr for Location {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "urban" => Ok(Self::Urban),
            "rural" => Ok(Self::Rural),
            _ => Err(InvalidInput::Location(s.to_string())),
        }
    }
}

impl FromStr for LoanType {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "home" => Ok(Self::Home),
            "personal" => Ok(Self::Personal),
            "car" => Ok(Self::Car),
            _ => Err(InvalidInput::LoanType(s.to_string())),
        }
    }
}

impl FromStr for CreditRating {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "good" => Ok(Self::Good),
            "bad" => Ok(Self::Bad),
            _ => Err(InvalidInput::CreditRating(s.to_string())),
        }
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Salaried => write!(f, "Salaried"),
            Self::SelfEmployed => write!(f, "Self Employed"),
            Self::Unemployed => write!(f, "Unemployed"),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Urban => write!(f, "Urban"),
            Self::Rural => write!(f, "Rural"),
        }
    }
}

impl fmt::Display for LoanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "Home"),
            Self::Personal => write!(f, "Personal"),
            Self::Car => write!(f, "Car"),
        }
    }
}

impl fmt::Display for CreditRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Good => write!(f, "Good"),
            Self::Bad => write!(f, "Bad"),
        }
    }
}

/// Borrower attributes collected for a single evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorrowerProfile {
    /// Monthly income in the lender's currency
    pub monthly_income: f64,
    /// Employment status
    pub employment: EmploymentStatus,
    /// Urban or rural residence
    pub location: Location,
    /// Kind of loan applied for
    pub loan_type: LoanType,
    /// Credit rating bucket
    pub credit_rating: CreditRating,
}

impl BorrowerProfile {
    /// Create a profile from already-typed values
    pub fn new(
        monthly_income: f64,
        employment: EmploymentStatus,
        location: Location,
        loan_type: LoanType,
        credit_rating: CreditRating,
    ) -> Self {
        Self {
            monthly_income,
            employment,
            location,
            loan_type,
            credit_rating,
        }
    }

    /// Parse raw form values into a profile.
    ///
    /// Accepts the labels the input forms use ("Self Employed", "Urban",
    /// ...) case-insensitively. Income must parse to a finite number.
    pub fn from_form(
        income: &str,
        employment: &str,
        location: &str,
        loan_type: &str,
        credit_rating: &str,
    ) -> Result<Self, InvalidInput> {
        let monthly_income: f64 = income
            .trim()
            .parse()
            .map_err(|_| InvalidInput::Income(income.to_string()))?;

        if !monthly_income.is_finite() {
            return Err(InvalidInput::NonFiniteIncome(monthly_income));
        }

        Ok(Self {
            monthly_income,
            employment: employment.parse()?,
            location: location.parse()?,
            loan_type: loan_type.parse()?,
            credit_rating: credit_rating.parse()?,
        })
    }
}
