//! Borrower data types and the form-input boundary

pub mod profile;

pub use profile::{
    BorrowerProfile, CreditRating, EmploymentStatus, InvalidInput, LoanType, Location,
};
