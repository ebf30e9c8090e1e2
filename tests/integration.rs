//! Integration tests for the loan default risk scorer

use loan_default_risk::{
    // Scoring
    score, CoefficientTable, LevelWeights, RiskLabel, ScoreError,
    // Data
    BorrowerProfile, CreditRating, EmploymentStatus, InvalidInput, LoanType, Location,
    // Utils
    Config,
};

/// A three-category variant table covering Unemployed and Car, the way
/// later dashboard revisions extended the model.
fn extended_table() -> CoefficientTable {
    CoefficientTable {
        version: "extended-v2".to_string(),
        intercept: 5.2,
        income: -0.00001,
        employment: LevelWeights::new(
            EmploymentStatus::Salaried,
            vec![
                (EmploymentStatus::SelfEmployed, 1.1),
                (EmploymentStatus::Unemployed, 2.4),
            ],
        ),
        location: LevelWeights::new(Location::Rural, vec![(Location::Urban, -1.9)]),
        loan_type: LevelWeights::new(
            LoanType::Car,
            vec![(LoanType::Home, -0.4), (LoanType::Personal, 1.7)],
        ),
        credit_rating: LevelWeights::new(CreditRating::Bad, vec![(CreditRating::Good, -2.1)]),
    }
}

mod scoring {
    use super::*;

    #[test]
    fn test_known_borrower_matches_hand_computed_score() {
        let table = CoefficientTable::baseline();
        let profile = BorrowerProfile::new(
            50000.0,
            EmploymentStatus::Salaried,
            Location::Urban,
            LoanType::Personal,
            CreditRating::Bad,
        );

        let result = score(&profile, &table).unwrap();
        assert!((result.probability - 0.99904).abs() < 1e-4);
        assert_eq!(result.label, RiskLabel::Risky);
    }

    #[test]
    fn test_good_rating_and_high_income_scores_not_risky() {
        let table = CoefficientTable::baseline();
        let profile = BorrowerProfile::new(
            400_000.0,
            EmploymentStatus::Salaried,
            Location::Urban,
            LoanType::Home,
            CreditRating::Good,
        );

        let result = score(&profile, &table).unwrap();
        assert!(result.probability < 0.5);
        assert_eq!(result.label, RiskLabel::NotRisky);
    }

    #[test]
    fn test_probability_stays_in_unit_interval_across_grid() {
        let table = CoefficientTable::baseline();
        let employments = [EmploymentStatus::Salaried, EmploymentStatus::SelfEmployed];
        let locations = [Location::Urban, Location::Rural];
        let loans = [LoanType::Home, LoanType::Personal];
        let ratings = [CreditRating::Good, CreditRating::Bad];

        for &employment in &employments {
            for &location in &locations {
                for &loan_type in &loans {
                    for &rating in &ratings {
                        for income in [0.0, 25_000.0, 10_000_000.0] {
                            let profile = BorrowerProfile::new(
                                income, employment, location, loan_type, rating,
                            );
                            let result = score(&profile, &table).unwrap();
                            assert!((0.0..=1.0).contains(&result.probability));
                            assert_eq!(
                                result.label.is_risky(),
                                result.probability >= 0.5
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_repeat_evaluations_are_bit_identical() {
        let table = CoefficientTable::baseline();
        let profile = BorrowerProfile::new(
            87_654.32,
            EmploymentStatus::SelfEmployed,
            Location::Rural,
            LoanType::Personal,
            CreditRating::Good,
        );

        let first = score(&profile, &table).unwrap();
        let second = score(&profile, &table).unwrap();
        assert_eq!(first.probability.to_bits(), second.probability.to_bits());
    }
}

mod versioning {
    use super::*;

    #[test]
    fn test_extended_table_accepts_all_levels() {
        let table = extended_table();
        let profile = BorrowerProfile::new(
            20_000.0,
            EmploymentStatus::Unemployed,
            Location::Urban,
            LoanType::Car,
            CreditRating::Bad,
        );

        let result = score(&profile, &table).unwrap();
        assert!((0.0..=1.0).contains(&result.probability));
    }

    #[test]
    fn test_baseline_table_rejects_extended_levels() {
        // A profile encoded for the extended schema must not combine
        // with the baseline weights
        let table = CoefficientTable::baseline();

        let unemployed = BorrowerProfile::new(
            20_000.0,
            EmploymentStatus::Unemployed,
            Location::Urban,
            LoanType::Home,
            CreditRating::Bad,
        );
        assert!(matches!(
            score(&unemployed, &table).unwrap_err(),
            ScoreError::UnknownLevel { field: "employment", .. }
        ));

        let car_loan = BorrowerProfile::new(
            20_000.0,
            EmploymentStatus::Salaried,
            Location::Urban,
            LoanType::Car,
            CreditRating::Bad,
        );
        assert!(matches!(
            score(&car_loan, &table).unwrap_err(),
            ScoreError::UnknownLevel { field: "loan_type", .. }
        ));
    }

    #[test]
    fn test_tables_with_different_references_disagree() {
        // Same profile, different model versions: results differ, which
        // is why tables are never interchangeable
        let baseline = CoefficientTable::baseline();
        let extended = extended_table();
        let profile = BorrowerProfile::new(
            50_000.0,
            EmploymentStatus::SelfEmployed,
            Location::Urban,
            LoanType::Personal,
            CreditRating::Good,
        );

        let a = score(&profile, &baseline).unwrap();
        let b = score(&profile, &extended).unwrap();
        assert_ne!(a.probability, b.probability);
    }
}

mod boundary {
    use super::*;

    #[test]
    fn test_form_values_parse_into_profile() {
        let profile =
            BorrowerProfile::from_form("65000", "Self Employed", "Rural", "Personal", "Bad")
                .unwrap();

        assert_eq!(profile.monthly_income, 65000.0);
        assert_eq!(profile.employment, EmploymentStatus::SelfEmployed);
    }

    #[test]
    fn test_parsed_profile_scores_like_typed_profile() {
        let table = CoefficientTable::baseline();
        let parsed =
            BorrowerProfile::from_form("50000", "Salaried", "Urban", "Personal", "Bad").unwrap();
        let typed = BorrowerProfile::new(
            50000.0,
            EmploymentStatus::Salaried,
            Location::Urban,
            LoanType::Personal,
            CreditRating::Bad,
        );

        let a = score(&parsed, &table).unwrap();
        let b = score(&typed, &table).unwrap();
        assert_eq!(a.probability.to_bits(), b.probability.to_bits());
    }

    #[test]
    fn test_junk_form_values_are_invalid_input() {
        assert!(matches!(
            BorrowerProfile::from_form("abc", "Salaried", "Urban", "Home", "Good").unwrap_err(),
            InvalidInput::Income(_)
        ));
        assert!(matches!(
            BorrowerProfile::from_form("100", "Salaried", "Moon", "Home", "Good").unwrap_err(),
            InvalidInput::Location(_)
        ));
        assert!(matches!(
            BorrowerProfile::from_form("100", "Salaried", "Urban", "Boat", "Good").unwrap_err(),
            InvalidInput::LoanType(_)
        ));
    }
}

mod config {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_scores_with_baseline() {
        let config = Config::default();
        let table = config.coefficient_table().unwrap();
        assert_eq!(table.version, "baseline-v1");
    }

    #[test]
    fn test_custom_table_file_is_used_end_to_end() {
        let file = NamedTempFile::new().unwrap();
        extended_table().save_to_file(file.path()).unwrap();

        let loaded = CoefficientTable::from_file(file.path()).unwrap();
        assert_eq!(loaded, extended_table());

        let profile = BorrowerProfile::new(
            20_000.0,
            EmploymentStatus::Unemployed,
            Location::Rural,
            LoanType::Car,
            CreditRating::Bad,
        );
        assert!(score(&profile, &loaded).is_ok());
    }
}
