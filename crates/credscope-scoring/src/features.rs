//! Feature engineering: ApplicantInput → fixed-order model feature vector.

use credscope_common::{ApplicantInput, LoanPurpose, LoanType, ResidenceType};
use serde::{Deserialize, Serialize};

/// Scaling bounds for the numeric features, in their natural units.
/// Inputs outside a bound clamp to the edge of [0, 1].
pub mod bounds {
    pub const AGE: (f64, f64) = (18.0, 100.0);
    pub const TENURE_MONTHS: (f64, f64) = (0.0, 360.0);
    pub const AVG_DPD: (f64, f64) = (0.0, 120.0);
    pub const LOAN_TO_INCOME: (f64, f64) = (0.0, 20.0);
    pub const OPEN_ACCOUNTS: (f64, f64) = (1.0, 4.0);
}

/// Min-max scale into [0, 1]; out-of-range inputs clamp.
pub fn minmax_scale(value: f64, min_val: f64, max_val: f64) -> f64 {
    if (max_val - min_val).abs() < 1e-10 {
        return 0.5; // degenerate case
    }
    ((value - min_val) / (max_val - min_val)).clamp(0.0, 1.0)
}

fn indicator(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}

/// Engineered features in model order. Every component is in [0, 1]:
/// scaled numerics plus one-hot indicators for the categorical fields
/// (reference levels: Owned residence, Auto purpose, Secured loan).
///
/// The order of `as_array` must match `CoefficientVector::as_array`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub age: f64,
    pub loan_to_income: f64,
    pub loan_tenure: f64,
    pub avg_dpd: f64,
    pub delinquency_ratio: f64,
    pub credit_utilization: f64,
    pub open_accounts: f64,
    pub residence_rented: f64,
    pub residence_mortgage: f64,
    pub purpose_education: f64,
    pub purpose_home: f64,
    pub purpose_personal: f64,
    pub loan_type_unsecured: f64,
}

impl FeatureVector {
    /// Engineer the feature vector from the raw applicant fields.
    /// Computes loan-to-income itself (0 when income is 0) so callers
    /// only hand over the 11 raw fields.
    pub fn from_input(input: &ApplicantInput) -> Self {
        Self {
            age: minmax_scale(input.age as f64, bounds::AGE.0, bounds::AGE.1),
            loan_to_income: minmax_scale(
                input.loan_to_income_ratio(),
                bounds::LOAN_TO_INCOME.0,
                bounds::LOAN_TO_INCOME.1,
            ),
            loan_tenure: minmax_scale(
                input.loan_tenure_months as f64,
                bounds::TENURE_MONTHS.0,
                bounds::TENURE_MONTHS.1,
            ),
            avg_dpd: minmax_scale(
                input.avg_dpd_per_delinquency as f64,
                bounds::AVG_DPD.0,
                bounds::AVG_DPD.1,
            ),
            delinquency_ratio: minmax_scale(input.delinquency_ratio as f64, 0.0, 100.0),
            credit_utilization: minmax_scale(input.credit_utilization_ratio as f64, 0.0, 100.0),
            open_accounts: minmax_scale(
                input.num_open_accounts as f64,
                bounds::OPEN_ACCOUNTS.0,
                bounds::OPEN_ACCOUNTS.1,
            ),
            residence_rented: indicator(input.residence_type == ResidenceType::Rented),
            residence_mortgage: indicator(input.residence_type == ResidenceType::Mortgage),
            purpose_education: indicator(input.loan_purpose == LoanPurpose::Education),
            purpose_home: indicator(input.loan_purpose == LoanPurpose::Home),
            purpose_personal: indicator(input.loan_purpose == LoanPurpose::Personal),
            loan_type_unsecured: indicator(input.loan_type == LoanType::Unsecured),
        }
    }

    pub fn as_array(&self) -> [f64; 13] {
        [
            self.age,
            self.loan_to_income,
            self.loan_tenure,
            self.avg_dpd,
            self.delinquency_ratio,
            self.credit_utilization,
            self.open_accounts,
            self.residence_rented,
            self.residence_mortgage,
            self.purpose_education,
            self.purpose_home,
            self.purpose_personal,
            self.loan_type_unsecured,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use credscope_common::ApplicantInput;

    #[test]
    fn test_minmax_scale_clamps() {
        assert_eq!(minmax_scale(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(minmax_scale(15.0, 0.0, 10.0), 1.0);
        assert!((minmax_scale(5.0, 0.0, 10.0) - 0.5).abs() < 1e-12);
        // Degenerate range
        assert_eq!(minmax_scale(3.0, 2.0, 2.0), 0.5);
    }

    #[test]
    fn test_default_input_features() {
        let features = FeatureVector::from_input(&ApplicantInput::default());
        // age 28 over [18, 100] → 10/82
        assert!((features.age - 10.0 / 82.0).abs() < 1e-9);
        // tenure 36 over [0, 360] → 0.1
        assert!((features.loan_tenure - 0.1).abs() < 1e-9);
        assert!((features.delinquency_ratio - 0.30).abs() < 1e-9);
        assert!((features.credit_utilization - 0.30).abs() < 1e-9);
        // Owned / Education / Unsecured
        assert_eq!(features.residence_rented, 0.0);
        assert_eq!(features.residence_mortgage, 0.0);
        assert_eq!(features.purpose_education, 1.0);
        assert_eq!(features.purpose_home, 0.0);
        assert_eq!(features.loan_type_unsecured, 1.0);
    }

    #[test]
    fn test_one_hot_reference_levels() {
        let input = ApplicantInput {
            residence_type: credscope_common::ResidenceType::Owned,
            loan_purpose: credscope_common::LoanPurpose::Auto,
            loan_type: credscope_common::LoanType::Secured,
            ..ApplicantInput::default()
        };
        let features = FeatureVector::from_input(&input);
        // Reference levels carry no indicator at all.
        assert_eq!(features.residence_rented, 0.0);
        assert_eq!(features.residence_mortgage, 0.0);
        assert_eq!(features.purpose_education, 0.0);
        assert_eq!(features.purpose_home, 0.0);
        assert_eq!(features.purpose_personal, 0.0);
        assert_eq!(features.loan_type_unsecured, 0.0);
    }

    #[test]
    fn test_all_components_in_unit_interval() {
        let extreme = ApplicantInput {
            age: 100,
            income: 1,
            loan_amount: u64::MAX / 2,
            loan_tenure_months: 600,
            avg_dpd_per_delinquency: 10_000,
            delinquency_ratio: 100,
            credit_utilization_ratio: 100,
            num_open_accounts: 4,
            ..ApplicantInput::default()
        };
        for component in FeatureVector::from_input(&extreme).as_array() {
            assert!((0.0..=1.0).contains(&component));
        }
    }
}
