//! Logistic model for the default-probability estimate.

use serde::{Deserialize, Serialize};

use crate::features::FeatureVector;

/// One coefficient per feature, in `FeatureVector::as_array` order, plus
/// the intercept. The defaults are expert priors standing in for the
/// unpublished training artifacts; a trained model drops in by
/// constructing this struct with its own values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientVector {
    pub intercept: f64,
    /// Older applicants default less
    pub age: f64,
    /// Loan size relative to income is the dominant affordability signal
    pub loan_to_income: f64,
    pub loan_tenure: f64,
    /// Longer days-past-due spells indicate deeper distress
    pub avg_dpd: f64,
    pub delinquency_ratio: f64,
    pub credit_utilization: f64,
    pub open_accounts: f64,
    pub residence_rented: f64,
    pub residence_mortgage: f64,
    pub purpose_education: f64,
    pub purpose_home: f64,
    pub purpose_personal: f64,
    /// Unsecured lending carries no collateral backstop
    pub loan_type_unsecured: f64,
}

impl Default for CoefficientVector {
    fn default() -> Self {
        Self {
            intercept: -2.40,
            age: -0.60,
            loan_to_income: 1.80,
            loan_tenure: 0.40,
            avg_dpd: 1.10,
            delinquency_ratio: 1.60,
            credit_utilization: 1.30,
            open_accounts: 0.50,
            residence_rented: 0.35,
            residence_mortgage: 0.15,
            purpose_education: 0.10,
            purpose_home: -0.20,
            purpose_personal: 0.25,
            loan_type_unsecured: 0.55,
        }
    }
}

impl CoefficientVector {
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

    /// p = sigmoid(intercept + w·x)
    pub fn probability_of_default(&self, features: &FeatureVector) -> f64 {
        let z: f64 = self.intercept
            + features
                .as_array()
                .iter()
                .zip(self.as_array().iter())
                .map(|(x, w)| x * w)
                .sum::<f64>();
        sigmoid(z)
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use credscope_common::ApplicantInput;

    #[test]
    fn test_sigmoid_midpoint_and_tails() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
        assert!(sigmoid(20.0) > 0.999);
        assert!(sigmoid(-20.0) < 0.001);
    }

    #[test]
    fn test_probability_stays_in_unit_interval() {
        let model = CoefficientVector::default();
        let worst = ApplicantInput {
            age: 18,
            income: 1,
            loan_amount: u64::MAX / 2,
            loan_tenure_months: 360,
            avg_dpd_per_delinquency: 120,
            delinquency_ratio: 100,
            credit_utilization_ratio: 100,
            num_open_accounts: 4,
            residence_type: credscope_common::ResidenceType::Rented,
            loan_purpose: credscope_common::LoanPurpose::Personal,
            loan_type: credscope_common::LoanType::Unsecured,
        };
        let best = ApplicantInput {
            age: 100,
            income: 10_000_000,
            loan_amount: 0,
            loan_tenure_months: 0,
            avg_dpd_per_delinquency: 0,
            delinquency_ratio: 0,
            credit_utilization_ratio: 0,
            num_open_accounts: 1,
            residence_type: credscope_common::ResidenceType::Owned,
            loan_purpose: credscope_common::LoanPurpose::Home,
            loan_type: credscope_common::LoanType::Secured,
        };
        for input in [worst, best] {
            let p = model.probability_of_default(&FeatureVector::from_input(&input));
            assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn test_delinquency_pushes_risk_up() {
        let model = CoefficientVector::default();
        let low = ApplicantInput {
            delinquency_ratio: 5,
            ..ApplicantInput::default()
        };
        let high = ApplicantInput {
            delinquency_ratio: 95,
            ..ApplicantInput::default()
        };
        let p_low = model.probability_of_default(&FeatureVector::from_input(&low));
        let p_high = model.probability_of_default(&FeatureVector::from_input(&high));
        assert!(p_high > p_low);
    }

    #[test]
    fn test_age_pushes_risk_down() {
        let model = CoefficientVector::default();
        let young = ApplicantInput {
            age: 21,
            ..ApplicantInput::default()
        };
        let old = ApplicantInput {
            age: 65,
            ..ApplicantInput::default()
        };
        let p_young = model.probability_of_default(&FeatureVector::from_input(&young));
        let p_old = model.probability_of_default(&FeatureVector::from_input(&old));
        assert!(p_old < p_young);
    }
}
