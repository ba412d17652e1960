/// Applicant domain types: the 11-field input snapshot collected by the
/// assessment form, plus the widget range constants the form renders.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Categorical fields
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResidenceType {
    Owned,
    Rented,
    Mortgage,
}

impl ResidenceType {
    pub const ALL: [ResidenceType; 3] = [
        ResidenceType::Owned,
        ResidenceType::Rented,
        ResidenceType::Mortgage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResidenceType::Owned => "Owned",
            ResidenceType::Rented => "Rented",
            ResidenceType::Mortgage => "Mortgage",
        }
    }
}

impl fmt::Display for ResidenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResidenceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Owned" => Ok(ResidenceType::Owned),
            "Rented" => Ok(ResidenceType::Rented),
            "Mortgage" => Ok(ResidenceType::Mortgage),
            other => Err(format!("unknown residence type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanPurpose {
    Education,
    Home,
    Auto,
    Personal,
}

impl LoanPurpose {
    pub const ALL: [LoanPurpose; 4] = [
        LoanPurpose::Education,
        LoanPurpose::Home,
        LoanPurpose::Auto,
        LoanPurpose::Personal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoanPurpose::Education => "Education",
            LoanPurpose::Home => "Home",
            LoanPurpose::Auto => "Auto",
            LoanPurpose::Personal => "Personal",
        }
    }
}

impl fmt::Display for LoanPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoanPurpose {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Education" => Ok(LoanPurpose::Education),
            "Home" => Ok(LoanPurpose::Home),
            "Auto" => Ok(LoanPurpose::Auto),
            "Personal" => Ok(LoanPurpose::Personal),
            other => Err(format!("unknown loan purpose: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanType {
    Unsecured,
    Secured,
}

impl LoanType {
    pub const ALL: [LoanType; 2] = [LoanType::Unsecured, LoanType::Secured];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoanType::Unsecured => "Unsecured",
            LoanType::Secured => "Secured",
        }
    }
}

impl fmt::Display for LoanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoanType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Unsecured" => Ok(LoanType::Unsecured),
            "Secured" => Ok(LoanType::Secured),
            other => Err(format!("unknown loan type: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Applicant input snapshot
// ---------------------------------------------------------------------------

/// One applicant's attributes as entered into the form. Rebuilt from the
/// submitted widget values on every request; never persisted.
///
/// Field ranges are enforced by the form controls (`min`/`max` attributes
/// rendered from the constants below), not by a separate validation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantInput {
    /// Applicant age in years, 18-100
    pub age: u32,
    /// Annual income in rupees
    pub income: u64,
    /// Requested loan principal in rupees
    pub loan_amount: u64,
    /// Loan tenure in months
    pub loan_tenure_months: u32,
    /// Average days-past-due per delinquent period
    pub avg_dpd_per_delinquency: u32,
    /// Percentage of payment periods with a missed or late payment, 0-100
    pub delinquency_ratio: u32,
    /// Percentage of available credit currently in use, 0-100
    pub credit_utilization_ratio: u32,
    /// Number of open loan accounts, 1-4
    pub num_open_accounts: u32,
    pub residence_type: ResidenceType,
    pub loan_purpose: LoanPurpose,
    pub loan_type: LoanType,
}

impl ApplicantInput {
    pub const AGE_MIN: u32 = 18;
    pub const AGE_MAX: u32 = 100;
    pub const PERCENT_MAX: u32 = 100;
    pub const OPEN_ACCOUNTS_MIN: u32 = 1;
    pub const OPEN_ACCOUNTS_MAX: u32 = 4;

    /// Loan amount over income. Returns 0.0 when income is zero so the
    /// metric renders without a division fault.
    pub fn loan_to_income_ratio(&self) -> f64 {
        if self.income == 0 {
            return 0.0;
        }
        self.loan_amount as f64 / self.income as f64
    }
}

impl Default for ApplicantInput {
    /// The values the form is pre-filled with on first load.
    fn default() -> Self {
        Self {
            age: 28,
            income: 1_200_000,
            loan_amount: 2_560_000,
            loan_tenure_months: 36,
            avg_dpd_per_delinquency: 20,
            delinquency_ratio: 30,
            credit_utilization_ratio: 30,
            num_open_accounts: 2,
            residence_type: ResidenceType::Owned,
            loan_purpose: LoanPurpose::Education,
            loan_type: LoanType::Unsecured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loan_to_income_ratio() {
        let input = ApplicantInput::default();
        // 2,560,000 / 1,200,000 = 2.1333...
        assert!((input.loan_to_income_ratio() - 2.133_333_3).abs() < 1e-6);
        assert_eq!(format!("{:.2}", input.loan_to_income_ratio()), "2.13");
    }

    #[test]
    fn test_zero_income_guard() {
        let input = ApplicantInput {
            income: 0,
            ..ApplicantInput::default()
        };
        assert_eq!(input.loan_to_income_ratio(), 0.0);
    }

    #[test]
    fn test_enum_round_trip() {
        for residence in ResidenceType::ALL {
            assert_eq!(residence.to_string().parse::<ResidenceType>(), Ok(residence));
        }
        for purpose in LoanPurpose::ALL {
            assert_eq!(purpose.to_string().parse::<LoanPurpose>(), Ok(purpose));
        }
        for loan_type in LoanType::ALL {
            assert_eq!(loan_type.to_string().parse::<LoanType>(), Ok(loan_type));
        }
        assert!("Squat".parse::<ResidenceType>().is_err());
    }
}
