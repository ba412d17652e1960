/// Scoring output types shared between the scoring engine and the web layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical risk label derived from the credit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskRating {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl RiskRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskRating::Poor => "Poor",
            RiskRating::Fair => "Fair",
            RiskRating::Good => "Good",
            RiskRating::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for RiskRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one scoring call. Lives for the duration of the request that
/// computed it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    /// Probability of default in [0, 1]
    pub probability: f64,
    /// Conventional 300-900 band
    pub credit_score: u32,
    pub rating: RiskRating,
}
