//! credscope-scoring — Credit risk scoring engine.
//!
//! Maps an [`ApplicantInput`] to a [`ScoringResult`] in three steps:
//! feature engineering, a logistic default-probability model, and the
//! probability → score → rating conversion. One synchronous call per
//! assessment; deterministic, no caching or batching.

pub mod features;
pub mod model;

use credscope_common::{ApplicantInput, RiskRating, ScoringResult};

use crate::features::FeatureVector;
use crate::model::CoefficientVector;

/// Bottom of the conventional credit score band.
pub const SCORE_FLOOR: u32 = 300;
/// Top of the conventional credit score band.
pub const SCORE_CEILING: u32 = 900;

/// Scoring engine: fixed coefficients applied to engineered features.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    coefficients: CoefficientVector,
}

impl Scorer {
    pub fn new(coefficients: CoefficientVector) -> Self {
        Self { coefficients }
    }

    /// Score one applicant. This is the whole collaborator contract:
    /// the 11 raw fields in, the probability / score / rating triple out.
    pub fn predict(&self, input: &ApplicantInput) -> ScoringResult {
        let features = FeatureVector::from_input(input);
        let probability = self.coefficients.probability_of_default(&features);
        let credit_score = score_from_probability(probability);
        let rating = rating_from_score(credit_score);

        tracing::debug!(
            probability,
            credit_score,
            rating = %rating,
            "scored applicant"
        );

        ScoringResult {
            probability,
            credit_score,
            rating,
        }
    }
}

/// Map a default probability onto the 300-900 band: a certain default
/// scores 300, a certain repayment 900.
pub fn score_from_probability(probability: f64) -> u32 {
    let p = probability.clamp(0.0, 1.0);
    SCORE_FLOOR + ((1.0 - p) * (SCORE_CEILING - SCORE_FLOOR) as f64).round() as u32
}

/// Rating bands over the credit score.
pub fn rating_from_score(score: u32) -> RiskRating {
    match score {
        0..=499 => RiskRating::Poor,
        500..=649 => RiskRating::Fair,
        650..=749 => RiskRating::Good,
        _ => RiskRating::Excellent,
    }
}
