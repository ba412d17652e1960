//! JSON scoring endpoint — same collaborator call as the form, no page.

use axum::{extract::State, Json};

use credscope_common::{ApplicantInput, ScoringResult};
use crate::state::SharedState;

pub async fn api_score(
    State(state): State<SharedState>,
    Json(input): Json<ApplicantInput>,
) -> Json<ScoringResult> {
    let result = state.scorer.predict(&input);

    tracing::info!(
        probability = result.probability,
        credit_score = result.credit_score,
        rating = %result.rating,
        "api assessment computed"
    );

    Json(result)
}
