use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;

use crate::dto::{ProfileResponse, SubmitSurveyResponse};
use crate::error::{AppError, AppResult};
use crate::models::survey::SurveyRequest;
use crate::services::{diet, scoring};
use crate::AppState;

pub async fn submit_survey(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<SurveyRequest>, AppError>,
) -> AppResult<Json<SubmitSurveyResponse>> {
    let input = body.into_input()?;
    let assessment = scoring::compute_profile(&input);
    let diet_plan = diet::build_diet_plan(&input);

    let profile = state.store.insert_profile(&assessment).await?;

    tracing::info!(
        user_id = profile.id,
        bmi = assessment.bmi,
        risk = assessment.risk,
        "Health profile created"
    );

    Ok(Json(SubmitSurveyResponse {
        user_id: profile.id,
        profile: assessment,
        diet_plan,
    }))
}

pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<ProfileResponse>> {
    let profile = state
        .store
        .find_profile(user_id)
        .await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    // Derived again from the stored answers rather than persisted
    let diet_plan = diet::build_diet_plan(profile.survey());

    Ok(Json(ProfileResponse { profile, diet_plan }))
}
