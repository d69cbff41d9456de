use axum::{
    extract::{Path, State},
    Json,
};

use crate::dto::StatsResponse;
use crate::error::AppResult;
use crate::AppState;

pub async fn get_stats(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<StatsResponse>> {
    let diary_entries = state.store.count_diary_entries(user_id).await?;
    let total_streak_days = state.store.count_streak_days(user_id).await?;
    let profile = state.store.find_profile(user_id).await?;

    Ok(Json(StatsResponse {
        diary_entries,
        total_streak_days,
        bmi: profile.as_ref().map(|p| p.assessment.bmi),
        risk: profile.as_ref().map(|p| p.assessment.risk),
    }))
}
