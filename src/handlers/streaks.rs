use axum::{
    extract::{Path, State},
    Json,
};

use crate::dto::MessageResponse;
use crate::error::AppResult;
use crate::models::streak::StreakView;
use crate::services::streaks;
use crate::AppState;

pub async fn get_streak(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<StreakView>> {
    let today = state.clock.today();
    let view = streaks::streak_view(state.store.as_ref(), user_id, today).await?;
    Ok(Json(view))
}

pub async fn complete_day(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    let today = state.clock.today();
    let outcome = streaks::record_completion(state.store.as_ref(), user_id, today).await?;

    tracing::info!(
        user_id,
        day = %today,
        already_marked = outcome.already_marked(),
        "Day completion recorded"
    );

    Ok(Json(MessageResponse {
        message: outcome.message().to_string(),
        already_marked: outcome.already_marked(),
    }))
}
