use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;
use validator::Validate;

use crate::dto::DeleteResponse;
use crate::error::{AppError, AppResult};
use crate::models::diary::{CreateDiaryEntryRequest, DiaryEntry};
use crate::AppState;

pub async fn list_entries(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<Vec<DiaryEntry>>> {
    let entries = state.store.list_diary_entries(user_id).await?;
    Ok(Json(entries))
}

pub async fn add_entry(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    WithRejection(Json(body), _): WithRejection<Json<CreateDiaryEntryRequest>, AppError>,
) -> AppResult<Json<DiaryEntry>> {
    body.validate()?;

    let entry = state
        .store
        .insert_diary_entry(user_id, body.text(), body.mood())
        .await?;

    tracing::info!(user_id, entry_id = entry.id, "Diary entry added");

    Ok(Json(entry))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<i64>,
) -> AppResult<Json<DeleteResponse>> {
    // Idempotent: deleting a missing entry still succeeds
    let deleted = state.store.delete_diary_entry(entry_id).await?;

    if deleted {
        tracing::info!(entry_id, "Diary entry deleted");
    }

    Ok(Json(DeleteResponse {
        success: true,
        deleted,
    }))
}
