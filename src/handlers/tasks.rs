use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;
use serde_json::Value;

use crate::dto::{SuccessResponse, TasksResponse};
use crate::error::{AppError, AppResult};
use crate::services::tasks;
use crate::AppState;

pub async fn get_tasks(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<TasksResponse>> {
    let day = state.clock.today();
    let tasks = tasks::tasks_for_day(state.store.as_ref(), user_id, day).await?;
    Ok(Json(TasksResponse { tasks, day }))
}

pub async fn replace_tasks(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    WithRejection(Json(body), _): WithRejection<Json<Value>, AppError>,
) -> AppResult<Json<SuccessResponse>> {
    let items = tasks::parse_task_items(&body)?;
    let day = state.clock.today();

    tasks::replace_tasks(state.store.as_ref(), user_id, day, &items).await?;

    tracing::info!(user_id, day = %day, count = items.len(), "Task checklist replaced");

    Ok(Json(SuccessResponse::ok()))
}
