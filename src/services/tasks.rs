//! Per-day task checklists.

use chrono::NaiveDate;
use serde_json::Value;

use crate::db::HealthStore;
use crate::error::{AppError, AppResult};
use crate::models::task::TaskItem;

/// Checklist every user starts each day with.
pub const DEFAULT_TASKS: [&str; 7] = [
    "💧 Drink 8 glasses of water",
    "🚶 30 min walk or exercise",
    "🥗 Eat a healthy meal",
    "😴 Sleep by 11 PM",
    "🧘 5 min meditation / breathing",
    "📔 Write a diary entry",
    "📵 No screens 1hr before bed",
];

pub fn default_checklist() -> Vec<TaskItem> {
    DEFAULT_TASKS.iter().map(|label| TaskItem::pending(*label)).collect()
}

/// Returns the checklist for `day`, storing the default one on first access.
pub async fn tasks_for_day(
    store: &dyn HealthStore,
    user_id: i64,
    day: NaiveDate,
) -> AppResult<Vec<TaskItem>> {
    store.seed_task_list(user_id, day, &default_checklist()).await
}

/// Replaces the whole checklist for `day`.
pub async fn replace_tasks(
    store: &dyn HealthStore,
    user_id: i64,
    day: NaiveDate,
    items: &[TaskItem],
) -> AppResult<()> {
    store.upsert_task_list(user_id, day, items).await
}

/// Reads `{"tasks": [{label, done}, ...]}`, rejecting any malformed item.
pub fn parse_task_items(body: &Value) -> AppResult<Vec<TaskItem>> {
    let raw = body
        .get("tasks")
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::Validation("tasks must be an array".into()))?;

    raw.iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value::<TaskItem>(item.clone()).map_err(|_| {
                AppError::Validation(format!(
                    "tasks[{i}] must be an object with a string label and a boolean done"
                ))
            })
        })
        .collect()
}
