//! # VitalCore — Response DTOs
//!
//! JSON shapes returned by the handlers that are not plain model types.
//! Request bodies live next to their models (`SurveyRequest`,
//! `CreateDiaryEntryRequest`); the task body is read as raw JSON so each item
//! can be checked individually.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::profile::{Assessment, HealthProfile};
use crate::models::task::TaskItem;
use crate::services::diet::DietPlan;

/// Standard success flag
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// DELETE /api/diary/entry/:entry_id
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    /// False when the entry did not exist.
    pub deleted: bool,
}

/// POST /api/calculate
#[derive(Debug, Serialize)]
pub struct SubmitSurveyResponse {
    pub user_id: i64,
    pub profile: Assessment,
    pub diet_plan: DietPlan,
}

/// GET /api/profile/:user_id
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: HealthProfile,
    pub diet_plan: DietPlan,
}

/// POST /api/streak/:user_id/complete
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
    pub already_marked: bool,
}

/// GET /api/tasks/:user_id
#[derive(Debug, Serialize)]
pub struct TasksResponse {
    pub tasks: Vec<TaskItem>,
    pub day: NaiveDate,
}

/// GET /api/stats/:user_id
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub diary_entries: i64,
    pub total_streak_days: i64,
    /// `None` when the user has no profile.
    pub bmi: Option<f64>,
    pub risk: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_without_profile_serializes_nulls() {
        let resp = StatsResponse {
            diary_entries: 2,
            total_streak_days: 0,
            bmi: None,
            risk: None,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["diary_entries"], 2);
        assert!(json["bmi"].is_null());
        assert!(json["risk"].is_null());
    }

    #[test]
    fn test_tasks_day_is_iso_date() {
        let resp = TasksResponse {
            tasks: vec![],
            day: NaiveDate::from_ymd_opt(2026, 2, 9).unwrap(),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["day"], "2026-02-09");
    }
}
