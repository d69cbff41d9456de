//! Storage boundary for profiles, diary entries, streak days and task lists.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::AppResult;
use crate::models::diary::DiaryEntry;
use crate::models::profile::{Assessment, HealthProfile};
use crate::models::task::TaskItem;

/// Row store behind every stateful operation.
///
/// Implementations must make two operations atomic against concurrent callers:
///
/// - [`insert_streak_day`](HealthStore::insert_streak_day) relies on the
///   `(user_id, day)` uniqueness constraint and reports a duplicate as
///   [`AppError::Conflict`](crate::error::AppError::Conflict).
/// - [`seed_task_list`](HealthStore::seed_task_list) is a single
///   insert-if-absent; it never overwrites a checklist that already exists.
#[async_trait]
pub trait HealthStore: Send + Sync {
    /// Persists an assessment and returns it with its assigned id.
    async fn insert_profile(&self, assessment: &Assessment) -> AppResult<HealthProfile>;

    async fn find_profile(&self, id: i64) -> AppResult<Option<HealthProfile>>;

    async fn insert_diary_entry(&self, user_id: i64, text: &str, mood: &str)
        -> AppResult<DiaryEntry>;

    /// Entries for a user, newest first.
    async fn list_diary_entries(&self, user_id: i64) -> AppResult<Vec<DiaryEntry>>;

    /// Returns whether an entry was removed.
    async fn delete_diary_entry(&self, entry_id: i64) -> AppResult<bool>;

    async fn count_diary_entries(&self, user_id: i64) -> AppResult<i64>;

    async fn insert_streak_day(&self, user_id: i64, day: NaiveDate) -> AppResult<()>;

    /// Completed days for a user, newest first.
    async fn list_streak_days(&self, user_id: i64) -> AppResult<Vec<NaiveDate>>;

    async fn count_streak_days(&self, user_id: i64) -> AppResult<i64>;

    /// Stores `default` for `(user_id, day)` unless a checklist exists, then
    /// returns the checklist that is stored.
    async fn seed_task_list(
        &self,
        user_id: i64,
        day: NaiveDate,
        default: &[TaskItem],
    ) -> AppResult<Vec<TaskItem>>;

    /// Replaces the whole checklist for `(user_id, day)`.
    async fn upsert_task_list(&self, user_id: i64, day: NaiveDate, items: &[TaskItem])
        -> AppResult<()>;

    async fn ping(&self) -> AppResult<()>;
}
