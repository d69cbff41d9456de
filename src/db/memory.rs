use std::collections::{BTreeMap, BTreeSet, HashMap};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::Mutex;

use super::store::HealthStore;
use crate::error::{AppError, AppResult};
use crate::models::diary::DiaryEntry;
use crate::models::profile::{Assessment, HealthProfile};
use crate::models::task::TaskItem;

/// In-process store used when no database is configured.
///
/// One lock guards all collections, so every call is atomic.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    last_profile_id: i64,
    profiles: BTreeMap<i64, HealthProfile>,
    last_entry_id: i64,
    diary: BTreeMap<i64, DiaryEntry>,
    streak_days: BTreeSet<(i64, NaiveDate)>,
    task_lists: HashMap<(i64, NaiveDate), Vec<TaskItem>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HealthStore for MemoryStore {
    async fn insert_profile(&self, assessment: &Assessment) -> AppResult<HealthProfile> {
        let mut inner = self.inner.lock().await;
        inner.last_profile_id += 1;
        let profile = HealthProfile {
            id: inner.last_profile_id,
            assessment: assessment.clone(),
            created_at: Utc::now(),
        };
        inner.profiles.insert(profile.id, profile.clone());
        Ok(profile)
    }

    async fn find_profile(&self, id: i64) -> AppResult<Option<HealthProfile>> {
        Ok(self.inner.lock().await.profiles.get(&id).cloned())
    }

    async fn insert_diary_entry(
        &self,
        user_id: i64,
        text: &str,
        mood: &str,
    ) -> AppResult<DiaryEntry> {
        let mut inner = self.inner.lock().await;
        inner.last_entry_id += 1;
        let entry = DiaryEntry {
            id: inner.last_entry_id,
            user_id,
            text: text.to_string(),
            mood: mood.to_string(),
            created_at: Utc::now(),
        };
        inner.diary.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn list_diary_entries(&self, user_id: i64) -> AppResult<Vec<DiaryEntry>> {
        let inner = self.inner.lock().await;
        let mut entries: Vec<DiaryEntry> = inner
            .diary
            .values()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(entries)
    }

    async fn delete_diary_entry(&self, entry_id: i64) -> AppResult<bool> {
        Ok(self.inner.lock().await.diary.remove(&entry_id).is_some())
    }

    async fn count_diary_entries(&self, user_id: i64) -> AppResult<i64> {
        let inner = self.inner.lock().await;
        Ok(inner.diary.values().filter(|e| e.user_id == user_id).count() as i64)
    }

    async fn insert_streak_day(&self, user_id: i64, day: NaiveDate) -> AppResult<()> {
        if self.inner.lock().await.streak_days.insert((user_id, day)) {
            Ok(())
        } else {
            Err(AppError::Conflict(format!(
                "Day {day} already recorded for user {user_id}"
            )))
        }
    }

    async fn list_streak_days(&self, user_id: i64) -> AppResult<Vec<NaiveDate>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .streak_days
            .range((user_id, NaiveDate::MIN)..=(user_id, NaiveDate::MAX))
            .rev()
            .map(|(_, day)| *day)
            .collect())
    }

    async fn count_streak_days(&self, user_id: i64) -> AppResult<i64> {
        let inner = self.inner.lock().await;
        Ok(inner
            .streak_days
            .range((user_id, NaiveDate::MIN)..=(user_id, NaiveDate::MAX))
            .count() as i64)
    }

    async fn seed_task_list(
        &self,
        user_id: i64,
        day: NaiveDate,
        default: &[TaskItem],
    ) -> AppResult<Vec<TaskItem>> {
        let mut inner = self.inner.lock().await;
        Ok(inner
            .task_lists
            .entry((user_id, day))
            .or_insert_with(|| default.to_vec())
            .clone())
    }

    async fn upsert_task_list(
        &self,
        user_id: i64,
        day: NaiveDate,
        items: &[TaskItem],
    ) -> AppResult<()> {
        self.inner
            .lock()
            .await
            .task_lists
            .insert((user_id, day), items.to_vec());
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
