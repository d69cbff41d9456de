use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};

use super::store::HealthStore;
use crate::error::{AppError, AppResult};
use crate::models::diary::DiaryEntry;
use crate::models::profile::{Assessment, DiseaseRisk, HealthProfile};
use crate::models::survey::{FamilyHistory, Habit, SurveyInput};
use crate::models::task::TaskItem;

/// PostgreSQL-backed store. Schema lives in `migrations/`.
#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromRow)]
struct ProfileRow {
    id: i64,
    name: String,
    age: i32,
    gender: String,
    weight: f64,
    height: f64,
    country: String,
    pa: i32,
    stress: i32,
    water: f64,
    sleep: i32,
    family: Json<Vec<FamilyHistory>>,
    habits: Json<Vec<Habit>>,
    bmi: f64,
    risk: i32,
    diseases: Json<Vec<DiseaseRisk>>,
    created_at: DateTime<Utc>,
}

impl From<ProfileRow> for HealthProfile {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: row.id,
            assessment: Assessment {
                input: SurveyInput {
                    name: row.name,
                    age: row.age,
                    gender: row.gender,
                    weight: row.weight,
                    height: row.height,
                    country: row.country,
                    pa: row.pa,
                    stress: row.stress,
                    water: row.water,
                    sleep: row.sleep,
                    family: row.family.0,
                    habits: row.habits.0,
                },
                bmi: row.bmi,
                risk: row.risk,
                diseases: row.diseases.0,
            },
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl HealthStore for PgStore {
    async fn insert_profile(&self, assessment: &Assessment) -> AppResult<HealthProfile> {
        let input = &assessment.input;
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            INSERT INTO profiles
                (name, age, gender, weight, height, country, pa, stress, water, sleep,
                 family, habits, bmi, risk, diseases)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING *
            "#,
        )
        .bind(&input.name)
        .bind(input.age)
        .bind(&input.gender)
        .bind(input.weight)
        .bind(input.height)
        .bind(&input.country)
        .bind(input.pa)
        .bind(input.stress)
        .bind(input.water)
        .bind(input.sleep)
        .bind(Json(&input.family))
        .bind(Json(&input.habits))
        .bind(assessment.bmi)
        .bind(assessment.risk)
        .bind(Json(&assessment.diseases))
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    async fn find_profile(&self, id: i64) -> AppResult<Option<HealthProfile>> {
        let row = sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(row.map(Into::into))
    }

    async fn insert_diary_entry(
        &self,
        user_id: i64,
        text: &str,
        mood: &str,
    ) -> AppResult<DiaryEntry> {
        let entry = sqlx::query_as::<_, DiaryEntry>(
            r#"
            INSERT INTO diary_entries (user_id, text, mood)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(text)
        .bind(mood)
        .fetch_one(&self.db)
        .await?;

        Ok(entry)
    }

    async fn list_diary_entries(&self, user_id: i64) -> AppResult<Vec<DiaryEntry>> {
        let entries = sqlx::query_as::<_, DiaryEntry>(
            r#"
            SELECT * FROM diary_entries
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(entries)
    }

    async fn delete_diary_entry(&self, entry_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM diary_entries WHERE id = $1")
            .bind(entry_id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_diary_entries(&self, user_id: i64) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM diary_entries WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(&self.db)
        .await?;

        Ok(count)
    }

    async fn insert_streak_day(&self, user_id: i64, day: NaiveDate) -> AppResult<()> {
        let result = sqlx::query("INSERT INTO streak_days (user_id, day) VALUES ($1, $2)")
            .bind(user_id)
            .bind(day)
            .execute(&self.db)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(AppError::Conflict(
                format!("Day {day} already recorded for user {user_id}"),
            )),
            Err(e) => Err(e.into()),
        }
    }

    async fn list_streak_days(&self, user_id: i64) -> AppResult<Vec<NaiveDate>> {
        let days = sqlx::query_scalar::<_, NaiveDate>(
            "SELECT day FROM streak_days WHERE user_id = $1 ORDER BY day DESC",
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(days)
    }

    async fn count_streak_days(&self, user_id: i64) -> AppResult<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM streak_days WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.db)
                .await?;

        Ok(count)
    }

    async fn seed_task_list(
        &self,
        user_id: i64,
        day: NaiveDate,
        default: &[TaskItem],
    ) -> AppResult<Vec<TaskItem>> {
        // No-op update on conflict so RETURNING yields the stored row either way
        let Json(items) = sqlx::query_scalar::<_, Json<Vec<TaskItem>>>(
            r#"
            INSERT INTO task_lists (user_id, day, items)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, day) DO UPDATE
                SET items = task_lists.items
            RETURNING items
            "#,
        )
        .bind(user_id)
        .bind(day)
        .bind(Json(default))
        .fetch_one(&self.db)
        .await?;

        Ok(items)
    }

    async fn upsert_task_list(
        &self,
        user_id: i64,
        day: NaiveDate,
        items: &[TaskItem],
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO task_lists (user_id, day, items)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, day) DO UPDATE
                SET items = EXCLUDED.items, updated_at = NOW()
            "#,
        )
        .bind(user_id)
        .bind(day)
        .bind(Json(items))
        .execute(&self.db)
        .await?;

        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.db)
            .await?;
        Ok(())
    }
}
