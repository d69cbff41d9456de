//! Day-completion streaks.
//!
//! Only raw completion days are stored. Streak length and the calendar are
//! rebuilt from them on every read.

use std::collections::BTreeSet;

use chrono::{Datelike, Duration, NaiveDate};

use crate::db::HealthStore;
use crate::error::{AppError, AppResult};
use crate::models::streak::{CalendarDay, CompletionOutcome, StreakView};

pub const CALENDAR_DAYS: i64 = 7;

/// Records `day` as complete. A repeat for the same day is reported, not an error.
pub async fn record_completion(
    store: &dyn HealthStore,
    user_id: i64,
    day: NaiveDate,
) -> AppResult<CompletionOutcome> {
    match store.insert_streak_day(user_id, day).await {
        Ok(()) => Ok(CompletionOutcome::Marked),
        Err(AppError::Conflict(_)) => Ok(CompletionOutcome::AlreadyMarked),
        Err(e) => Err(e),
    }
}

pub async fn streak_view(
    store: &dyn HealthStore,
    user_id: i64,
    today: NaiveDate,
) -> AppResult<StreakView> {
    let days = store.list_streak_days(user_id).await?;
    Ok(build_streak_view(days, today))
}

pub fn build_streak_view(mut days: Vec<NaiveDate>, today: NaiveDate) -> StreakView {
    days.sort_unstable_by(|a, b| b.cmp(a));
    days.dedup();
    let completed: BTreeSet<NaiveDate> = days.iter().copied().collect();

    let calendar = (0..CALENDAR_DAYS)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            CalendarDay {
                date,
                day: date.day(),
                done: completed.contains(&date),
                today: offset == 0,
            }
        })
        .collect();

    StreakView {
        streak: current_streak(&completed, today),
        longest_streak: longest_streak(&completed),
        days,
        calendar,
    }
}

/// Consecutive completed days ending at `today`. Zero if today is missing.
pub fn current_streak(completed: &BTreeSet<NaiveDate>, today: NaiveDate) -> i32 {
    let mut streak = 0;
    let mut check = today;
    while completed.contains(&check) {
        streak += 1;
        check -= Duration::days(1);
    }
    streak
}

pub fn longest_streak(completed: &BTreeSet<NaiveDate>) -> i32 {
    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;

    for &day in completed {
        run = match prev {
            Some(p) if day == p + Duration::days(1) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(day);
    }
    longest
}
