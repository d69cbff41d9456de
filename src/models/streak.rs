use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Result of marking a day complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    Marked,
    AlreadyMarked,
}

impl CompletionOutcome {
    pub fn already_marked(self) -> bool {
        matches!(self, CompletionOutcome::AlreadyMarked)
    }

    pub fn message(self) -> &'static str {
        match self {
            CompletionOutcome::Marked => "Day marked complete! 🔥",
            CompletionOutcome::AlreadyMarked => "Already marked today complete!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Day of month.
    pub day: u32,
    pub done: bool,
    pub today: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakView {
    pub streak: i32,
    pub longest_streak: i32,
    /// Every completed day, newest first.
    pub days: Vec<NaiveDate>,
    /// The last seven days, oldest first.
    pub calendar: Vec<CalendarDay>,
}
