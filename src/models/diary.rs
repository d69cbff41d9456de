use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

pub const DEFAULT_MOOD: &str = "😊";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DiaryEntry {
    pub id: i64,
    pub user_id: i64,
    pub text: String,
    pub mood: String,
    pub created_at: DateTime<Utc>,
}

/// POST /api/diary/:user_id
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDiaryEntryRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom = "not_blank")]
    pub text: String,
    pub mood: Option<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn not_blank(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Empty entry".into());
        return Err(err);
    }
    Ok(())
}

impl CreateDiaryEntryRequest {
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    /// The mood as sent; only an absent or null mood falls back to the default.
    pub fn mood(&self) -> &str {
        self.mood.as_deref().unwrap_or(DEFAULT_MOOD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_text_fails_validation() {
        let req: CreateDiaryEntryRequest = serde_json::from_str(r#"{"text":"   "}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_missing_text_fails_validation() {
        let req: CreateDiaryEntryRequest = serde_json::from_str(r#"{"mood":"😢"}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_text_is_trimmed_and_mood_defaults() {
        let req: CreateDiaryEntryRequest =
            serde_json::from_str(r#"{"text":"  slept well  "}"#).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.text(), "slept well");
        assert_eq!(req.mood(), DEFAULT_MOOD);
    }

    #[test]
    fn test_null_text_fails_validation() {
        let req: CreateDiaryEntryRequest = serde_json::from_str(r#"{"text":null}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_blank_mood_kept_verbatim() {
        let req: CreateDiaryEntryRequest =
            serde_json::from_str(r#"{"text":"quiet day","mood":""}"#).unwrap();
        assert_eq!(req.mood(), "");

        let req: CreateDiaryEntryRequest =
            serde_json::from_str(r#"{"text":"quiet day","mood":null}"#).unwrap();
        assert_eq!(req.mood(), DEFAULT_MOOD);
    }

    #[test]
    fn test_explicit_mood_kept() {
        let req: CreateDiaryEntryRequest =
            serde_json::from_str(r#"{"text":"rough day","mood":"😢"}"#).unwrap();
        assert_eq!(req.mood(), "😢");
    }
}
