use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Family-history markers recognised by the scoring rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FamilyHistory {
    Heart,
    Diabetes,
    Cancer,
    Hypertension,
}

impl FamilyHistory {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "heart" => Some(Self::Heart),
            "diabetes" => Some(Self::Diabetes),
            "cancer" => Some(Self::Cancer),
            "hypertension" => Some(Self::Hypertension),
            _ => None,
        }
    }
}

/// Lifestyle habit markers recognised by the scoring rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Habit {
    Smoking,
    Alcohol,
    Junk,
    Sedentary,
    Screen,
    LateNight,
}

impl Habit {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "smoking" => Some(Self::Smoking),
            "alcohol" => Some(Self::Alcohol),
            "junk" => Some(Self::Junk),
            "sedentary" => Some(Self::Sedentary),
            "screen" => Some(Self::Screen),
            "latenight" => Some(Self::LateNight),
            _ => None,
        }
    }
}

/// A JSON scalar that may carry a number either natively or as text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberLike {
    Number(f64),
    Text(String),
}

/// POST /api/calculate
///
/// Every field is optional; missing ones fall back to the survey defaults.
#[derive(Debug, Default, Deserialize)]
pub struct SurveyRequest {
    pub name: Option<String>,
    pub age: Option<NumberLike>,
    pub gender: Option<String>,
    pub weight: Option<NumberLike>,
    pub height: Option<NumberLike>,
    pub country: Option<String>,
    pub pa: Option<NumberLike>,
    pub stress: Option<NumberLike>,
    pub water: Option<NumberLike>,
    pub sleep: Option<NumberLike>,
    pub family: Option<Vec<String>>,
    pub habits: Option<Vec<String>>,
}

/// Survey answers after defaults and coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SurveyInput {
    pub name: String,
    #[validate(range(min = 0, max = 150, message = "must be between 0 and 150"))]
    pub age: i32,
    pub gender: String,
    #[validate(range(min = 1.0, max = 1000.0, message = "must be between 1 and 1000 kg"))]
    pub weight: f64,
    #[validate(range(min = 1.0, max = 300.0, message = "must be between 1 and 300 cm"))]
    pub height: f64,
    pub country: String,
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub pa: i32,
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub stress: i32,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub water: f64,
    #[validate(range(min = 0, max = 24, message = "must be between 0 and 24"))]
    pub sleep: i32,
    pub family: Vec<FamilyHistory>,
    pub habits: Vec<Habit>,
}

impl Default for SurveyInput {
    fn default() -> Self {
        Self {
            name: "User".into(),
            age: 25,
            gender: "Other".into(),
            weight: 70.0,
            height: 170.0,
            country: "India".into(),
            pa: 3,
            stress: 3,
            water: 2.0,
            sleep: 7,
            family: Vec::new(),
            habits: Vec::new(),
        }
    }
}

impl SurveyInput {
    pub fn has_family(&self, tag: FamilyHistory) -> bool {
        self.family.contains(&tag)
    }

    pub fn has_habit(&self, tag: Habit) -> bool {
        self.habits.contains(&tag)
    }
}

impl SurveyRequest {
    /// Applies defaults, coerces numeric text and checks ranges.
    pub fn into_input(self) -> AppResult<SurveyInput> {
        let defaults = SurveyInput::default();

        let input = SurveyInput {
            name: self.name.unwrap_or(defaults.name),
            age: coerce_int("age", self.age, defaults.age)?,
            gender: self.gender.unwrap_or(defaults.gender),
            weight: coerce_float("weight", self.weight, defaults.weight)?,
            height: coerce_float("height", self.height, defaults.height)?,
            country: self.country.unwrap_or(defaults.country),
            pa: coerce_int("pa", self.pa, defaults.pa)?,
            stress: coerce_int("stress", self.stress, defaults.stress)?,
            water: coerce_float("water", self.water, defaults.water)?,
            sleep: coerce_int("sleep", self.sleep, defaults.sleep)?,
            family: parse_tags("family", self.family.unwrap_or_default(), FamilyHistory::parse)?,
            habits: parse_tags("habits", self.habits.unwrap_or_default(), Habit::parse)?,
        };

        input.validate()?;
        Ok(input)
    }
}

fn coerce_int(field: &str, value: Option<NumberLike>, default: i32) -> AppResult<i32> {
    let invalid = || AppError::Validation(format!("{field} must be an integer"));
    match value {
        None => Ok(default),
        Some(NumberLike::Number(n)) => {
            if !n.is_finite() || n.abs() > i32::MAX as f64 {
                return Err(invalid());
            }
            Ok(n.trunc() as i32)
        }
        Some(NumberLike::Text(s)) => s.trim().parse::<i32>().map_err(|_| invalid()),
    }
}

fn coerce_float(field: &str, value: Option<NumberLike>, default: f64) -> AppResult<f64> {
    let invalid = || AppError::Validation(format!("{field} must be a number"));
    let n = match value {
        None => return Ok(default),
        Some(NumberLike::Number(n)) => n,
        Some(NumberLike::Text(s)) => s.trim().parse::<f64>().map_err(|_| invalid())?,
    };
    if n.is_finite() {
        Ok(n)
    } else {
        Err(invalid())
    }
}

fn parse_tags<T: PartialEq>(
    field: &str,
    raw: Vec<String>,
    parse: fn(&str) -> Option<T>,
) -> AppResult<Vec<T>> {
    let mut tags = Vec::with_capacity(raw.len());
    for tag in raw {
        let parsed = parse(tag.trim())
            .ok_or_else(|| AppError::Validation(format!("{field}: unknown tag '{tag}'")))?;
        if !tags.contains(&parsed) {
            tags.push(parsed);
        }
    }
    Ok(tags)
}
