use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::survey::SurveyInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disease {
    Type2Diabetes,
    HeartDisease,
    Hypertension,
    Obesity,
    MentalStress,
    Cancer,
}

impl Disease {
    /// Reporting order of the per-disease breakdown.
    pub const ALL: [Disease; 6] = [
        Disease::Type2Diabetes,
        Disease::HeartDisease,
        Disease::Hypertension,
        Disease::Obesity,
        Disease::MentalStress,
        Disease::Cancer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Disease::Type2Diabetes => "Type 2 Diabetes",
            Disease::HeartDisease => "Heart Disease",
            Disease::Hypertension => "Hypertension",
            Disease::Obesity => "Obesity Risk",
            Disease::MentalStress => "Mental Stress",
            Disease::Cancer => "Cancer Risk",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseRisk {
    pub name: String,
    pub pct: i32,
}

/// Survey answers together with everything the scoring engine derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(flatten)]
    pub input: SurveyInput,
    pub bmi: f64,
    pub risk: i32,
    pub diseases: Vec<DiseaseRisk>,
}

/// A persisted assessment. Never updated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthProfile {
    pub id: i64,
    #[serde(flatten)]
    pub assessment: Assessment,
    pub created_at: DateTime<Utc>,
}

impl HealthProfile {
    pub fn survey(&self) -> &SurveyInput {
        &self.assessment.input
    }
}
