//! Heuristic health scoring.
//!
//! The composite risk is an additive sum of rule weights clamped once to
//! `0..=100`. Each disease score is its own weighted sum of a separate rule
//! table, capped at 95.

use crate::models::profile::{Assessment, Disease, DiseaseRisk};
use crate::models::survey::{FamilyHistory, Habit, SurveyInput};

pub const MAX_RISK: i32 = 100;
pub const MAX_DISEASE_PCT: i32 = 95;

pub fn compute_profile(input: &SurveyInput) -> Assessment {
    let bmi = bmi(input.weight, input.height);

    Assessment {
        input: input.clone(),
        bmi: round2(bmi),
        risk: composite_risk(input, bmi),
        diseases: Disease::ALL
            .iter()
            .map(|&disease| DiseaseRisk {
                name: disease.label().to_string(),
                pct: disease_risk(disease, input, bmi),
            })
            .collect(),
    }
}

/// Body-mass index from kilograms and centimetres.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn sum_hits(rules: &[(bool, i32)]) -> i32 {
    rules
        .iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, weight)| weight)
        .sum()
}

fn composite_risk(input: &SurveyInput, bmi: f64) -> i32 {
    let mut risk = 0;

    if !(18.5..=30.0).contains(&bmi) {
        risk += 20;
    } else if bmi > 25.0 {
        risk += 10;
    }

    if input.stress >= 4 {
        risk += 20;
    } else if input.stress == 3 {
        risk += 10;
    }

    if input.pa <= 2 {
        risk += 15;
    } else if input.pa == 3 {
        risk += 5;
    }

    risk += sum_hits(&[
        (input.water < 2.0, 10),
        (input.sleep < 6 || input.sleep > 9, 8),
        (input.has_habit(Habit::Smoking), 20),
        (input.has_habit(Habit::Alcohol), 12),
        (input.has_habit(Habit::Junk), 8),
        (input.has_habit(Habit::Sedentary), 8),
        (input.has_family(FamilyHistory::Heart), 15),
        (input.has_family(FamilyHistory::Diabetes), 12),
        (input.has_family(FamilyHistory::Cancer), 10),
        (input.has_family(FamilyHistory::Hypertension), 10),
        (input.age > 50, 10),
        (input.age > 65, 10),
    ]);

    risk.clamp(0, MAX_RISK)
}

fn disease_risk(disease: Disease, input: &SurveyInput, bmi: f64) -> i32 {
    let stressed = input.stress >= 4;
    let inactive = input.pa <= 2;
    let smoking = input.has_habit(Habit::Smoking);
    let alcohol = input.has_habit(Habit::Alcohol);
    let junk = input.has_habit(Habit::Junk);

    let sum = match disease {
        Disease::Type2Diabetes => sum_hits(&[
            (input.has_family(FamilyHistory::Diabetes), 25),
            (bmi > 27.0, 20),
            (inactive, 15),
            (junk, 10),
            (stressed, 8),
        ]),
        Disease::HeartDisease => sum_hits(&[
            (input.has_family(FamilyHistory::Heart), 25),
            (smoking, 20),
            (alcohol, 10),
            (stressed, 12),
            (bmi > 30.0, 10),
            (input.age > 45, 10),
        ]),
        Disease::Hypertension => sum_hits(&[
            (input.has_family(FamilyHistory::Hypertension), 20),
            (stressed, 20),
            (smoking, 15),
            (input.water < 2.0, 10),
            (inactive, 10),
        ]),
        Disease::Obesity => sum_hits(&[
            (bmi > 25.0, 30),
            (junk, 20),
            (inactive, 20),
            (input.has_habit(Habit::Sedentary), 15),
            (stressed, 5),
        ]),
        Disease::MentalStress => sum_hits(&[
            (stressed, 35),
            (input.sleep < 6, 20),
            (input.has_habit(Habit::Screen), 10),
            (input.has_habit(Habit::LateNight), 15),
            (input.water < 2.0, 5),
        ]),
        Disease::Cancer => sum_hits(&[
            (input.has_family(FamilyHistory::Cancer), 25),
            (smoking, 20),
            (alcohol, 10),
            (input.age > 50, 15),
        ]),
    };

    sum.min(MAX_DISEASE_PCT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pct(assessment: &Assessment, name: &str) -> i32 {
        assessment
            .diseases
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.pct)
            .unwrap()
    }

    fn high_risk_input() -> SurveyInput {
        SurveyInput {
            age: 60,
            weight: 90.0,
            height: 170.0,
            pa: 1,
            stress: 5,
            water: 1.0,
            sleep: 4,
            family: vec![FamilyHistory::Heart, FamilyHistory::Diabetes],
            habits: vec![Habit::Smoking, Habit::Junk],
            ..SurveyInput::default()
        }
    }

    #[test]
    fn test_default_input() {
        let assessment = compute_profile(&SurveyInput::default());
        assert_eq!(assessment.bmi, 24.22);
        // stress == 3 (+10), pa == 3 (+5)
        assert_eq!(assessment.risk, 15);
        assert!(assessment.diseases.iter().all(|d| d.pct == 0));
    }

    #[test]
    fn test_high_risk_example() {
        let assessment = compute_profile(&high_risk_input());
        assert_eq!(assessment.bmi, 31.14);
        // 20+20+15+10+8+20+8+15+12+10 = 138, clamped
        assert_eq!(assessment.risk, 100);
        assert_eq!(pct(&assessment, "Type 2 Diabetes"), 78);
        assert_eq!(pct(&assessment, "Heart Disease"), 77);
        assert_eq!(pct(&assessment, "Hypertension"), 55);
        assert_eq!(pct(&assessment, "Obesity Risk"), 75);
        assert_eq!(pct(&assessment, "Mental Stress"), 60);
        assert_eq!(pct(&assessment, "Cancer Risk"), 35);
    }

    #[test]
    fn test_disease_sums_below_cap_are_exact() {
        let input = SurveyInput {
            age: 70,
            stress: 5,
            family: vec![FamilyHistory::Heart],
            habits: vec![Habit::Smoking, Habit::Alcohol],
            weight: 110.0,
            ..SurveyInput::default()
        };
        // 25+20+10+12+10+10
        let assessment = compute_profile(&input);
        assert_eq!(pct(&assessment, "Heart Disease"), 87);

        let obese = SurveyInput {
            weight: 110.0,
            pa: 1,
            stress: 5,
            habits: vec![Habit::Junk, Habit::Sedentary],
            ..SurveyInput::default()
        };
        // 30+20+20+15+5 = 90
        assert_eq!(pct(&compute_profile(&obese), "Obesity Risk"), 90);

        let stressed = SurveyInput {
            stress: 5,
            sleep: 3,
            water: 0.5,
            habits: vec![Habit::Screen, Habit::LateNight],
            ..SurveyInput::default()
        };
        // 35+20+10+15+5 = 85
        assert_eq!(pct(&compute_profile(&stressed), "Mental Stress"), 85);
    }

    #[test]
    fn test_every_rule_firing_sums_each_table() {
        let input = SurveyInput {
            age: 60,
            weight: 110.0,
            pa: 1,
            stress: 5,
            water: 1.0,
            sleep: 3,
            family: vec![
                FamilyHistory::Heart,
                FamilyHistory::Diabetes,
                FamilyHistory::Cancer,
                FamilyHistory::Hypertension,
            ],
            habits: vec![
                Habit::Smoking,
                Habit::Alcohol,
                Habit::Junk,
                Habit::Sedentary,
                Habit::Screen,
                Habit::LateNight,
            ],
            ..SurveyInput::default()
        };
        let assessment = compute_profile(&input);
        assert_eq!(pct(&assessment, "Type 2 Diabetes"), 78);
        assert_eq!(pct(&assessment, "Heart Disease"), 87);
        assert_eq!(pct(&assessment, "Hypertension"), 75);
        assert_eq!(pct(&assessment, "Obesity Risk"), 90);
        assert_eq!(pct(&assessment, "Mental Stress"), 85);
        assert_eq!(pct(&assessment, "Cancer Risk"), 70);
    }

    #[test]
    fn test_disease_rule_sum_above_cap_clamps() {
        assert_eq!(sum_hits(&[(true, 60), (true, 50), (false, 10)]), 110);
        let capped = sum_hits(&[(true, 60), (true, 50)]).min(MAX_DISEASE_PCT);
        assert_eq!(capped, 95);
    }

    #[test]
    fn test_underweight_scores_like_obese() {
        let input = SurveyInput {
            weight: 45.0,
            ..SurveyInput::default()
        };
        let assessment = compute_profile(&input);
        assert!(assessment.bmi < 18.5);
        assert_eq!(assessment.risk, 35);
    }

    #[test]
    fn test_overweight_band() {
        let input = SurveyInput {
            weight: 80.0,
            ..SurveyInput::default()
        };
        let assessment = compute_profile(&input);
        assert_eq!(assessment.bmi, 27.68);
        assert_eq!(assessment.risk, 25);
        assert_eq!(pct(&assessment, "Type 2 Diabetes"), 20);
        assert_eq!(pct(&assessment, "Obesity Risk"), 30);
    }

    #[test]
    fn test_age_brackets_stack() {
        let senior = SurveyInput {
            age: 70,
            ..SurveyInput::default()
        };
        assert_eq!(compute_profile(&senior).risk, 35);

        let older = SurveyInput {
            age: 55,
            ..SurveyInput::default()
        };
        assert_eq!(compute_profile(&older).risk, 25);
    }

    #[test]
    fn test_sleep_outside_window() {
        for sleep in [5, 10] {
            let input = SurveyInput {
                sleep,
                ..SurveyInput::default()
            };
            assert_eq!(compute_profile(&input).risk, 23, "sleep {sleep}");
        }
    }

    #[test]
    fn test_low_stress_and_high_activity_score_zero() {
        let input = SurveyInput {
            stress: 1,
            pa: 5,
            ..SurveyInput::default()
        };
        assert_eq!(compute_profile(&input).risk, 0);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let input = high_risk_input();
        assert_eq!(compute_profile(&input), compute_profile(&input));
    }

    #[test]
    fn test_disease_order_is_fixed() {
        let names: Vec<String> = compute_profile(&SurveyInput::default())
            .diseases
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(
            names,
            [
                "Type 2 Diabetes",
                "Heart Disease",
                "Hypertension",
                "Obesity Risk",
                "Mental Stress",
                "Cancer Risk"
            ]
        );
    }

    #[test]
    fn test_bounds_hold_for_extremes() {
        for weight in [20.0, 70.0, 250.0] {
            for stress in 1..=5 {
                let input = SurveyInput {
                    weight,
                    stress,
                    age: 90,
                    family: vec![
                        FamilyHistory::Heart,
                        FamilyHistory::Diabetes,
                        FamilyHistory::Cancer,
                        FamilyHistory::Hypertension,
                    ],
                    ..SurveyInput::default()
                };
                let a = compute_profile(&input);
                assert!((0..=MAX_RISK).contains(&a.risk));
                assert!(a.diseases.iter().all(|d| (0..=MAX_DISEASE_PCT).contains(&d.pct)));
            }
        }
    }
}
