use serde::{Deserialize, Serialize};

use crate::models::survey::{FamilyHistory, Habit, SurveyInput};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietItem {
    pub ico: String,
    pub txt: String,
    pub sub: String,
}

impl DietItem {
    fn new(ico: &str, txt: impl Into<String>, sub: &str) -> Self {
        Self {
            ico: ico.into(),
            txt: txt.into(),
            sub: sub.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietPlan {
    pub diet: Vec<DietItem>,
    pub avoid: Vec<DietItem>,
    #[serde(rename = "do")]
    pub do_list: Vec<DietItem>,
}

/// Daily water target in litres: one more than today's intake, never below 2.5.
pub fn water_target(water: f64) -> f64 {
    (water + 1.0).max(2.5)
}

pub fn build_diet_plan(input: &SurveyInput) -> DietPlan {
    let mut diet = vec![
        DietItem::new(
            "🥦",
            "Leafy greens & cruciferous vegetables",
            "Broccoli, spinach, kale — 2 servings daily",
        ),
        DietItem::new(
            "🐟",
            "Lean protein sources",
            "Fish, chicken, legumes, tofu — every meal",
        ),
        DietItem::new(
            "🫐",
            "Antioxidant-rich fruits",
            "Berries, pomegranate, citrus — 2 servings",
        ),
        DietItem::new(
            "🌾",
            "Whole grains only",
            "Brown rice, oats, quinoa — over refined carbs",
        ),
        DietItem::new(
            "💧",
            format!("Drink {:.1}L+ water daily", water_target(input.water)),
            "Start with a glass of warm water each morning",
        ),
        DietItem::new("🥜", "Healthy fats", "Almonds, walnuts, olive oil, avocado"),
    ];
    if input.has_family(FamilyHistory::Diabetes) {
        diet.push(DietItem::new(
            "🚫",
            "Low glycemic index foods",
            "Control blood sugar — avoid sugary drinks",
        ));
    }
    if input.has_family(FamilyHistory::Heart) {
        diet.push(DietItem::new(
            "🧄",
            "Heart-healthy foods",
            "Garlic, omega-3s, fiber — daily routine",
        ));
    }

    let mut avoid = vec![
        DietItem::new(
            "🍔",
            "Ultra-processed foods",
            "Chips, fast food, packaged snacks",
        ),
        DietItem::new(
            "🧂",
            "Excess sodium",
            "Keep under 2300mg/day — watch labels",
        ),
        DietItem::new("🥤", "Sugary beverages", "Soda, juices, energy drinks"),
        DietItem::new(
            "🍞",
            "Refined carbohydrates",
            "White bread, pastries, white rice",
        ),
    ];
    if input.has_habit(Habit::Smoking) {
        avoid.push(DietItem::new(
            "🚬",
            "Tobacco in all forms",
            "Primary cause of preventable death",
        ));
    }
    if input.has_habit(Habit::Alcohol) {
        avoid.push(DietItem::new(
            "🍺",
            "Alcohol",
            "Limit to zero or very occasional",
        ));
    }

    let do_list = vec![
        DietItem::new(
            "😴",
            "Sleep 7-8 hours",
            "Non-negotiable for cellular repair & hormones",
        ),
        DietItem::new("🚶", "30 min walk daily", "Best low-cost health investment"),
    ];

    DietPlan {
        diet,
        avoid,
        do_list,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_plan_sizes() {
        let plan = build_diet_plan(&SurveyInput::default());
        assert_eq!(plan.diet.len(), 6);
        assert_eq!(plan.avoid.len(), 4);
        assert_eq!(plan.do_list.len(), 2);
    }

    #[test]
    fn test_water_target_floor() {
        let plan = build_diet_plan(&SurveyInput {
            water: 1.0,
            ..SurveyInput::default()
        });
        assert_eq!(plan.diet[4].txt, "Drink 2.5L+ water daily");
    }

    #[test]
    fn test_water_target_above_floor() {
        let plan = build_diet_plan(&SurveyInput {
            water: 2.3,
            ..SurveyInput::default()
        });
        assert_eq!(plan.diet[4].txt, "Drink 3.3L+ water daily");

        let plan = build_diet_plan(&SurveyInput {
            water: 3.0,
            ..SurveyInput::default()
        });
        assert_eq!(plan.diet[4].txt, "Drink 4.0L+ water daily");
    }

    #[test]
    fn test_family_history_adds_diet_items() {
        let plan = build_diet_plan(&SurveyInput {
            family: vec![FamilyHistory::Heart, FamilyHistory::Diabetes],
            ..SurveyInput::default()
        });
        assert_eq!(plan.diet.len(), 8);
        assert_eq!(plan.diet[6].txt, "Low glycemic index foods");
        assert_eq!(plan.diet[7].txt, "Heart-healthy foods");
    }

    #[test]
    fn test_habits_add_avoid_items() {
        let plan = build_diet_plan(&SurveyInput {
            habits: vec![Habit::Alcohol, Habit::Smoking, Habit::Junk],
            ..SurveyInput::default()
        });
        let labels: Vec<&str> = plan.avoid.iter().map(|i| i.txt.as_str()).collect();
        assert_eq!(labels.len(), 6);
        assert_eq!(labels[4], "Tobacco in all forms");
        assert_eq!(labels[5], "Alcohol");
    }

    #[test]
    fn test_do_list_serializes_as_do() {
        let json = serde_json::to_value(build_diet_plan(&SurveyInput::default())).unwrap();
        assert_eq!(json["do"].as_array().unwrap().len(), 2);
        assert!(json.get("do_list").is_none());
    }
}
