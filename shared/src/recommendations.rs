//! Static goal recommendations and display labels
//!
//! Content is available in Russian (the calculator's first language and
//! the default) and English.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalculatorError;
use crate::profile::{ActivityLevel, Gender, Goal};

/// Display language for recommendation and label content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ru" | "ru-ru" | "russian" => Ok(Locale::Ru),
            "en" | "en-us" | "en-gb" | "english" => Ok(Locale::En),
            _ => Err(CalculatorError::UnknownLocale(s.to_string())),
        }
    }
}

// ============================================================================
// Recommendations
// ============================================================================

const LOSE_RU: [&str; 3] = [
    "Создайте дефицит 300-500 ккал в день",
    "Увеличьте потребление белка",
    "Добавьте кардио тренировки 3-4 раза в неделю",
];

const MAINTAIN_RU: [&str; 3] = [
    "Поддерживайте баланс калорий",
    "Сбалансированное питание",
    "Регулярные тренировки 3-5 раз в неделю",
];

const GAIN_RU: [&str; 3] = [
    "Профицит 300-500 ккал в день",
    "Увеличьте потребление сложных углеводов",
    "Силовые тренировки 4-5 раз в неделю",
];

const LOSE_EN: [&str; 3] = [
    "Create a deficit of 300-500 kcal per day",
    "Increase your protein intake",
    "Add cardio workouts 3-4 times a week",
];

const MAINTAIN_EN: [&str; 3] = [
    "Keep your calorie balance steady",
    "Eat a balanced diet",
    "Train regularly 3-5 times a week",
];

const GAIN_EN: [&str; 3] = [
    "Aim for a surplus of 300-500 kcal per day",
    "Increase your intake of complex carbohydrates",
    "Strength training 4-5 times a week",
];

impl Goal {
    /// Ordered recommendations for this goal
    pub fn recommendations(&self, locale: Locale) -> &'static [&'static str] {
        match (self, locale) {
            (Goal::Lose, Locale::Ru) => &LOSE_RU,
            (Goal::Maintain, Locale::Ru) => &MAINTAIN_RU,
            (Goal::Gain, Locale::Ru) => &GAIN_RU,
            (Goal::Lose, Locale::En) => &LOSE_EN,
            (Goal::Maintain, Locale::En) => &MAINTAIN_EN,
            (Goal::Gain, Locale::En) => &GAIN_EN,
        }
    }
}

/// Recommendations for a raw goal value in the default locale
///
/// Unknown goals yield an empty list.
pub fn recommendations_for(goal: &str) -> &'static [&'static str] {
    recommendations_for_locale(goal, Locale::default())
}

/// Recommendations for a raw goal value in the given locale
pub fn recommendations_for_locale(goal: &str, locale: Locale) -> &'static [&'static str] {
    match Goal::from_form_value(goal) {
        Some(goal) => goal.recommendations(locale),
        None => &[],
    }
}

// ============================================================================
// Labels
// ============================================================================

/// Text labels a shell needs to render the form and its results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub age: &'static str,
    pub weight: &'static str,
    pub height: &'static str,
    pub gender: &'static str,
    pub activity: &'static str,
    pub goal: &'static str,
    pub submit: &'static str,
    pub results: &'static str,
    pub water: &'static str,
    pub water_unit: &'static str,
    pub calories: &'static str,
    pub calories_unit: &'static str,
    pub recommendations: &'static str,
}

const LABELS_RU: Labels = Labels {
    title: "Калькулятор калорий",
    age: "Возраст",
    weight: "Вес (кг)",
    height: "Рост (см)",
    gender: "Пол",
    activity: "Активность",
    goal: "Цель",
    submit: "Рассчитать",
    results: "Результаты",
    water: "Вода",
    water_unit: "мл/день",
    calories: "Калории",
    calories_unit: "ккал/день",
    recommendations: "Рекомендации",
};

const LABELS_EN: Labels = Labels {
    title: "Calorie calculator",
    age: "Age",
    weight: "Weight (kg)",
    height: "Height (cm)",
    gender: "Gender",
    activity: "Activity",
    goal: "Goal",
    submit: "Calculate",
    results: "Results",
    water: "Water",
    water_unit: "ml/day",
    calories: "Calories",
    calories_unit: "kcal/day",
    recommendations: "Recommendations",
};

impl Locale {
    pub fn labels(&self) -> &'static Labels {
        match self {
            Locale::Ru => &LABELS_RU,
            Locale::En => &LABELS_EN,
        }
    }
}

impl Gender {
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Gender::Male, Locale::Ru) => "Мужской",
            (Gender::Female, Locale::Ru) => "Женский",
            (Gender::Male, Locale::En) => "Male",
            (Gender::Female, Locale::En) => "Female",
        }
    }
}

impl ActivityLevel {
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ActivityLevel::Sedentary, Locale::Ru) => "Сидячий образ жизни",
            (ActivityLevel::Light, Locale::Ru) => "Легкая активность",
            (ActivityLevel::Moderate, Locale::Ru) => "Умеренная активность",
            (ActivityLevel::High, Locale::Ru) => "Высокая активность",
            (ActivityLevel::Extreme, Locale::Ru) => "Экстремальная активность",
            (ActivityLevel::Sedentary, Locale::En) => "Sedentary lifestyle",
            (ActivityLevel::Light, Locale::En) => "Light activity",
            (ActivityLevel::Moderate, Locale::En) => "Moderate activity",
            (ActivityLevel::High, Locale::En) => "High activity",
            (ActivityLevel::Extreme, Locale::En) => "Extreme activity",
        }
    }
}

impl Goal {
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Goal::Lose, Locale::Ru) => "Похудение",
            (Goal::Maintain, Locale::Ru) => "Поддержание веса",
            (Goal::Gain, Locale::Ru) => "Набор массы",
            (Goal::Lose, Locale::En) => "Weight loss",
            (Goal::Maintain, Locale::En) => "Weight maintenance",
            (Goal::Gain, Locale::En) => "Mass gain",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("lose")]
    #[case("maintain")]
    #[case("gain")]
    fn test_known_goals_have_three_recommendations(#[case] goal: &str) {
        for locale in [Locale::Ru, Locale::En] {
            let items = recommendations_for_locale(goal, locale);
            assert_eq!(items.len(), 3);
            assert!(items.iter().all(|item| !item.trim().is_empty()));
        }
    }

    #[test]
    fn test_unknown_goal_is_empty() {
        assert!(recommendations_for("unknown").is_empty());
        assert!(recommendations_for("").is_empty());
        assert!(recommendations_for("LOSE").is_empty());
    }

    #[test]
    fn test_order_is_stable() {
        assert_eq!(recommendations_for("lose")[0], "Создайте дефицит 300-500 ккал в день");
        assert_eq!(recommendations_for("gain")[2], "Силовые тренировки 4-5 раз в неделю");
        assert_eq!(recommendations_for("lose"), recommendations_for("lose"));
    }

    #[test]
    fn test_goals_have_distinct_lists() {
        assert_ne!(recommendations_for("lose"), recommendations_for("gain"));
        assert_ne!(recommendations_for("maintain"), recommendations_for("gain"));
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("ru-RU".parse::<Locale>().unwrap(), Locale::Ru);
        assert!("de".parse::<Locale>().is_err());
        assert_eq!(Locale::default(), Locale::Ru);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Locale::Ru.labels().water_unit, "мл/день");
        assert_eq!(Locale::En.labels().calories_unit, "kcal/day");
        assert_eq!(ActivityLevel::Moderate.label(Locale::Ru), "Умеренная активность");
        assert_eq!(Goal::Gain.label(Locale::En), "Mass gain");
    }
}
