// ABOUTME: User profile, editable goal fields, and goal normalization
// ABOUTME: Converts form-input goal values (number, string, or unset) to numeric GoalSet
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSnap

use serde::{Deserialize, Serialize};

use crate::constants::goal_defaults;
use crate::models::nutrition::Macro;

/// User gender as recorded at signup
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    #[default]
    Male,
    /// Female
    Female,
    /// Other or undisclosed
    Other,
}

/// Self-reported activity level
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Some weekly exercise
    #[default]
    Moderate,
    /// Frequent exercise
    Active,
}

/// A numeric profile field as it arrives from form input
///
/// Editing UIs store numbers as editable text, so a field may be either a
/// real number or a string awaiting normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EditableNumber {
    /// Already-numeric value
    Number(f64),
    /// Text value pending base-10 integer parsing
    Text(String),
}

impl EditableNumber {
    /// Normalize to a number, if possible
    ///
    /// Numeric strings parse as base-10 integers; anything else is `None`.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            #[allow(clippy::cast_precision_loss)]
            Self::Text(s) => s.trim().parse::<i64>().ok().map(|n| n as f64),
        }
    }
}

impl From<f64> for EditableNumber {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for EditableNumber {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Per-macro daily goals as owned by the editing UI
///
/// Any field may be a number, a numeric string, or absent. Must be
/// normalized into a [`GoalSet`] before any progress computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditableGoalSet {
    /// Daily calorie goal (kcal)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<EditableNumber>,
    /// Daily protein goal (grams)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<EditableNumber>,
    /// Daily fat goal (grams)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<EditableNumber>,
    /// Daily carbohydrate goal (grams)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbohydrates: Option<EditableNumber>,
}

/// Fully-numeric per-macro daily goals, owned by the computation core
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalSet {
    /// Daily calorie goal (kcal)
    pub calories: f64,
    /// Daily protein goal (grams)
    pub protein: f64,
    /// Daily fat goal (grams)
    pub fat: f64,
    /// Daily carbohydrate goal (grams)
    pub carbohydrates: f64,
}

impl Default for GoalSet {
    fn default() -> Self {
        Self {
            calories: goal_defaults::CALORIES,
            protein: goal_defaults::PROTEIN,
            fat: goal_defaults::FAT,
            carbohydrates: goal_defaults::CARBOHYDRATES,
        }
    }
}

impl GoalSet {
    /// Normalize editable goal fields into numeric goals
    ///
    /// A field that is absent or fails to parse falls back to the documented
    /// per-macro default.
    #[must_use]
    pub fn from_editable(editable: &EditableGoalSet) -> Self {
        fn normalize(field: Option<&EditableNumber>, default: f64) -> f64 {
            field
                .and_then(EditableNumber::as_number)
                .unwrap_or(default)
        }

        Self {
            calories: normalize(editable.calories.as_ref(), goal_defaults::CALORIES),
            protein: normalize(editable.protein.as_ref(), goal_defaults::PROTEIN),
            fat: normalize(editable.fat.as_ref(), goal_defaults::FAT),
            carbohydrates: normalize(
                editable.carbohydrates.as_ref(),
                goal_defaults::CARBOHYDRATES,
            ),
        }
    }

    /// Goal value for one macro
    #[must_use]
    pub const fn get(&self, m: Macro) -> f64 {
        match m {
            Macro::Calories => self.calories,
            Macro::Protein => self.protein,
            Macro::Fat => self.fat,
            Macro::Carbohydrates => self.carbohydrates,
        }
    }
}

/// Mutable user profile document
///
/// Created at signup, mutated by the profile-edit flow, persisted by the
/// external collaborator. Numeric fields may hold text while editing; only
/// `goals` feed the computation core, and only after normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Age in years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<EditableNumber>,
    /// Gender
    #[serde(default)]
    pub gender: Gender,
    /// Height in centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<EditableNumber>,
    /// Weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<EditableNumber>,
    /// Self-reported activity level
    #[serde(default)]
    pub activity_level: ActivityLevel,
    /// Editable per-macro goals
    #[serde(default)]
    pub goals: EditableGoalSet,
}

impl UserProfile {
    /// Normalized numeric goals for this profile
    #[must_use]
    pub fn goal_set(&self) -> GoalSet {
        GoalSet::from_editable(&self.goals)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn normalization_parses_strings_and_substitutes_defaults() {
        // calories arrives as text, protein is unset, fat is numeric,
        // carbohydrates fails to parse
        let editable = EditableGoalSet {
            calories: Some(EditableNumber::from("1800")),
            protein: None,
            fat: Some(EditableNumber::from(70.0)),
            carbohydrates: Some(EditableNumber::from("abc")),
        };

        let goals = GoalSet::from_editable(&editable);
        assert_eq!(goals.calories, 1800.0);
        assert_eq!(goals.protein, 150.0);
        assert_eq!(goals.fat, 70.0);
        assert_eq!(goals.carbohydrates, 250.0);
    }

    #[test]
    fn null_goal_fields_deserialize_as_unset() {
        let editable: EditableGoalSet =
            serde_json::from_str(r#"{"calories": "1800", "protein": null, "fat": 70}"#).unwrap();

        assert_eq!(editable.calories, Some(EditableNumber::from("1800")));
        assert_eq!(editable.protein, None);
        assert_eq!(editable.fat, Some(EditableNumber::from(70.0)));
        assert_eq!(editable.carbohydrates, None);
    }

    #[test]
    fn default_goal_set_matches_documented_defaults() {
        let goals = GoalSet::default();
        assert_eq!(goals.calories, 2000.0);
        assert_eq!(goals.protein, 150.0);
        assert_eq!(goals.fat, 70.0);
        assert_eq!(goals.carbohydrates, 250.0);
    }

    #[test]
    fn profile_document_uses_camel_case_activity_level() {
        let profile = UserProfile {
            name: "Sam".to_owned(),
            activity_level: ActivityLevel::Active,
            ..UserProfile::default()
        };
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["activityLevel"], "active");
    }
}
