// ABOUTME: Nutrition tracking models for food intake analysis
// ABOUTME: NutritionData, NutritionEntry, DailySummary, and Macro definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSnap

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::time_format;

/// One of the four tracked nutrition dimensions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Macro {
    /// Energy intake (kcal)
    Calories,
    /// Protein intake (grams)
    Protein,
    /// Fat intake (grams)
    Fat,
    /// Carbohydrate intake (grams)
    Carbohydrates,
}

impl Macro {
    /// All tracked macros, in display order
    pub const ALL: [Self; 4] = [Self::Calories, Self::Protein, Self::Fat, Self::Carbohydrates];

    /// Wire/display name for this macro
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Fat => "fat",
            Self::Carbohydrates => "carbohydrates",
        }
    }
}

/// Nutrition analysis result for a single food photo
///
/// Produced by the response parser from AI output; immutable once created.
/// Macro fields are non-negative, enforced at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionData {
    /// Estimated calories (kcal)
    pub calories: f64,
    /// Estimated protein (grams)
    pub protein: f64,
    /// Estimated fat (grams)
    pub fat: f64,
    /// Estimated carbohydrates (grams)
    pub carbohydrates: f64,
    /// Free-text vitamin labels, in model order
    pub vitamins: Vec<String>,
    /// Free-text mineral labels, in model order
    pub minerals: Vec<String>,
}

impl NutritionData {
    /// Value of one macro field
    #[must_use]
    pub const fn macro_value(&self, m: Macro) -> f64 {
        match m {
            Macro::Calories => self.calories,
            Macro::Protein => self.protein,
            Macro::Fat => self.fat,
            Macro::Carbohydrates => self.carbohydrates,
        }
    }
}

/// A nutrition entry as prepared for the persistence collaborator
///
/// Identical to [`NutritionEntry`] minus the identifier, which the store
/// assigns on save. `date`, `time`, and `timestamp` are derived from one
/// instant so the three fields can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNutritionEntry {
    /// Owning user identifier
    pub user_id: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Wall-clock time, `HH:MM:SS`
    pub time: String,
    /// The analyzed nutrition payload
    pub nutrition: NutritionData,
    /// Milliseconds since the Unix epoch, used for ordering
    pub timestamp: i64,
}

impl NewNutritionEntry {
    /// Build an entry for the given instant
    #[must_use]
    pub fn at(user_id: impl Into<String>, nutrition: NutritionData, at: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            date: at.format(time_format::ENTRY_DATE).to_string(),
            time: at.format(time_format::ENTRY_TIME).to_string(),
            nutrition,
            timestamp: at.timestamp_millis(),
        }
    }

    /// Build an entry stamped with the current UTC instant
    #[must_use]
    pub fn now(user_id: impl Into<String>, nutrition: NutritionData) -> Self {
        Self::at(user_id, nutrition, Utc::now())
    }

    /// Attach the store-assigned identifier, producing a complete entry
    #[must_use]
    pub fn into_entry(self, id: impl Into<String>) -> NutritionEntry {
        NutritionEntry {
            id: id.into(),
            user_id: self.user_id,
            date: self.date,
            time: self.time,
            nutrition: self.nutrition,
            timestamp: self.timestamp,
        }
    }
}

/// A stored, timestamped food-analysis observation
///
/// Created once per successful food analysis and never mutated. The
/// persistence collaborator owns the document; the user owns it logically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionEntry {
    /// Store-assigned unique identifier
    pub id: String,
    /// Owning user identifier
    pub user_id: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Wall-clock time, `HH:MM:SS`
    pub time: String,
    /// The analyzed nutrition payload
    pub nutrition: NutritionData,
    /// Milliseconds since the Unix epoch, used for ordering
    pub timestamp: i64,
}

/// Accumulated macro totals for one user and one calendar date
///
/// Derived, never stored: always recomputed from the complete entry snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Total calories (kcal)
    pub calories: f64,
    /// Total protein (grams)
    pub protein: f64,
    /// Total fat (grams)
    pub fat: f64,
    /// Total carbohydrates (grams)
    pub carbohydrates: f64,
}

impl DailySummary {
    /// Accumulated value for one macro
    #[must_use]
    pub const fn get(&self, m: Macro) -> f64 {
        match m {
            Macro::Calories => self.calories,
            Macro::Protein => self.protein,
            Macro::Fat => self.fat,
            Macro::Carbohydrates => self.carbohydrates,
        }
    }

    /// Add one nutrition payload into the running totals
    pub fn add(&mut self, nutrition: &NutritionData) {
        self.calories += nutrition.calories;
        self.protein += nutrition.protein;
        self.fat += nutrition.fat;
        self.carbohydrates += nutrition.carbohydrates;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_nutrition() -> NutritionData {
        NutritionData {
            calories: 500.0,
            protein: 20.0,
            fat: 10.0,
            carbohydrates: 60.0,
            vitamins: vec!["A".to_owned(), "C".to_owned()],
            minerals: vec!["Iron".to_owned()],
        }
    }

    #[test]
    fn new_entry_fields_derive_from_one_instant() {
        let at = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
        let entry = NewNutritionEntry::at("user-1", sample_nutrition(), at);

        assert_eq!(entry.date, "2025-03-14");
        assert_eq!(entry.time, "09:26:53");
        assert_eq!(entry.timestamp, at.timestamp_millis());
    }

    #[test]
    fn into_entry_attaches_store_id() {
        let at = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
        let entry = NewNutritionEntry::at("user-1", sample_nutrition(), at).into_entry("doc-42");

        assert_eq!(entry.id, "doc-42");
        assert_eq!(entry.user_id, "user-1");
        assert_eq!(entry.date, "2025-03-14");
    }

    #[test]
    fn entry_serializes_with_camel_case_field_names() {
        let at = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
        let entry = NewNutritionEntry::at("user-1", sample_nutrition(), at).into_entry("doc-42");
        let value = serde_json::to_value(&entry).unwrap();

        assert!(value.get("userId").is_some());
        assert!(value.get("user_id").is_none());
    }
}
