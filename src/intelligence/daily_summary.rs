// ABOUTME: Folds a day's nutrition entries into cumulative macro totals
// ABOUTME: Pure, order-independent summation with an all-zero empty case
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSnap

use nutrisnap_core::{DailySummary, NutritionEntry};

/// Fold a day's entries into cumulative macro totals
///
/// Entries are expected to be pre-filtered to one user and one calendar date
/// by the subscription collaborator; this function only sums. Addition is
/// commutative, so delivery order does not affect the result. An empty slice
/// yields the all-zero summary.
#[must_use]
pub fn daily_summary(entries: &[NutritionEntry]) -> DailySummary {
    entries.iter().fold(DailySummary::default(), |mut acc, entry| {
        acc.add(&entry.nutrition);
        acc
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use nutrisnap_core::{NewNutritionEntry, NutritionData};

    fn entry(calories: f64, protein: f64, fat: f64, carbohydrates: f64) -> NutritionEntry {
        let at = Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap();
        NewNutritionEntry::at(
            "user-1",
            NutritionData {
                calories,
                protein,
                fat,
                carbohydrates,
                vitamins: vec![],
                minerals: vec![],
            },
            at,
        )
        .into_entry("id")
    }

    #[test]
    fn empty_input_yields_all_zero_summary() {
        assert_eq!(daily_summary(&[]), DailySummary::default());
    }

    #[test]
    fn totals_are_elementwise_sums() {
        let entries = vec![entry(500.0, 20.0, 10.0, 60.0), entry(300.0, 15.0, 5.0, 40.0)];
        let summary = daily_summary(&entries);

        assert_eq!(summary.calories, 800.0);
        assert_eq!(summary.protein, 35.0);
        assert_eq!(summary.fat, 15.0);
        assert_eq!(summary.carbohydrates, 100.0);
    }

    #[test]
    fn summation_is_order_independent() {
        let a = vec![entry(1.0, 2.0, 3.0, 4.0), entry(10.0, 20.0, 30.0, 40.0)];
        let b: Vec<_> = a.iter().rev().cloned().collect();

        assert_eq!(daily_summary(&a), daily_summary(&b));
    }
}
