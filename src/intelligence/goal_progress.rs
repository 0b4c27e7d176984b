// ABOUTME: Maps accumulated macro totals against daily goals into bounded percentages
// ABOUTME: Saturates at 100 and defines a zero goal as zero progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSnap

use serde::{Deserialize, Serialize};

use nutrisnap_core::{DailySummary, GoalSet, Macro};

/// Progress toward one macro goal, ready for a progress bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroProgress {
    /// Which macro this row tracks
    pub kind: Macro,
    /// Accumulated value for the day
    pub current: f64,
    /// The daily goal
    pub goal: f64,
    /// Bounded percentage in `[0, 100]`
    pub percent: f64,
}

/// Progress percentage for one macro, clamped to `[0, 100]`
///
/// Exceeding a goal saturates visually at 100; it is valid, not an error.
/// A non-positive goal is defined as zero progress so the division never
/// happens.
#[must_use]
pub fn progress_percentage(current: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    ((current / goal) * 100.0).clamp(0.0, 100.0)
}

/// Progress for all four macros, in display order
#[must_use]
pub fn goal_progress(summary: &DailySummary, goals: &GoalSet) -> Vec<MacroProgress> {
    Macro::ALL
        .iter()
        .map(|&kind| {
            let current = summary.get(kind);
            let goal = goals.get(kind);
            MacroProgress {
                kind,
                current,
                goal,
                percent: progress_percentage(current, goal),
            }
        })
        .collect()
}
