// ABOUTME: Application-wide constants organized by domain
// ABOUTME: Default macro goals and wire formats for entry dates and times
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSnap

//! Application constants organized by domain

/// Default per-macro daily goals, applied when a profile goal is unset or unparseable
pub mod goal_defaults {
    /// Default daily calorie goal (kcal)
    pub const CALORIES: f64 = 2000.0;
    /// Default daily protein goal (grams)
    pub const PROTEIN: f64 = 150.0;
    /// Default daily fat goal (grams)
    pub const FAT: f64 = 70.0;
    /// Default daily carbohydrate goal (grams)
    pub const CARBOHYDRATES: f64 = 250.0;
}

/// Wire formats for entry timestamps
pub mod time_format {
    /// Calendar date format used by entry documents (`YYYY-MM-DD`)
    pub const ENTRY_DATE: &str = "%Y-%m-%d";
    /// Wall-clock time format used by entry documents (`HH:MM:SS`)
    pub const ENTRY_TIME: &str = "%H:%M:%S";
}
