// ABOUTME: Core data models shared across the NutriSnap crates
// ABOUTME: Nutrition entries, equipment guides, and user profile definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSnap

//! Data contracts for the nutrition tracker.
//!
//! These types mirror the documents exchanged with the external persistence
//! collaborator (snake_case JSON for analysis payloads, camelCase for stored
//! documents) and are immutable once created, except for `UserProfile`, which
//! the profile-edit flow mutates.

/// Gym equipment analysis payload
pub mod equipment;

/// Nutrition payloads, entries, and daily summaries
pub mod nutrition;

/// User profile, goal sets, and goal normalization
pub mod profile;

pub use equipment::GymEquipmentData;
pub use nutrition::{DailySummary, Macro, NewNutritionEntry, NutritionData, NutritionEntry};
pub use profile::{ActivityLevel, EditableGoalSet, EditableNumber, Gender, GoalSet, UserProfile};
