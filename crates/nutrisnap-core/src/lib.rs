// ABOUTME: Core types and constants for the NutriSnap nutrition tracker
// ABOUTME: Foundation crate with error handling, data models, and goal defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSnap

#![deny(unsafe_code)]

//! # NutriSnap Core
//!
//! Foundation crate providing shared types and constants for the NutriSnap
//! nutrition tracker. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Goal defaults and date/time wire formats
//! - **models**: Data contracts (`NutritionData`, `NutritionEntry`, profiles, goals)

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (nutrition, equipment, user profile)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::equipment::GymEquipmentData;
pub use models::nutrition::{
    DailySummary, Macro, NewNutritionEntry, NutritionData, NutritionEntry,
};
pub use models::profile::{
    ActivityLevel, EditableGoalSet, EditableNumber, Gender, GoalSet, UserProfile,
};
