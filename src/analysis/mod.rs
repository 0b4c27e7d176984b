// ABOUTME: Photo-analysis pipeline: response parsing plus the analyze-and-persist service
// ABOUTME: Turns free-text model replies into validated records and stored entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSnap

//! # Analysis Pipeline
//!
//! The path from a captured photo to displayed data: an instruction prompt
//! and the image go to the vision provider, the reply comes back as free
//! text, the [`parser`] extracts and validates the embedded JSON payload,
//! and the [`AnalysisService`] persists the result.

pub mod parser;
mod service;

pub use parser::{parse_analysis_response, parse_equipment_response, parse_nutrition_response};
pub use service::{AnalysisService, DailyProgress};

use serde::{Deserialize, Serialize};

use nutrisnap_core::{GymEquipmentData, NutritionData};

/// The two analysis shapes a model reply can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    /// Food photo analyzed for macro content
    Nutrition,
    /// Gym-equipment photo analyzed for usage guidance
    Equipment,
}

/// A validated analysis payload, tagged by shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisPayload {
    /// Nutrition estimate for a food photo
    Nutrition(NutritionData),
    /// Usage guidance for a gym-equipment photo
    Equipment(GymEquipmentData),
}
