// ABOUTME: Gym equipment analysis payload returned by the vision model
// ABOUTME: Name, usage guidance, safety warnings, and step-by-step instructions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSnap

use serde::{Deserialize, Serialize};

/// Equipment analysis result for a single gym-equipment photo
///
/// Produced by the response parser from AI output; immutable. Field names
/// match the analysis schema the model is prompted with, so this type
/// deserializes directly from the extracted JSON payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GymEquipmentData {
    /// Equipment name
    pub name: String,
    /// Free-text usage guidance
    pub how_to_use: String,
    /// Safety warnings, in model order
    pub warnings: Vec<String>,
    /// Step-by-step instructions, in model order
    pub instructions: Vec<String>,
}
