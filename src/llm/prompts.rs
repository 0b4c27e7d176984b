// ABOUTME: Instruction prompts for the two image-analysis shapes
// ABOUTME: Nutrition and gym-equipment prompts that pin the expected JSON schema
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSnap

//! # Analysis Prompts
//!
//! Instruction prompts sent alongside each image. Each prompt pins the JSON
//! schema the response parser expects, and asks the model to reply with JSON
//! only; the parser still tolerates surrounding prose.

/// Prompt for food photos: nutrition estimation in the nutrition schema
pub const FOOD_ANALYSIS_PROMPT: &str = "\
Analyze this food image and provide nutrition information in the following JSON format:
{
  \"calories\": number,
  \"protein\": number,
  \"fat\": number,
  \"carbohydrates\": number,
  \"vitamins\": [string],
  \"minerals\": [string]
}

Provide realistic estimates based on visible portions. Return only valid JSON.";

/// Prompt for gym-equipment photos: usage guidance in the equipment schema
pub const EQUIPMENT_ANALYSIS_PROMPT: &str = "\
Analyze this gym equipment image and provide information in the following JSON format:
{
  \"name\": string,
  \"how_to_use\": string,
  \"warnings\": [string],
  \"instructions\": [string]
}

Provide practical, safety-focused information. Return only valid JSON.";
