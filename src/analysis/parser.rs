// ABOUTME: Extracts and validates the JSON payload embedded in a model's free-text reply
// ABOUTME: Outermost-brace extraction with whole-string and fenced-block fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSnap

//! # Response Parser
//!
//! Model replies are not guaranteed to contain *only* JSON: prose before or
//! after the payload is common. Extraction therefore takes the span from the
//! first `{` to the **last** `}` in the reply and decodes that. This
//! outermost-brace policy is the normative behavior, not an accident: it is
//! what defines a "valid" reply. A reply containing two sibling JSON objects
//! will mis-parse under it; the prompts pin a single object.
//!
//! Error taxonomy:
//! - no `{…}` span, or the span is not syntactically valid JSON →
//!   [`ErrorCode::ParseFailed`](nutrisnap_core::ErrorCode)
//! - decoded object missing required fields or carrying wrong field types →
//!   [`ErrorCode::ValidationFailed`](nutrisnap_core::ErrorCode)

use serde_json::Value;
use tracing::warn;

use nutrisnap_core::{AppError, AppResult, GymEquipmentData, Macro, NutritionData};

use super::{AnalysisKind, AnalysisPayload};

/// Extract the JSON object embedded in a model reply
///
/// Three stages, first hit wins:
/// 1. the trimmed reply parses as a JSON object on its own;
/// 2. the span from the first `{` to the last `}` parses;
/// 3. a fenced ```json block parses (recursing into the fence body).
fn extract_json_object(text: &str) -> AppResult<Value> {
    let trimmed = text.trim();
    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        if value.is_object() {
            return Ok(value);
        }
    }

    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => {
            let span = &text[start..=end];
            match serde_json::from_str::<Value>(span) {
                Ok(value) => Ok(value),
                Err(e) => fenced_json_block(text).map_or_else(
                    || {
                        Err(AppError::parse(format!(
                            "embedded JSON span is malformed: {e}"
                        )))
                    },
                    extract_json_object,
                ),
            }
        }
        _ => fenced_json_block(text).map_or_else(
            || Err(AppError::parse("no JSON object found in model reply")),
            extract_json_object,
        ),
    }
}

/// Body of the first fenced ```json block, if the reply carries one
fn fenced_json_block(text: &str) -> Option<&str> {
    let start = text.find("```json")?;
    let body = &text[start + 7..];
    let end = body.find("```")?;
    Some(body[..end].trim())
}

/// Parse a model reply into a validated nutrition payload
///
/// # Errors
///
/// Returns a parse error when no JSON object can be extracted, and a
/// validation error when the object is missing required fields, has wrong
/// field types, or carries a negative macro value.
pub fn parse_nutrition_response(text: &str) -> AppResult<NutritionData> {
    let value = extract_json_object(text)?;
    let data: NutritionData = serde_json::from_value(value).map_err(|e| {
        warn!(error = %e, "nutrition payload failed validation");
        AppError::validation(format!("nutrition payload failed validation: {e}"))
    })?;

    for m in Macro::ALL {
        if data.macro_value(m) < 0.0 {
            return Err(AppError::validation(format!(
                "{} must be non-negative",
                m.as_str()
            )));
        }
    }

    Ok(data)
}

/// Parse a model reply into a validated equipment payload
///
/// # Errors
///
/// Returns a parse error when no JSON object can be extracted, and a
/// validation error when the object is missing required fields or has wrong
/// field types.
pub fn parse_equipment_response(text: &str) -> AppResult<GymEquipmentData> {
    let value = extract_json_object(text)?;
    serde_json::from_value(value).map_err(|e| {
        warn!(error = %e, "equipment payload failed validation");
        AppError::validation(format!("equipment payload failed validation: {e}"))
    })
}

/// Parse a model reply into the payload for the requested shape
///
/// # Errors
///
/// Same error taxonomy as the shape-specific parsers.
pub fn parse_analysis_response(kind: AnalysisKind, text: &str) -> AppResult<AnalysisPayload> {
    match kind {
        AnalysisKind::Nutrition => parse_nutrition_response(text).map(AnalysisPayload::Nutrition),
        AnalysisKind::Equipment => parse_equipment_response(text).map(AnalysisPayload::Equipment),
    }
}
