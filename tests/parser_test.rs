// ABOUTME: Response parser tests covering extraction tolerance and validation rejection
// ABOUTME: Prose-wrapped payloads, round-trips, and the parse/validation error split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSnap

//! Response parser integration tests
//!
//! Covers the extraction tolerance policy (prose before/after the payload),
//! the round-trip property for valid payloads, and the split between parse
//! errors (no decodable JSON) and validation errors (wrong shape).

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrisnap::analysis::{
    parse_analysis_response, parse_equipment_response, parse_nutrition_response, AnalysisKind,
    AnalysisPayload,
};
use nutrisnap_core::{ErrorCode, GymEquipmentData};

mod common;

// ============================================================================
// EXTRACTION TOLERANCE
// ============================================================================

#[test]
fn payload_wrapped_in_prose_round_trips() {
    let data = common::nutrition(420.0, 31.5, 12.0, 38.0);
    let wrapped = format!(
        "Sure! Here is the nutrition estimate you asked for:\n\n{}\n\nLet me know if you need anything else.",
        serde_json::to_string(&data).unwrap()
    );

    let parsed = parse_nutrition_response(&wrapped).unwrap();
    assert_eq!(parsed, data);
}

#[test]
fn bare_json_reply_parses() {
    let reply = r#"{"calories": 500, "protein": 20, "fat": 10, "carbohydrates": 60, "vitamins": ["A"], "minerals": []}"#;
    let parsed = parse_nutrition_response(reply).unwrap();

    assert!((parsed.calories - 500.0).abs() < f64::EPSILON);
    assert_eq!(parsed.vitamins, vec!["A".to_owned()]);
}

#[test]
fn fenced_json_reply_parses() {
    let reply = "Here is the analysis:\n```json\n{\"calories\": 250, \"protein\": 8, \"fat\": 4, \"carbohydrates\": 30, \"vitamins\": [], \"minerals\": []}\n```\n";
    let parsed = parse_nutrition_response(reply).unwrap();

    assert!((parsed.carbohydrates - 30.0).abs() < f64::EPSILON);
}

#[test]
fn equipment_payload_round_trips() {
    let data = GymEquipmentData {
        name: "Rowing machine".to_owned(),
        how_to_use: "Strap in, drive with the legs, finish with the arms.".to_owned(),
        warnings: vec!["Keep your back straight".to_owned()],
        instructions: vec!["Set the damper".to_owned(), "Row".to_owned()],
    };
    let wrapped = format!("Here you go: {}", serde_json::to_string(&data).unwrap());

    let parsed = parse_equipment_response(&wrapped).unwrap();
    assert_eq!(parsed, data);
}

#[test]
fn tagged_dispatch_selects_the_requested_shape() {
    let reply = r#"{"name": "Bench", "how_to_use": "Lie down", "warnings": [], "instructions": []}"#;

    match parse_analysis_response(AnalysisKind::Equipment, reply).unwrap() {
        AnalysisPayload::Equipment(equipment) => assert_eq!(equipment.name, "Bench"),
        AnalysisPayload::Nutrition(_) => panic!("wrong payload shape"),
    }
}

// ============================================================================
// PARSE ERRORS
// ============================================================================

#[test]
fn reply_without_braces_is_a_parse_error() {
    let err = parse_nutrition_response("I cannot tell what this food is.").unwrap_err();
    assert_eq!(err.code, ErrorCode::ParseFailed);
}

#[test]
fn malformed_brace_span_is_a_parse_error() {
    let err = parse_nutrition_response("Result: {calories: lots of them}").unwrap_err();
    assert_eq!(err.code, ErrorCode::ParseFailed);
}

#[test]
fn sibling_objects_fail_under_the_outermost_brace_policy() {
    // First `{` to last `}` spans both objects and is not valid JSON.
    // The prompts pin a single object; two siblings are a model error.
    let err = parse_nutrition_response(r#"{"calories": 1} {"calories": 2}"#).unwrap_err();
    assert_eq!(err.code, ErrorCode::ParseFailed);
}

// ============================================================================
// VALIDATION ERRORS
// ============================================================================

#[test]
fn wrong_field_type_is_a_validation_error() {
    let err = parse_nutrition_response(r#"{"calories": "high"}"#).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationFailed);
}

#[test]
fn missing_required_fields_is_a_validation_error() {
    let err =
        parse_nutrition_response(r#"{"calories": 500, "protein": 20, "fat": 10}"#).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationFailed);
}

#[test]
fn non_string_list_entries_are_a_validation_error() {
    let reply = r#"{"calories": 500, "protein": 20, "fat": 10, "carbohydrates": 60, "vitamins": [1, 2], "minerals": []}"#;
    let err = parse_nutrition_response(reply).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationFailed);
}

#[test]
fn negative_macro_values_are_a_validation_error() {
    let reply = r#"{"calories": -10, "protein": 20, "fat": 10, "carbohydrates": 60, "vitamins": [], "minerals": []}"#;
    let err = parse_nutrition_response(reply).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationFailed);
}

#[test]
fn equipment_with_missing_fields_is_a_validation_error() {
    let err = parse_equipment_response(r#"{"name": "Bench"}"#).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationFailed);
}
