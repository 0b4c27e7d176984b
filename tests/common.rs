// ABOUTME: Shared helpers for integration tests
// ABOUTME: Canned nutrition payloads and a scripted vision provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSnap

#![allow(dead_code)]

use async_trait::async_trait;

use nutrisnap::llm::{ImagePayload, VisionProvider};
use nutrisnap_core::{AppResult, NutritionData};

/// A nutrition payload with the given macro values and no micronutrients
pub fn nutrition(calories: f64, protein: f64, fat: f64, carbohydrates: f64) -> NutritionData {
    NutritionData {
        calories,
        protein,
        fat,
        carbohydrates,
        vitamins: vec![],
        minerals: vec![],
    }
}

/// Vision provider that replies with a fixed string
#[derive(Debug)]
pub struct ScriptedProvider {
    reply: String,
}

impl ScriptedProvider {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl VisionProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn default_model(&self) -> &str {
        "scripted-1"
    }

    async fn describe_image(&self, _prompt: &str, _image: &ImagePayload) -> AppResult<String> {
        Ok(self.reply.clone())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
