// ABOUTME: Orchestrates capture output through analysis, parsing, and persistence
// ABOUTME: One photo in, one validated and stored record out; failures persist nothing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSnap

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use nutrisnap_core::{
    AppResult, DailySummary, GoalSet, GymEquipmentData, NewNutritionEntry, NutritionEntry,
};

use crate::intelligence::{daily_summary, goal_progress, MacroProgress};
use crate::llm::{prompts, ImagePayload, VisionProvider};
use crate::store::EntryStore;

use super::parser;

/// Daily totals plus per-macro progress, ready for the display layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyProgress {
    /// Calendar date the totals cover, `YYYY-MM-DD`
    pub date: String,
    /// Accumulated macro totals
    pub summary: DailySummary,
    /// Per-macro progress rows, in display order
    pub macros: Vec<MacroProgress>,
}

/// Photo-analysis orchestration over a vision provider and an entry store
///
/// A failed parse or validation surfaces the error and persists nothing, so
/// previously displayed state stays intact until a successful analysis
/// replaces it.
#[derive(Debug)]
pub struct AnalysisService<P, S> {
    provider: P,
    store: S,
}

impl<P: VisionProvider, S: EntryStore> AnalysisService<P, S> {
    /// Create a service over a vision provider and an entry store
    pub const fn new(provider: P, store: S) -> Self {
        Self { provider, store }
    }

    /// Analyze a food photo and persist the resulting entry
    ///
    /// # Errors
    ///
    /// Propagates provider failures, parse/validation failures, and store
    /// failures. Nothing is persisted unless the payload validated.
    #[instrument(skip(self, image), fields(user_id = %user_id))]
    pub async fn analyze_and_log_food(
        &self,
        user_id: &str,
        image: &ImagePayload,
    ) -> AppResult<NutritionEntry> {
        let reply = self
            .provider
            .describe_image(prompts::FOOD_ANALYSIS_PROMPT, image)
            .await?;

        let nutrition = parser::parse_nutrition_response(&reply).inspect_err(|e| {
            warn!(error = %e, "food analysis reply rejected");
        })?;

        let entry = self
            .store
            .save_entry(NewNutritionEntry::now(user_id, nutrition))
            .await?;

        info!(entry_id = %entry.id, calories = entry.nutrition.calories, "logged food entry");
        Ok(entry)
    }

    /// Analyze a gym-equipment photo
    ///
    /// Equipment lookups are not persisted; the guidance goes straight to the
    /// display layer.
    ///
    /// # Errors
    ///
    /// Propagates provider failures and parse/validation failures.
    #[instrument(skip(self, image))]
    pub async fn analyze_equipment(&self, image: &ImagePayload) -> AppResult<GymEquipmentData> {
        let reply = self
            .provider
            .describe_image(prompts::EQUIPMENT_ANALYSIS_PROMPT, image)
            .await?;

        parser::parse_equipment_response(&reply).inspect_err(|e| {
            warn!(error = %e, "equipment analysis reply rejected");
        })
    }

    /// Current daily totals and goal progress for one user and date
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn daily_progress(
        &self,
        user_id: &str,
        date: &str,
        goals: &GoalSet,
    ) -> AppResult<DailyProgress> {
        let entries = self.store.entries_for_day(user_id, date).await?;
        let summary = daily_summary(&entries);

        Ok(DailyProgress {
            date: date.to_owned(),
            summary,
            macros: goal_progress(&summary, goals),
        })
    }
}
