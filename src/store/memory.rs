// ABOUTME: In-process implementation of the entry and profile store contracts
// ABOUTME: DashMap-backed documents with watch-channel snapshot fan-out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSnap

//! In-memory store used by tests and demos.
//!
//! Not a durability layer: the real document store remains an external
//! collaborator. This implementation exists so the analysis service and the
//! aggregation path can be exercised end-to-end without one.

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::watch;
use tracing::debug;
use uuid::Uuid;

use nutrisnap_core::{AppResult, NewNutritionEntry, NutritionEntry, UserProfile};

use super::{EntryStore, EntrySubscription, ProfileStore};

type DayKey = (String, String);

/// In-process entry and profile store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<DayKey, Vec<NutritionEntry>>,
    watchers: DashMap<DayKey, watch::Sender<Vec<NutritionEntry>>>,
    profiles: DashMap<String, UserProfile>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn day_snapshot(&self, key: &DayKey) -> Vec<NutritionEntry> {
        self.entries
            .get(key)
            .map(|day| day.value().clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl EntryStore for MemoryStore {
    async fn save_entry(&self, entry: NewNutritionEntry) -> AppResult<NutritionEntry> {
        let entry = entry.into_entry(Uuid::new_v4().to_string());
        let key = (entry.user_id.clone(), entry.date.clone());

        let snapshot = {
            let mut day = self.entries.entry(key.clone()).or_default();
            day.push(entry.clone());
            // Newest first, matching the subscription ordering contract
            day.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
            day.value().clone()
        };

        if let Some(tx) = self.watchers.get(&key) {
            tx.send_replace(snapshot);
        }

        debug!(user_id = %entry.user_id, date = %entry.date, "saved nutrition entry");
        Ok(entry)
    }

    async fn entries_for_day(&self, user_id: &str, date: &str) -> AppResult<Vec<NutritionEntry>> {
        Ok(self.day_snapshot(&(user_id.to_owned(), date.to_owned())))
    }

    async fn subscribe(&self, user_id: &str, date: &str) -> AppResult<EntrySubscription> {
        let key = (user_id.to_owned(), date.to_owned());
        let snapshot = self.day_snapshot(&key);

        let tx = self
            .watchers
            .entry(key)
            .or_insert_with(|| watch::channel(snapshot).0);

        Ok(EntrySubscription::new(tx.subscribe()))
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn profile(&self, user_id: &str) -> AppResult<Option<UserProfile>> {
        Ok(self.profiles.get(user_id).map(|p| p.value().clone()))
    }

    async fn upsert_profile(&self, user_id: &str, profile: UserProfile) -> AppResult<()> {
        self.profiles.insert(user_id.to_owned(), profile);
        Ok(())
    }
}
