// ABOUTME: Persistence and snapshot-subscription collaborator contracts
// ABOUTME: Async traits for entry and profile stores plus the snapshot receiver
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSnap

//! # Store Contracts
//!
//! The persistence collaborator owns entry and profile documents; this module
//! pins the interface the core consumes. Subscriptions deliver the **complete
//! current snapshot** on every change, never a delta: the aggregator has no
//! incremental mode and is always re-run against full state. Dropping an
//! [`EntrySubscription`] releases the subscription, which is the only
//! resource-lifecycle concern in the system.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use tokio::sync::watch;

use nutrisnap_core::{AppError, AppResult, NewNutritionEntry, NutritionEntry, UserProfile};

/// Persistence contract for nutrition entries
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Persist a new entry; the store assigns the identifier
    async fn save_entry(&self, entry: NewNutritionEntry) -> AppResult<NutritionEntry>;

    /// All entries for one user and one calendar date, newest first
    async fn entries_for_day(&self, user_id: &str, date: &str) -> AppResult<Vec<NutritionEntry>>;

    /// Subscribe to snapshot deliveries for one user and one calendar date
    async fn subscribe(&self, user_id: &str, date: &str) -> AppResult<EntrySubscription>;
}

/// Persistence contract for user profiles
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch a profile document, if one exists
    async fn profile(&self, user_id: &str) -> AppResult<Option<UserProfile>>;

    /// Create or replace a profile document
    async fn upsert_profile(&self, user_id: &str, profile: UserProfile) -> AppResult<()>;
}

/// Receiver half of an entry subscription
///
/// Each delivery is the complete entry list for the subscribed user and
/// date. Dropping the receiver releases the subscription.
#[derive(Debug)]
pub struct EntrySubscription {
    rx: watch::Receiver<Vec<NutritionEntry>>,
}

impl EntrySubscription {
    pub(crate) const fn new(rx: watch::Receiver<Vec<NutritionEntry>>) -> Self {
        Self { rx }
    }

    /// The most recently delivered snapshot
    #[must_use]
    pub fn snapshot(&self) -> Vec<NutritionEntry> {
        self.rx.borrow().clone()
    }

    /// Wait for the next delivery and return the new snapshot
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store side has shut down.
    pub async fn changed(&mut self) -> AppResult<Vec<NutritionEntry>> {
        self.rx
            .changed()
            .await
            .map_err(|_| AppError::storage("entry subscription closed"))?;
        Ok(self.rx.borrow().clone())
    }
}
