// ABOUTME: Pure computation core: daily macro aggregation and goal progress
// ABOUTME: Synchronous, deterministic functions with no I/O and no shared state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSnap

//! # Intelligence
//!
//! The deterministic business logic of the tracker: folding a day's entries
//! into macro totals and mapping totals against goals into render-ready
//! percentages. Both are synchronous pure functions; callers re-run them
//! against the complete current snapshot on every subscription delivery.

mod daily_summary;
mod goal_progress;

pub use daily_summary::daily_summary;
pub use goal_progress::{goal_progress, progress_percentage, MacroProgress};
