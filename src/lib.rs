// ABOUTME: Main library entry point for the NutriSnap nutrition tracking core
// ABOUTME: AI food analysis, daily macro aggregation, and goal progress computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSnap

#![deny(unsafe_code)]

//! # NutriSnap
//!
//! The core of a photo-based nutrition tracker: users photograph food or gym
//! equipment, a vision model returns structured data, and the result is
//! persisted per user and rendered as daily totals and goal progress bars.
//!
//! ## Architecture
//!
//! - **analysis**: response parsing for model replies and the
//!   capture→analyze→persist orchestration
//! - **intelligence**: pure computations (daily aggregation, goal progress)
//! - **llm**: vision provider abstraction and the Gemini implementation
//! - **store**: persistence and snapshot-subscription collaborator contracts
//! - **config** / **logging**: environment-driven configuration and tracing setup
//!
//! The three core computations (response parsing, aggregation, goal progress)
//! are synchronous pure functions; async appears only at the collaborator
//! seams (vision provider, store).
//!
//! ## Example
//!
//! ```rust,no_run
//! use nutrisnap::analysis::AnalysisService;
//! use nutrisnap::llm::{GeminiProvider, ImagePayload};
//! use nutrisnap::store::MemoryStore;
//! use nutrisnap_core::{AppResult, GoalSet};
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let provider = GeminiProvider::from_env()?;
//!     let store = MemoryStore::new();
//!     let service = AnalysisService::new(provider, store);
//!
//!     let image = ImagePayload::from_jpeg_bytes(&[/* camera bytes */]);
//!     let entry = service.analyze_and_log_food("user-1", &image).await?;
//!     let progress = service
//!         .daily_progress("user-1", &entry.date, &GoalSet::default())
//!         .await?;
//!     println!("{} kcal so far", progress.summary.calories);
//!     Ok(())
//! }
//! ```

/// Response parsing and the photo-analysis service
pub mod analysis;

/// Environment-driven application configuration
pub mod config;

/// Display-layer formatting helpers
pub mod formatters;

/// Pure computations: daily aggregation and goal progress
pub mod intelligence;

/// Vision provider abstraction and the Gemini implementation
pub mod llm;

/// Logging configuration and tracing subscriber setup
pub mod logging;

/// Persistence and subscription collaborator contracts
pub mod store;

pub use nutrisnap_core as core;
