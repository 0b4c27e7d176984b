// ABOUTME: Environment-based application configuration
// ABOUTME: Reads Gemini credentials, model override, and logging settings from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSnap

//! Environment-only configuration.
//!
//! All runtime configuration arrives through environment variables; there is
//! no configuration file. Missing required variables fail fast at startup
//! with a [`ErrorCode::ConfigError`](nutrisnap_core::ErrorCode) rather than
//! at first use.

use std::env;

use nutrisnap_core::{AppError, AppResult};

use crate::llm::gemini::{DEFAULT_MODEL, GEMINI_API_KEY_ENV};
use crate::logging::LoggingConfig;

/// Environment variable overriding the default Gemini model
pub const GEMINI_MODEL_ENV: &str = "GEMINI_MODEL";

/// Application configuration assembled from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Gemini API key
    pub gemini_api_key: String,
    /// Gemini model identifier
    pub gemini_model: String,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `GEMINI_API_KEY` is not set.
    pub fn from_env() -> AppResult<Self> {
        let gemini_api_key = env::var(GEMINI_API_KEY_ENV).map_err(|_| {
            AppError::config(format!("{GEMINI_API_KEY_ENV} environment variable not set"))
        })?;

        let gemini_model =
            env::var(GEMINI_MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_owned());

        Ok(Self {
            gemini_api_key,
            gemini_model,
            logging: LoggingConfig::from_env(),
        })
    }
}
