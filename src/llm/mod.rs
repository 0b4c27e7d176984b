// ABOUTME: Vision provider abstraction for pluggable AI model integration
// ABOUTME: Defines the contract for image-analysis providers and the image payload type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSnap

//! # Vision Provider Service Provider Interface
//!
//! Contract the AI-analysis collaborator must satisfy: given an instruction
//! prompt and an image, return the model's free-text reply. The reply is not
//! interpreted here; the [`analysis`](crate::analysis) module extracts and
//! validates the embedded JSON payload.
//!
//! ## Example
//!
//! ```rust,no_run
//! use nutrisnap::llm::{ImagePayload, VisionProvider};
//!
//! async fn example(provider: &dyn VisionProvider) {
//!     let image = ImagePayload::from_jpeg_bytes(&[/* camera bytes */]);
//!     let reply = provider.describe_image("What is this?", &image).await;
//! }
//! ```

pub mod gemini;
pub mod prompts;

pub use gemini::GeminiProvider;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use nutrisnap_core::AppResult;

/// An image ready to be sent to a vision model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    /// MIME type of the encoded image
    pub mime_type: String,
    /// Base64-encoded image bytes
    pub data_base64: String,
}

impl ImagePayload {
    /// Wrap already-encoded JPEG data
    #[must_use]
    pub fn jpeg_base64(data_base64: impl Into<String>) -> Self {
        Self {
            mime_type: "image/jpeg".to_owned(),
            data_base64: data_base64.into(),
        }
    }

    /// Encode raw JPEG bytes from the capture collaborator
    #[must_use]
    pub fn from_jpeg_bytes(bytes: &[u8]) -> Self {
        Self::jpeg_base64(BASE64.encode(bytes))
    }
}

/// Vision model provider trait
///
/// Implement this trait to add a new image-analysis backend. The design
/// follows the async trait pattern for compatibility with the tokio runtime.
#[async_trait]
pub trait VisionProvider: Send + Sync {
    /// Unique provider identifier (e.g., "gemini")
    fn name(&self) -> &'static str;

    /// Model identifier used when the caller does not override it
    fn default_model(&self) -> &str;

    /// Send a prompt plus one image and return the model's text reply
    async fn describe_image(&self, prompt: &str, image: &ImagePayload) -> AppResult<String>;

    /// Check that the provider is reachable and the API key is valid
    async fn health_check(&self) -> AppResult<bool>;
}
