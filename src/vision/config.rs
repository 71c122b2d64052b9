// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the vision annotation client

use std::env;

/// Default Cloud Vision annotate endpoint
pub const DEFAULT_ENDPOINT: &str = "https://vision.googleapis.com/v1/images:annotate";

/// Configuration for the vision annotation client
#[derive(Debug, Clone)]
pub struct VisionConfig {
    /// Full URL of the `images:annotate` endpoint
    pub endpoint: String,
    /// API key, sent as the `key` query parameter
    pub api_key: Option<String>,
    /// OAuth access token, sent as a bearer token
    pub access_token: Option<String>,
    /// Maximum logos returned per image
    pub max_results: u32,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl VisionConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            endpoint: env::var("GOOGLE_VISION_ENDPOINT").unwrap_or(defaults.endpoint),
            api_key: non_empty_var("GOOGLE_API_KEY"),
            access_token: non_empty_var("GOOGLE_ACCESS_TOKEN"),
            max_results: env::var("VISION_MAX_RESULTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_results),
            request_timeout_ms: env::var("VISION_REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_ms),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("Vision endpoint must not be empty".to_string());
        }
        if let Err(e) = url::Url::parse(&self.endpoint) {
            return Err(format!("Invalid vision endpoint '{}': {}", self.endpoint, e));
        }
        if self.max_results == 0 {
            return Err("max_results must be greater than 0".to_string());
        }
        if self.request_timeout_ms == 0 {
            return Err("Request timeout must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Check if any credential is configured
    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some() || self.access_token.is_some()
    }
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            access_token: None,
            max_results: 10,
            request_timeout_ms: 30000,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
