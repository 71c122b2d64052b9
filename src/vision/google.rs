// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Cloud Vision logo detection client
//!
//! Calls the REST `images:annotate` endpoint with a single
//! `LOGO_DETECTION` feature per request.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use super::annotator::LogoAnnotator;
use super::config::VisionConfig;
use super::image_source::ImageSource;
use super::types::{AnnotateError, AnnotationResult, LogoAnnotation};

const LOGO_DETECTION: &str = "LOGO_DETECTION";

// --- Wire types ---

#[derive(Debug, Serialize)]
struct BatchAnnotateRequest {
    requests: Vec<AnnotateImageRequest>,
}

#[derive(Debug, Serialize)]
struct AnnotateImageRequest {
    image: ImageSource,
    features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    max_results: u32,
}

#[derive(Debug, Deserialize)]
struct BatchAnnotateResponse {
    #[serde(default)]
    responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateImageResponse {
    #[serde(default)]
    logo_annotations: Option<Vec<LogoAnnotation>>,
    #[serde(default)]
    error: Option<RpcStatus>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: RpcStatus,
}

#[derive(Debug, Default, Deserialize)]
struct RpcStatus {
    #[serde(default)]
    code: Option<i32>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

impl RpcStatus {
    fn into_error(self, http_status: Option<u16>) -> AnnotateError {
        let code = self
            .status
            .filter(|s| !s.is_empty())
            .or_else(|| self.code.and_then(rpc_code_name).map(str::to_string));
        AnnotateError::Service {
            status: http_status,
            code,
            message: self.message,
        }
    }
}

/// Canonical name of a google.rpc status code
fn rpc_code_name(code: i32) -> Option<&'static str> {
    let name = match code {
        1 => "CANCELLED",
        2 => "UNKNOWN",
        3 => "INVALID_ARGUMENT",
        4 => "DEADLINE_EXCEEDED",
        5 => "NOT_FOUND",
        6 => "ALREADY_EXISTS",
        7 => "PERMISSION_DENIED",
        8 => "RESOURCE_EXHAUSTED",
        9 => "FAILED_PRECONDITION",
        10 => "ABORTED",
        11 => "OUT_OF_RANGE",
        12 => "UNIMPLEMENTED",
        13 => "INTERNAL",
        14 => "UNAVAILABLE",
        15 => "DATA_LOSS",
        16 => "UNAUTHENTICATED",
        _ => return None,
    };
    Some(name)
}

/// Logo detection client for the Cloud Vision REST API
pub struct GoogleVisionClient {
    client: Client,
    config: VisionConfig,
}

impl GoogleVisionClient {
    /// Create a new client
    pub fn new(config: VisionConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        info!(
            "Vision client configured: endpoint={}, max_results={}",
            config.endpoint, config.max_results
        );

        Ok(Self { client, config })
    }

    /// Endpoint requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    fn map_transport_error(&self, e: reqwest::Error) -> AnnotateError {
        if e.is_timeout() {
            AnnotateError::Timeout {
                timeout_ms: self.config.request_timeout_ms,
            }
        } else {
            AnnotateError::Transport(e.to_string())
        }
    }
}

#[async_trait]
impl LogoAnnotator for GoogleVisionClient {
    async fn logo_detection(&self, file: &str) -> Result<AnnotationResult, AnnotateError> {
        let image = ImageSource::resolve(file).await?;
        let body = BatchAnnotateRequest {
            requests: vec![AnnotateImageRequest {
                image,
                features: vec![Feature {
                    kind: LOGO_DETECTION,
                    max_results: self.config.max_results,
                }],
            }],
        };

        let mut request = self.client.post(&self.config.endpoint).json(&body);
        if let Some(ref key) = self.config.api_key {
            request = request.query(&[("key", key)]);
        }
        if let Some(ref token) = self.config.access_token {
            request = request.bearer_auth(token);
        }

        debug!("Sending logo detection request for {}", file);
        let response = request
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !status.is_success() {
            return Err(parse_error_body(status.as_u16(), &text));
        }

        let result = parse_annotate_response(&text)?;
        debug!("{} logo annotations for {}", result.logos().len(), file);
        Ok(result)
    }

    fn name(&self) -> &'static str {
        "google-vision"
    }
}

/// Turn a non-success HTTP response into a service error
fn parse_error_body(status: u16, body: &str) -> AnnotateError {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return envelope.error.into_error(Some(status));
    }

    let trimmed = body.trim();
    AnnotateError::Service {
        status: Some(status),
        code: None,
        message: (!trimmed.is_empty()).then(|| trimmed.to_string()),
    }
}

/// Extract the single image result from a batch response
fn parse_annotate_response(body: &str) -> Result<AnnotationResult, AnnotateError> {
    let batch: BatchAnnotateResponse = serde_json::from_str(body)
        .map_err(|e| AnnotateError::Malformed(format!("JSON parse error: {}", e)))?;

    let response = batch
        .responses
        .into_iter()
        .next()
        .ok_or_else(|| AnnotateError::Malformed("response contained no results".to_string()))?;

    if let Some(error) = response.error {
        return Err(error.into_error(None));
    }

    Ok(AnnotationResult {
        logo_annotations: response.logo_annotations,
    })
}
