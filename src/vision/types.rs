// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for logo detection

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Error code carried by a failure whose local image file does not exist
pub const NOT_FOUND_CODE: &str = "ENOENT";

/// Error code carried by a failure whose local image file cannot be read
pub const PERMISSION_DENIED_CODE: &str = "EACCES";

/// A single logo detected by the annotation service
///
/// Every field may be absent; consumers must branch on presence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoAnnotation {
    /// Knowledge graph entity id, if the service returned one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid: Option<String>,
    /// Human-readable label of the logo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Confidence in [0, 1]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl LogoAnnotation {
    /// Build an annotation with a label and a score
    pub fn new(description: impl Into<String>, score: f64) -> Self {
        Self {
            mid: None,
            description: Some(description.into()),
            score: Some(score),
        }
    }

    /// Label, treating an empty string as absent
    pub fn label(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// Annotation result for one file reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationResult {
    /// Detected logos; `None` when the service omitted the list entirely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_annotations: Option<Vec<LogoAnnotation>>,
}

impl AnnotationResult {
    /// Wrap a list of annotations
    pub fn with_logos(logos: Vec<LogoAnnotation>) -> Self {
        Self {
            logo_annotations: Some(logos),
        }
    }

    /// Annotations in service order, empty when absent
    pub fn logos(&self) -> &[LogoAnnotation] {
        self.logo_annotations.as_deref().unwrap_or_default()
    }
}

/// Errors raised by the annotation capability
#[derive(Debug, Error)]
pub enum AnnotateError {
    /// Local image could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The service rejected the request or the image
    #[error("Vision API error{}: {}", status.map(|s| format!(" {}", s)).unwrap_or_default(), message.as_deref().unwrap_or("no details"))]
    Service {
        /// HTTP status, when the failure was an HTTP error response
        status: Option<u16>,
        /// Machine-readable status name (e.g. `INVALID_ARGUMENT`)
        code: Option<String>,
        /// Human-readable message
        message: Option<String>,
    },

    /// Request timed out
    #[error("Vision request timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// Network-level failure before a response arrived
    #[error("Vision transport error: {0}")]
    Transport(String),

    /// Response body did not have the expected shape
    #[error("Malformed vision response: {0}")]
    Malformed(String),

    /// Failure without a code or a message
    #[error("Annotation failed without details")]
    Unknown,
}

impl AnnotateError {
    /// Build an I/O error for `path`
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Machine-readable code, if the failure carries one
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Io { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => Some(NOT_FOUND_CODE),
                io::ErrorKind::PermissionDenied => Some(PERMISSION_DENIED_CODE),
                _ => None,
            },
            Self::Service { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Human-readable message, if the failure carries a non-empty one
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Service { message, .. } => message.clone().filter(|m| !m.trim().is_empty()),
            Self::Unknown => None,
            Self::Transport(m) | Self::Malformed(m) if m.trim().is_empty() => None,
            other => Some(other.to_string()),
        }
    }
}
