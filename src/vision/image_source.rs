// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image payload resolution for annotate requests
//!
//! A file reference is either a remote URI the service fetches itself
//! (`gs://`, `http://`, `https://`) or a local path whose bytes are sent
//! inline as base64.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;
use std::io;
use tracing::debug;

use super::types::AnnotateError;

/// Maximum inline image size accepted by the annotate endpoint (20MB)
pub const MAX_IMAGE_SIZE: usize = 20 * 1024 * 1024;

const REMOTE_SCHEMES: &[&str] = &["gs", "http", "https"];

/// Remote image location
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteSource {
    /// URI the service downloads the image from
    pub image_uri: String,
}

/// The `image` object of an annotate request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ImageSource {
    /// Inline base64-encoded bytes
    Content {
        /// Base64 image bytes
        content: String,
    },
    /// Image fetched by the service
    Remote {
        /// Remote location
        source: RemoteSource,
    },
}

impl ImageSource {
    /// Resolve a file reference into a request image
    ///
    /// Local files are read asynchronously; a missing file fails with an
    /// I/O error whose code is `ENOENT`.
    pub async fn resolve(file: &str) -> Result<Self, AnnotateError> {
        if is_remote(file) {
            debug!("Using remote image source: {}", file);
            return Ok(Self::Remote {
                source: RemoteSource {
                    image_uri: file.to_string(),
                },
            });
        }

        let bytes = tokio::fs::read(file)
            .await
            .map_err(|e| AnnotateError::io(file, e))?;
        Self::from_bytes(file, &bytes)
    }

    /// Build an inline source from raw bytes
    pub fn from_bytes(file: &str, bytes: &[u8]) -> Result<Self, AnnotateError> {
        if bytes.is_empty() {
            return Err(AnnotateError::io(
                file,
                io::Error::new(io::ErrorKind::InvalidData, "Image data is empty"),
            ));
        }
        if bytes.len() > MAX_IMAGE_SIZE {
            return Err(AnnotateError::io(
                file,
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!(
                        "Image data is too large: {} bytes (max: {} bytes)",
                        bytes.len(),
                        MAX_IMAGE_SIZE
                    ),
                ),
            ));
        }

        debug!("Encoded {} ({} bytes) inline", file, bytes.len());
        Ok(Self::Content {
            content: STANDARD.encode(bytes),
        })
    }
}

/// Check whether a file reference names a remote image
pub fn is_remote(file: &str) -> bool {
    url::Url::parse(file)
        .map(|u| REMOTE_SCHEMES.contains(&u.scheme()))
        .unwrap_or(false)
}
