// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Logo annotation capability trait

use async_trait::async_trait;

use super::types::{AnnotateError, AnnotationResult};

/// Trait for services that detect logos in an image
///
/// The file reference is the sole argument: a local path, a `gs://` URI
/// or an HTTP(S) URL. Implementations may suspend while the remote call
/// is in flight and report every failure through `AnnotateError`.
#[async_trait]
pub trait LogoAnnotator: Send + Sync {
    /// Run logo detection on one image
    async fn logo_detection(&self, file: &str) -> Result<AnnotationResult, AnnotateError>;

    /// Service name for logging
    fn name(&self) -> &'static str;
}
