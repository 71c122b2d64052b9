// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Logo detection against an external image annotation service
//!
//! Provides:
//! - The `LogoAnnotator` capability trait
//! - A Cloud Vision REST implementation (`GoogleVisionClient`)
//! - Local path / remote URI image resolution

pub mod annotator;
pub mod config;
pub mod google;
pub mod image_source;
pub mod types;

pub use annotator::LogoAnnotator;
pub use config::VisionConfig;
pub use google::GoogleVisionClient;
pub use image_source::ImageSource;
pub use types::{AnnotateError, AnnotationResult, LogoAnnotation, NOT_FOUND_CODE};
