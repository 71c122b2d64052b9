// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod cli;
pub mod scanner;
pub mod vision;

pub use scanner::{
    ConcurrentPolicy, ExecutionPolicy, FileReference, LogoScanner, PolicyKind, ScanEvent,
    ScanFailure, ScanReporter, SequentialPolicy,
};
pub use vision::{AnnotateError, AnnotationResult, GoogleVisionClient, LogoAnnotation, LogoAnnotator};
