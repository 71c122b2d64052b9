// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Classification of per-file annotation failures

use crate::vision::{AnnotateError, NOT_FOUND_CODE};

/// How a failed file is reported
///
/// Built once from the external failure, in precedence order:
/// not-found code, then message, then neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanFailure {
    /// The referenced file does not exist
    NotFound,
    /// The failure carried a human-readable message
    Messaged(String),
    /// The failure carried neither a recognizable code nor a message
    Unknown,
}

impl ScanFailure {
    /// Classify an annotation failure
    pub fn classify(error: &AnnotateError) -> Self {
        if error.code() == Some(NOT_FOUND_CODE) {
            return Self::NotFound;
        }
        match error.message() {
            Some(message) => Self::Messaged(message),
            None => Self::Unknown,
        }
    }
}

impl From<&AnnotateError> for ScanFailure {
    fn from(error: &AnnotateError) -> Self {
        Self::classify(error)
    }
}
