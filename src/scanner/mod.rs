// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Batch logo scanner
//!
//! Drives one annotation call per file reference and renders the
//! results as console lines. A failing file never stops the batch:
//! every failure, panics included, is classified and reported at the
//! per-file boundary.

pub mod failure;
pub mod policy;
pub mod report;
pub mod scores;

pub use failure::ScanFailure;
pub use policy::{ConcurrentPolicy, ExecutionPolicy, PolicyKind, SequentialPolicy};
pub use report::{ConsoleReporter, MemoryReporter, ScanEvent, ScanReporter};
pub use scores::ScoreAccumulator;

use futures::FutureExt;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::vision::{AnnotateError, AnnotationResult, LogoAnnotator};

/// Reference to an image to scan: a local path or a remote URI
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileReference(String);

impl FileReference {
    pub fn new(file: impl Into<String>) -> Self {
        Self(file.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FileReference {
    fn from(file: &str) -> Self {
        Self::new(file)
    }
}

impl From<String> for FileReference {
    fn from(file: String) -> Self {
        Self(file)
    }
}

impl AsRef<str> for FileReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Runs logo detection over a list of files and reports per-file results
pub struct LogoScanner {
    annotator: Arc<dyn LogoAnnotator>,
    reporter: Arc<dyn ScanReporter>,
}

impl LogoScanner {
    pub fn new(annotator: Arc<dyn LogoAnnotator>, reporter: Arc<dyn ScanReporter>) -> Self {
        Self {
            annotator,
            reporter,
        }
    }

    /// Scan every file under `policy`
    ///
    /// Returns once every file has been processed, whatever the
    /// individual outcomes.
    pub async fn scan(&self, files: &[FileReference], policy: &dyn ExecutionPolicy) {
        info!(
            "Scanning {} files with {} policy via {}",
            files.len(),
            policy.name(),
            self.annotator.name()
        );
        policy.dispatch(self, files).await;
        debug!("Scan of {} files complete", files.len());
    }

    /// Full lifecycle of one file: start line, annotation call, result or failure lines
    pub async fn process_file(&self, file: &FileReference) {
        let name = file.as_str();
        self.reporter.report(ScanEvent::Started {
            file: name.to_string(),
        });

        let outcome = AssertUnwindSafe(self.annotator.logo_detection(name))
            .catch_unwind()
            .await
            .unwrap_or_else(|_| {
                warn!("Annotator {} panicked on {}", self.annotator.name(), name);
                Err(AnnotateError::Unknown)
            });

        match outcome {
            Ok(result) => self.report_result(name, &result),
            Err(e) => {
                debug!("Logo detection failed for {}: {}", name, e);
                self.reporter.report(ScanEvent::Failed {
                    file: name.to_string(),
                    failure: ScanFailure::classify(&e),
                });
            }
        }
    }

    fn report_result(&self, file: &str, result: &AnnotationResult) {
        let mut scores = ScoreAccumulator::new();
        for logo in result.logos() {
            if let Some(label) = logo.label() {
                self.reporter.report(ScanEvent::LogoFound {
                    file: file.to_string(),
                    description: label.to_string(),
                });
            }
            if let Some(score) = logo.score {
                scores.push(score);
            }
        }

        let event = match scores.mean() {
            Some(average) => ScanEvent::Average {
                file: file.to_string(),
                average,
            },
            None => ScanEvent::NoScoreData {
                file: file.to_string(),
            },
        };
        self.reporter.report(event);
    }
}
