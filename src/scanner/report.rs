// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Console lines emitted while scanning
//!
//! Every user-visible line is a `ScanEvent`; its `Display` output is the
//! exact console text. Reporters decide where the lines go.

use std::fmt;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

use super::failure::ScanFailure;

/// One user-visible line of scan output
#[derive(Debug, Clone, PartialEq)]
pub enum ScanEvent {
    /// Processing of a file has started
    Started { file: String },
    /// A labelled logo was found
    LogoFound { file: String, description: String },
    /// Mean confidence over the scored annotations
    Average { file: String, average: f64 },
    /// The file produced no scored annotation
    NoScoreData { file: String },
    /// The file failed
    Failed { file: String, failure: ScanFailure },
}

impl ScanEvent {
    /// File the event belongs to
    pub fn file(&self) -> &str {
        match self {
            Self::Started { file }
            | Self::LogoFound { file, .. }
            | Self::Average { file, .. }
            | Self::NoScoreData { file }
            | Self::Failed { file, .. } => file,
        }
    }

    /// Whether the line belongs on the error stream
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Self::Failed {
                failure: ScanFailure::Messaged(_) | ScanFailure::Unknown,
                ..
            }
        )
    }
}

impl fmt::Display for ScanEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started { file } => write!(f, "Running logo detection on {}", file),
            Self::LogoFound { file, description } => {
                write!(f, "\"{}\" found in in file {}", description, file)
            }
            Self::Average { file, average } => write!(f, "Average score for {}: {}", file, average),
            Self::NoScoreData { file } => write!(f, "No score data for {}", file),
            Self::Failed { file, failure } => match failure {
                ScanFailure::NotFound => write!(f, "File {} not found", file),
                ScanFailure::Messaged(message) => {
                    write!(f, "Error processing {}: {}", file, message)
                }
                ScanFailure::Unknown => {
                    write!(f, "An unknown error occurred processing {}", file)
                }
            },
        }
    }
}

/// Port receiving scan output lines
pub trait ScanReporter: Send + Sync {
    /// Called once per line, in emission order
    fn report(&self, event: ScanEvent);
}

/// Prints lines to stdout, failure messages to stderr
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ScanReporter for ConsoleReporter {
    fn report(&self, event: ScanEvent) {
        // A closed pipe must not abort the batch
        let _ = if event.is_error() {
            writeln!(std::io::stderr().lock(), "{}", event)
        } else {
            writeln!(std::io::stdout().lock(), "{}", event)
        };
    }
}

/// Captures lines in memory
#[derive(Debug, Default)]
pub struct MemoryReporter {
    events: Mutex<Vec<ScanEvent>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured events in emission order
    pub fn events(&self) -> Vec<ScanEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// All captured lines as rendered text
    pub fn lines(&self) -> Vec<String> {
        self.events().iter().map(ToString::to_string).collect()
    }

    /// Captured lines belonging to `file`
    pub fn lines_for(&self, file: &str) -> Vec<String> {
        self.events()
            .iter()
            .filter(|e| e.file() == file)
            .map(ToString::to_string)
            .collect()
    }
}

impl ScanReporter for MemoryReporter {
    fn report(&self, event: ScanEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
