// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Execution policies for driving per-file scans

use async_trait::async_trait;
use clap::ValueEnum;
use tracing::debug;

use super::{FileReference, LogoScanner};

/// Strategy deciding how per-file scans are scheduled
#[async_trait]
pub trait ExecutionPolicy: Send + Sync {
    /// Run `scanner.process_file` for every file
    async fn dispatch(&self, scanner: &LogoScanner, files: &[FileReference]);

    /// Policy name for logging
    fn name(&self) -> &'static str;
}

/// One file at a time, in input order
///
/// The next annotation call starts only after the previous file has
/// printed all of its lines, so output order equals input order.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialPolicy;

#[async_trait]
impl ExecutionPolicy for SequentialPolicy {
    async fn dispatch(&self, scanner: &LogoScanner, files: &[FileReference]) {
        for file in files {
            scanner.process_file(file).await;
        }
    }

    fn name(&self) -> &'static str {
        "sequential"
    }
}

/// Every file initiated up front, each finishing whenever its call settles
///
/// Start lines appear in input order; result lines appear in completion
/// order. There is no cap on in-flight calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConcurrentPolicy;

#[async_trait]
impl ExecutionPolicy for ConcurrentPolicy {
    async fn dispatch(&self, scanner: &LogoScanner, files: &[FileReference]) {
        let futures: Vec<_> = files.iter().map(|f| scanner.process_file(f)).collect();
        debug!("Dispatching {} scans concurrently", futures.len());
        futures::future::join_all(futures).await;
    }

    fn name(&self) -> &'static str {
        "concurrent"
    }
}

/// Policy selector for the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PolicyKind {
    /// Strict one-at-a-time, input-ordered output
    #[default]
    Sequential,
    /// Eager initiation, completion-ordered output
    Concurrent,
}

impl PolicyKind {
    pub fn into_policy(self) -> Box<dyn ExecutionPolicy> {
        match self {
            Self::Sequential => Box::new(SequentialPolicy),
            Self::Concurrent => Box::new(ConcurrentPolicy),
        }
    }
}
