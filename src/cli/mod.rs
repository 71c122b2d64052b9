// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};

use crate::scanner::{ConsoleReporter, FileReference, LogoScanner, PolicyKind};
use crate::vision::{GoogleVisionClient, VisionConfig};

/// Files scanned when none are given on the command line
pub const DEFAULT_FILES: [&str; 3] = [
    "./images/cmu.jpg",
    "./images/logo-types-collection.jpg",
    "./images/not-a-file.jpg",
];

/// Fabstir logo scanner
#[derive(Parser, Debug)]
#[command(name = "fabstir-logo-scan")]
#[command(version)]
#[command(about = "Detect logos in images and report average confidence per file", long_about = None)]
pub struct Cli {
    /// Image paths, gs:// URIs or http(s) URLs to scan
    #[arg(default_values = DEFAULT_FILES)]
    pub files: Vec<String>,

    /// How per-file annotation calls are scheduled
    #[arg(long, value_enum, env = "LOGO_SCAN_POLICY", default_value_t = PolicyKind::Sequential)]
    pub policy: PolicyKind,

    /// Maximum logos returned per image (overrides VISION_MAX_RESULTS)
    #[arg(long)]
    pub max_results: Option<u32>,
}

impl Cli {
    /// File references in command-line order
    pub fn file_references(&self) -> Vec<FileReference> {
        self.files.iter().map(|f| FileReference::new(f.as_str())).collect()
    }
}

/// Execute the scan described by `cli`
///
/// Only setup problems (bad configuration, HTTP client construction)
/// return an error; per-file failures are reported as console lines.
pub async fn execute(cli: Cli) -> Result<()> {
    dotenv::dotenv().ok();

    let mut config = VisionConfig::from_env();
    if let Some(max_results) = cli.max_results {
        config.max_results = max_results;
    }
    config
        .validate()
        .map_err(|e| anyhow!("Invalid vision configuration: {}", e))?;

    if !config.has_credentials() {
        warn!("No GOOGLE_API_KEY or GOOGLE_ACCESS_TOKEN set; requests will likely be rejected");
    }

    let client = GoogleVisionClient::new(config)?;
    let scanner = LogoScanner::new(Arc::new(client), Arc::new(ConsoleReporter::new()));
    let policy = cli.policy.into_policy();
    let files = cli.file_references();

    scanner.scan(&files, policy.as_ref()).await;
    info!("Processed {} files", files.len());
    Ok(())
}
