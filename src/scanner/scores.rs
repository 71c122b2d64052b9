// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Per-file confidence score aggregation

/// Scores collected while walking one file's annotations
#[derive(Debug, Clone, Default)]
pub struct ScoreAccumulator {
    scores: Vec<f64>,
}

impl ScoreAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a present score
    pub fn push(&mut self, score: f64) {
        self.scores.push(score);
    }

    /// Number of scores collected
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Unweighted arithmetic mean, `None` when no score was collected
    pub fn mean(&self) -> Option<f64> {
        if self.scores.is_empty() {
            return None;
        }
        Some(self.scores.iter().sum::<f64>() / self.scores.len() as f64)
    }
}

impl Extend<f64> for ScoreAccumulator {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        self.scores.extend(iter);
    }
}
