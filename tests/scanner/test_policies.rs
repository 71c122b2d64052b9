// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Ordering and in-flight behaviour of the execution policies

use super::mock_annotator::{files, logo, scanner_for, Outcome, ScriptedAnnotator};
use fabstir_logo_scan::{ConcurrentPolicy, PolicyKind, SequentialPolicy};
use std::sync::Arc;

fn slow_then_fast() -> Arc<ScriptedAnnotator> {
    Arc::new(
        ScriptedAnnotator::new()
            .with_delay("slow.jpg", 150, Outcome::Logos(vec![logo("Slow", 0.5)]))
            .with("fast.jpg", Outcome::Logos(vec![logo("Fast", 1.0)])),
    )
}

#[tokio::test]
async fn test_sequential_output_follows_input_order() {
    let annotator = slow_then_fast();
    let (scanner, reporter) = scanner_for(annotator.clone());

    scanner
        .scan(&files(&["slow.jpg", "fast.jpg"]), &SequentialPolicy)
        .await;

    assert_eq!(
        reporter.lines(),
        vec![
            "Running logo detection on slow.jpg",
            "\"Slow\" found in in file slow.jpg",
            "Average score for slow.jpg: 0.5",
            "Running logo detection on fast.jpg",
            "\"Fast\" found in in file fast.jpg",
            "Average score for fast.jpg: 1",
        ]
    );
    assert_eq!(annotator.max_in_flight(), 1);
}

#[tokio::test]
async fn test_sequential_order_for_larger_batch() {
    let names: Vec<String> = (0..8).map(|i| format!("img-{}.jpg", i)).collect();
    let mut annotator = ScriptedAnnotator::new();
    for (i, name) in names.iter().enumerate() {
        // Earlier files take longer, so any overlap would reorder output
        annotator = annotator.with_delay(
            name,
            (8 - i as u64) * 5,
            Outcome::Logos(vec![logo(name, 0.5)]),
        );
    }
    let annotator = Arc::new(annotator);
    let (scanner, reporter) = scanner_for(annotator.clone());

    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    scanner.scan(&files(&refs), &SequentialPolicy).await;

    let averages: Vec<String> = reporter
        .lines()
        .into_iter()
        .filter(|l| l.starts_with("Average score for "))
        .collect();
    let expected: Vec<String> = names
        .iter()
        .map(|n| format!("Average score for {}: 0.5", n))
        .collect();
    assert_eq!(averages, expected);
    assert_eq!(annotator.calls(), names);
    assert_eq!(annotator.max_in_flight(), 1);
}

#[tokio::test]
async fn test_concurrent_initiates_all_before_completion() {
    let annotator = slow_then_fast();
    let (scanner, reporter) = scanner_for(annotator.clone());

    scanner
        .scan(&files(&["slow.jpg", "fast.jpg"]), &ConcurrentPolicy)
        .await;

    assert_eq!(
        reporter.lines(),
        vec![
            "Running logo detection on slow.jpg",
            "Running logo detection on fast.jpg",
            "\"Fast\" found in in file fast.jpg",
            "Average score for fast.jpg: 1",
            "\"Slow\" found in in file slow.jpg",
            "Average score for slow.jpg: 0.5",
        ]
    );
    assert_eq!(annotator.calls(), vec!["slow.jpg", "fast.jpg"]);
}

#[tokio::test]
async fn test_concurrent_has_no_in_flight_cap() {
    let mut annotator = ScriptedAnnotator::new();
    let names: Vec<String> = (0..5).map(|i| format!("img-{}.jpg", i)).collect();
    for name in &names {
        annotator = annotator.with_delay(name, 50, Outcome::Logos(vec![]));
    }
    let annotator = Arc::new(annotator);
    let (scanner, reporter) = scanner_for(annotator.clone());

    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    scanner.scan(&files(&refs), &ConcurrentPolicy).await;

    assert_eq!(annotator.max_in_flight(), names.len());
    assert_eq!(reporter.lines().len(), names.len() * 2);
}

#[tokio::test]
async fn test_failures_are_isolated_under_both_policies() {
    for kind in [PolicyKind::Sequential, PolicyKind::Concurrent] {
        let annotator = Arc::new(
            ScriptedAnnotator::new()
                .with("boom.jpg", Outcome::Panic)
                .with_delay("gone.jpg", 20, Outcome::NotFound)
                .with("ok.jpg", Outcome::Logos(vec![logo("Ok", 0.25)]))
                .with("odd.jpg", Outcome::Unknown),
        );
        let (scanner, reporter) = scanner_for(annotator);
        let policy = kind.into_policy();

        scanner
            .scan(
                &files(&["boom.jpg", "gone.jpg", "ok.jpg", "odd.jpg"]),
                policy.as_ref(),
            )
            .await;

        assert_eq!(
            reporter.lines_for("boom.jpg"),
            vec![
                "Running logo detection on boom.jpg",
                "An unknown error occurred processing boom.jpg",
            ],
            "policy {:?}",
            kind
        );
        assert_eq!(
            reporter.lines_for("gone.jpg").last().unwrap(),
            "File gone.jpg not found"
        );
        assert_eq!(
            reporter.lines_for("ok.jpg"),
            vec![
                "Running logo detection on ok.jpg",
                "\"Ok\" found in in file ok.jpg",
                "Average score for ok.jpg: 0.25",
            ]
        );
        assert_eq!(
            reporter.lines_for("odd.jpg").last().unwrap(),
            "An unknown error occurred processing odd.jpg"
        );
    }
}
