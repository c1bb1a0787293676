// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::runner::{CaseReport, FailReason, Stage};

fn plain() -> Report<Vec<u8>> {
    Report::new(Vec::new(), false)
}

fn text(report: Report<Vec<u8>>) -> String {
    String::from_utf8(report.into_inner()).unwrap()
}

fn case(verdict: Verdict) -> CaseReport {
    CaseReport {
        name: "case".to_string(),
        command: "near keys a".to_string(),
        suggestion: None,
        result: None,
        last_stage: Stage::Compared,
        verdict,
    }
}

#[test]
fn test_case_progress_lines() {
    let mut report = plain();
    report.command("near create-account foo.testnet").unwrap();
    report
        .suggestion(Some("near create-account foo.testnet --useFaucet"))
        .unwrap();
    report
        .result(Some("Account foo.testnet created successfully"))
        .unwrap();
    report.verdict(&Verdict::Pass).unwrap();

    assert_eq!(
        text(report),
        "▶️ Running the command:\n\tnear create-account foo.testnet\n\
         \nSuggested command:\n\tnear create-account foo.testnet --useFaucet\n\
         \nRunning the suggested command...\n\tAccount foo.testnet created successfully\n\
         \n✅ Test passed\n\
         \n---\n\n"
    );
}

#[test]
fn test_missing_values_are_marked() {
    let mut report = plain();
    report.suggestion(None).unwrap();
    report.result(None).unwrap();
    let output = text(report);
    assert!(output.contains("\t(none)\n"));
    assert!(output.contains("\t(no match)\n"));
}

#[test]
fn test_failed_verdict_includes_reason() {
    let mut report = plain();
    report
        .verdict(&Verdict::Fail(FailReason::NoSuggestion))
        .unwrap();
    assert!(text(report).contains("❌ Test failed: no suggested command found\n"));
}

#[test]
fn test_verdict_colored_when_terminal() {
    let mut report = Report::new(Vec::new(), true);
    report.verdict(&Verdict::Pass).unwrap();
    assert!(text(report).contains("\x1b[32m\n✅ Test passed\x1b[0m\n"));
}

#[test]
fn test_banner() {
    let mut report = plain();
    report.banner(0, "./target/release/near").unwrap();
    assert_eq!(
        text(report),
        "Running 0 test case(s) against ./target/release/near\n\n"
    );
}

#[test]
fn test_summary_counts() {
    let summary = RunSummary {
        reports: vec![
            case(Verdict::Pass),
            case(Verdict::Fail(FailReason::Mismatch)),
        ],
        skipped: 0,
    };
    let mut report = plain();
    report.summary(&summary).unwrap();
    assert_eq!(text(report), "1 passed, 1 failed\n");
}

#[test]
fn test_summary_mentions_skipped() {
    let summary = RunSummary {
        reports: vec![case(Verdict::Fail(FailReason::NoSuggestion))],
        skipped: 2,
    };
    let mut report = plain();
    report.summary(&summary).unwrap();
    assert_eq!(text(report), "0 passed, 1 failed, 2 skipped\n");
}

#[test]
fn error_plain_text_when_not_terminal() {
    let mut buf = Vec::new();
    write_diagnostic(&mut buf, "Error", RED, "fixture not found", false);
    assert_eq!(String::from_utf8(buf).unwrap(), "Error: fixture not found\n");
}

#[test]
fn warning_with_ansi_when_terminal() {
    let mut buf = Vec::new();
    write_diagnostic(&mut buf, "Warning", YELLOW, "no cases selected", true);
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "\x1b[33mWarning: no cases selected\x1b[0m\n"
    );
}
