//! Shared report shapes produced by the analyzers.
//!
//! Every analyzer output carries an overall 0-100 score; `ScoreReport` is the
//! full shape (score, named sub-scores, qualitative lists) shared by the ATS
//! and effectiveness scorers. The `Scored` trait lets the aggregator consume
//! upstream analyzers uniformly instead of special-casing each output type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Overall score with named sub-scores and qualitative lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub score: u32,
    pub breakdown: BTreeMap<String, u32>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// Category of a detected writing issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Spelling,
    Style,
    Structure,
    Punctuation,
}

/// Severity tiers: error > warning > info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A single detected issue. `position` is a byte offset into the exact text
/// that was scanned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub severity: Severity,
    pub message: String,
    pub position: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// An actionable improvement suggestion, ranked by priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub example: String,
}

/// Anything that reduces to an overall 0-100 score. Implemented by every
/// analyzer report so the effectiveness aggregator can treat them
/// polymorphically.
pub trait Scored {
    fn score(&self) -> u32;
}

impl Scored for ScoreReport {
    fn score(&self) -> u32 {
        self.score
    }
}
