//! Lexical grammar and style checking for letters.
//!
//! Four independent detectors (repeated words, style-rule table, sentence
//! structure, punctuation) whose results are concatenated in detection order.
//! The score is advisory: deductions are severity-weighted and floored, so a
//! check never fails a letter outright.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::report::{Issue, IssueKind, Scored, Severity};

// ────────────────────────────────────────────────────────────────────────────
// Tunable policy constants
// ────────────────────────────────────────────────────────────────────────────

const MAX_REPORTED_ISSUES: usize = 10;
const ERROR_PENALTY: u32 = 5;
const WARNING_PENALTY: u32 = 2;
const INFO_PENALTY: u32 = 1;
/// The checker is advisory and never scores below this floor.
const SCORE_FLOOR: u32 = 50;

const LONG_SENTENCE_WORDS: usize = 30;
const SHORT_SENTENCE_WORDS: usize = 5;
/// Lines longer than this (in characters) should end with terminal punctuation.
const UNPUNCTUATED_LINE_MIN_CHARS: usize = 20;

/// Coaching-hint thresholds for `suggest_improvements`.
const FIRST_PERSON_LIMIT: usize = 10;
const MIN_QUANTIFIED_MENTIONS: usize = 2;
const MIN_PARAGRAPHS: usize = 3;

/// Summary tiers by score.
const SUMMARY_EXCELLENT: u32 = 90;
const SUMMARY_GOOD: u32 = 75;
const SUMMARY_FAIR: u32 = 60;

// ────────────────────────────────────────────────────────────────────────────
// Static rule catalog
// ────────────────────────────────────────────────────────────────────────────

static PASSIVE_VOICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:is|are|was|were|been|be)\s+\w+ed\b").unwrap());
static WEAK_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:very|really|quite|rather|somewhat|fairly)\b").unwrap());
static REDUNDANT_PHRASES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:in order to|due to the fact that|at this point in time)\b").unwrap()
});
static CLICHES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:team player|hard worker|detail-oriented|think outside the box|hit the ground running)\b",
    )
    .unwrap()
});
static CONJUNCTION_OPENER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:and|but|or)\b").unwrap());
static MISSING_SPACE_AFTER_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.,!?]\w").unwrap());
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());
static NUMERIC_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+%|\d+").unwrap());
static FIRST_PERSON: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bI\b").unwrap());

struct StyleRule {
    name: &'static str,
    regex: &'static LazyLock<Regex>,
    severity: Severity,
    suggestion: &'static str,
}

static STYLE_RULES: [StyleRule; 4] = [
    StyleRule {
        name: "Passive voice",
        regex: &PASSIVE_VOICE,
        severity: Severity::Info,
        suggestion: "Consider using active voice for stronger impact",
    },
    StyleRule {
        name: "Weak words",
        regex: &WEAK_WORDS,
        severity: Severity::Warning,
        suggestion: "Use more specific, powerful words",
    },
    StyleRule {
        name: "Redundant phrases",
        regex: &REDUNDANT_PHRASES,
        severity: Severity::Info,
        suggestion: "Simplify: use \"to\", \"because\", \"now\"",
    },
    StyleRule {
        name: "Cliches",
        regex: &CLICHES,
        severity: Severity::Warning,
        suggestion: "Replace with specific examples and achievements",
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Reports
// ────────────────────────────────────────────────────────────────────────────

/// Result of a full grammar and style check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarReport {
    pub score: u32,
    /// Top issues in detection order; the full count is in `total_issues`.
    pub issues: Vec<Issue>,
    pub total_issues: usize,
    pub summary: String,
}

impl Scored for GrammarReport {
    fn score(&self) -> u32 {
        self.score
    }
}

/// Structural coaching hint, distinct from the issue list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachingHint {
    pub category: String,
    pub message: String,
    pub example: String,
}

/// Grammar and style checker over the static rule catalog.
pub struct GrammarChecker;

impl GrammarChecker {
    pub fn new() -> Self {
        GrammarChecker
    }

    /// Runs all four detectors and produces a severity-weighted score.
    pub fn check(&self, text: &str) -> GrammarReport {
        let mut issues = Vec::new();
        issues.extend(repeated_words(text));
        issues.extend(style_issues(text));
        issues.extend(sentence_structure_issues(text));
        issues.extend(punctuation_issues(text));

        let score = grammar_score(&issues);
        let total_issues = issues.len();
        issues.truncate(MAX_REPORTED_ISSUES);

        GrammarReport {
            score,
            issues,
            total_issues,
            summary: summary_for(score),
        }
    }

    /// Structural coaching hints: first-person density, quantified
    /// achievements, paragraph count.
    pub fn suggest_improvements(&self, text: &str) -> Vec<CoachingHint> {
        let mut hints = Vec::new();

        let first_person = FIRST_PERSON.find_iter(text).count();
        if first_person > FIRST_PERSON_LIMIT {
            hints.push(CoachingHint {
                category: "balance".to_string(),
                message: format!(
                    "You used 'I' {first_person} times. Balance with company-focused language."
                ),
                example: "Instead of \"I achieved X\", try \"This achievement would help Company Y\""
                    .to_string(),
            });
        }

        if quantified_mentions(text) < MIN_QUANTIFIED_MENTIONS {
            hints.push(CoachingHint {
                category: "specificity".to_string(),
                message: "Add more quantifiable achievements (percentages, numbers, metrics)."
                    .to_string(),
                example: "E.g., \"Increased sales by 35%\" or \"Managed a team of 12\"".to_string(),
            });
        }

        let paragraphs = text.split("\n\n").filter(|p| !p.trim().is_empty()).count();
        if paragraphs < MIN_PARAGRAPHS {
            hints.push(CoachingHint {
                category: "structure".to_string(),
                message: "Consider breaking into 3-4 clear paragraphs for better readability."
                    .to_string(),
                example: "Opening, experience/skills (1-2 paragraphs), closing".to_string(),
            });
        }

        hints
    }
}

/// Count of numeric/percentage tokens. Shared with the effectiveness scorer.
pub fn quantified_mentions(text: &str) -> usize {
    NUMERIC_TOKEN.find_iter(text).count()
}

/// Count of passive-voice constructions. Shared with the effectiveness scorer.
pub fn passive_voice_count(text: &str) -> usize {
    PASSIVE_VOICE.find_iter(text).count()
}

// ────────────────────────────────────────────────────────────────────────────
// Detectors
// ────────────────────────────────────────────────────────────────────────────

/// A word immediately followed by itself across whitespace only,
/// case-insensitive. Punctuation between the two occurrences is not a repeat.
/// Consecutive triples report once, matching non-overlapping pair detection.
fn repeated_words(text: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut previous: Option<(usize, usize, String)> = None;

    for word_match in WORD.find_iter(text) {
        let lower = word_match.as_str().to_lowercase();
        match &previous {
            Some((start, end, prev))
                if *prev == lower
                    && text[*end..word_match.start()]
                        .chars()
                        .all(char::is_whitespace) =>
            {
                issues.push(Issue {
                    kind: IssueKind::Spelling,
                    severity: Severity::Error,
                    message: format!("Repeated word: '{}'", word_match.as_str()),
                    position: *start,
                });
                previous = None;
            }
            _ => previous = Some((word_match.start(), word_match.end(), lower)),
        }
    }
    issues
}

fn style_issues(text: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    for rule in &STYLE_RULES {
        for found in rule.regex.find_iter(text) {
            issues.push(Issue {
                kind: IssueKind::Style,
                severity: rule.severity,
                message: format!("{}: {}", rule.name, rule.suggestion),
                position: found.start(),
            });
        }
    }
    issues
}

fn sentence_structure_issues(text: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (index, (offset, sentence)) in sentences_with_offsets(text).iter().enumerate() {
        let number = index + 1;
        let word_count = sentence.split_whitespace().count();

        if word_count > LONG_SENTENCE_WORDS {
            issues.push(Issue {
                kind: IssueKind::Structure,
                severity: Severity::Warning,
                message: format!(
                    "Sentence {number} is too long ({word_count} words). Consider breaking it up."
                ),
                position: *offset,
            });
        } else if word_count > 0 && word_count < SHORT_SENTENCE_WORDS {
            issues.push(Issue {
                kind: IssueKind::Structure,
                severity: Severity::Info,
                message: format!(
                    "Sentence {number} is very short ({word_count} words). Ensure it is complete."
                ),
                position: *offset,
            });
        }

        if CONJUNCTION_OPENER.is_match(sentence.trim_start()) {
            issues.push(Issue {
                kind: IssueKind::Structure,
                severity: Severity::Info,
                message: format!(
                    "Sentence {number} starts with a conjunction. Consider rephrasing for formal writing."
                ),
                position: *offset,
            });
        }
    }
    issues
}

fn punctuation_issues(text: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    if let Some(position) = text.find("  ") {
        issues.push(Issue {
            kind: IssueKind::Punctuation,
            severity: Severity::Info,
            message: "Double spaces found. Use single spaces.".to_string(),
            position,
        });
    }

    for found in MISSING_SPACE_AFTER_PUNCT.find_iter(text) {
        issues.push(Issue {
            kind: IssueKind::Punctuation,
            severity: Severity::Warning,
            message: "Missing space after punctuation.".to_string(),
            position: found.start(),
        });
    }

    let mut line_start = 0;
    for line in text.split('\n') {
        let trimmed = line.trim();
        if trimmed.chars().count() > UNPUNCTUATED_LINE_MIN_CHARS
            && !trimmed.ends_with(['.', '!', '?', ':'])
        {
            let indent = line.len() - line.trim_start().len();
            issues.push(Issue {
                kind: IssueKind::Punctuation,
                severity: Severity::Warning,
                message: "Line may be missing end punctuation.".to_string(),
                position: line_start + indent,
            });
        }
        line_start += line.len() + 1;
    }
    issues
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Splits text into sentences at a terminator followed by whitespace,
/// returning each sentence's byte offset in the input text.
fn sentences_with_offsets(text: &str) -> Vec<(usize, &str)> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            let followed_by_space = chars.peek().is_some_and(|&(_, next)| next.is_whitespace());
            if followed_by_space {
                sentences.push((start, &text[start..i]));
                start = text.len();
                while let Some(&(j, next)) = chars.peek() {
                    if next.is_whitespace() {
                        chars.next();
                    } else {
                        start = j;
                        break;
                    }
                }
            }
        }
    }

    if start < text.len() {
        sentences.push((start, &text[start..]));
    }
    sentences
}

fn grammar_score(issues: &[Issue]) -> u32 {
    let deductions: u32 = issues
        .iter()
        .map(|issue| match issue.severity {
            Severity::Error => ERROR_PENALTY,
            Severity::Warning => WARNING_PENALTY,
            Severity::Info => INFO_PENALTY,
        })
        .sum();

    100u32.saturating_sub(deductions).max(SCORE_FLOOR)
}

fn summary_for(score: u32) -> String {
    if score >= SUMMARY_EXCELLENT {
        "Excellent. Your letter has minimal grammar and style issues.".to_string()
    } else if score >= SUMMARY_GOOD {
        "Good. A few minor issues to address.".to_string()
    } else if score >= SUMMARY_FAIR {
        "Fair. Several issues should be corrected before sending.".to_string()
    } else {
        "Needs improvement. Review and correct the identified issues.".to_string()
    }
}
