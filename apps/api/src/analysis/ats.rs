//! ATS (Applicant Tracking System) compatibility scoring.
//!
//! Five heuristic sub-scores combined by fixed weights into one 0-100
//! compatibility score. The keyword sub-score is a plain set-overlap ratio,
//! deliberately cheaper than the full keyword coverage analyzer.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::report::ScoreReport;
use crate::analysis::vocabulary::Vocabulary;

// ────────────────────────────────────────────────────────────────────────────
// Tunable policy constants
// ────────────────────────────────────────────────────────────────────────────

const WEIGHT_KEYWORD_MATCH: f64 = 0.40;
const WEIGHT_FORMATTING: f64 = 0.20;
const WEIGHT_LENGTH: f64 = 0.15;
const WEIGHT_ACTION_VERBS: f64 = 0.15;
const WEIGHT_READABILITY: f64 = 0.10;

/// Sub-score when the job posting has no usable vocabulary.
const NEUTRAL_KEYWORD_SCORE: u32 = 50;

const TAB_PENALTY: i32 = 10;
const NON_ASCII_PENALTY: i32 = 15;
const NON_ASCII_LIMIT: usize = 5;
const PARAGRAPH_BREAK_PENALTY: i32 = 10;
const MIN_PARAGRAPH_BREAKS: usize = 2;

/// Word-count bands, ideal outward.
const LENGTH_IDEAL_MIN: usize = 250;
const LENGTH_IDEAL_MAX: usize = 400;
const LENGTH_NEAR_MIN: usize = 200;
const LENGTH_NEAR_MAX: usize = 450;
const LENGTH_FAR_MIN: usize = 150;
const LENGTH_FAR_MAX: usize = 500;

/// Distinct action-verb hits needed for each score tier.
const VERBS_FOR_FULL_SCORE: usize = 5;
const VERBS_FOR_GOOD_SCORE: usize = 3;
const VERBS_FOR_BASE_SCORE: usize = 1;

/// Mean words-per-sentence bands.
const READABILITY_IDEAL_MIN: f64 = 15.0;
const READABILITY_IDEAL_MAX: f64 = 20.0;
const READABILITY_NEAR_MIN: f64 = 12.0;
const READABILITY_NEAR_MAX: f64 = 25.0;

/// Sub-score thresholds that qualify as a reportable strength.
const STRONG_KEYWORD: u32 = 70;
const STRONG_FORMATTING: u32 = 90;
const STRONG_LENGTH: u32 = 85;
const STRONG_ACTION_VERBS: u32 = 80;
const STRONG_READABILITY: u32 = 85;

/// Curated strong action verbs recruiters and parsers look for.
const ACTION_VERBS: &[&str] = &[
    "achieved", "improved", "developed", "implemented", "created", "managed", "led", "designed",
    "optimized", "increased", "reduced", "launched", "delivered", "coordinated", "executed",
    "established", "generated", "enhanced", "streamlined", "transformed",
];

static SENTENCE_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// ATS compatibility scorer over the shared vocabulary filter.
pub struct AtsScorer {
    vocabulary: Vocabulary,
}

impl AtsScorer {
    pub fn new(vocabulary: Vocabulary) -> Self {
        AtsScorer { vocabulary }
    }

    /// Combines the five sub-scores into a weighted compatibility score with
    /// strengths and improvement lines. Never empty on either list.
    pub fn calculate_ats_score(&self, letter: &str, job_posting: &str) -> ScoreReport {
        let keyword_match = self.keyword_match(letter, job_posting);
        let formatting = formatting_score(letter);
        let length = length_score(letter);
        let action_verbs = action_verb_score(letter);
        let readability = readability_score(letter);

        let total = keyword_match as f64 * WEIGHT_KEYWORD_MATCH
            + formatting as f64 * WEIGHT_FORMATTING
            + length as f64 * WEIGHT_LENGTH
            + action_verbs as f64 * WEIGHT_ACTION_VERBS
            + readability as f64 * WEIGHT_READABILITY;

        let breakdown: BTreeMap<String, u32> = [
            ("keyword_match".to_string(), keyword_match),
            ("formatting".to_string(), formatting),
            ("length".to_string(), length),
            ("action_verbs".to_string(), action_verbs),
            ("readability".to_string(), readability),
        ]
        .into_iter()
        .collect();

        ScoreReport {
            score: total as u32,
            strengths: identify_strengths(&breakdown),
            improvements: identify_improvements(&breakdown),
            breakdown,
        }
    }

    /// Term-set overlap ratio between letter and job posting.
    fn keyword_match(&self, letter: &str, job_posting: &str) -> u32 {
        let job_terms: HashSet<String> =
            self.vocabulary.extract_terms(job_posting).into_iter().collect();
        if job_terms.is_empty() {
            return NEUTRAL_KEYWORD_SCORE;
        }
        let letter_terms: HashSet<String> =
            self.vocabulary.extract_terms(letter).into_iter().collect();
        let matched = job_terms.intersection(&letter_terms).count();
        (matched * 100 / job_terms.len()) as u32
    }
}

fn formatting_score(letter: &str) -> u32 {
    let mut score: i32 = 100;

    if letter.contains('\t') {
        score -= TAB_PENALTY;
    }
    if letter.chars().filter(|c| !c.is_ascii()).count() > NON_ASCII_LIMIT {
        score -= NON_ASCII_PENALTY;
    }
    if letter.matches("\n\n").count() < MIN_PARAGRAPH_BREAKS {
        score -= PARAGRAPH_BREAK_PENALTY;
    }

    score.max(0) as u32
}

fn length_score(letter: &str) -> u32 {
    let word_count = letter.split_whitespace().count();

    if (LENGTH_IDEAL_MIN..=LENGTH_IDEAL_MAX).contains(&word_count) {
        100
    } else if (LENGTH_NEAR_MIN..LENGTH_IDEAL_MIN).contains(&word_count)
        || (LENGTH_IDEAL_MAX + 1..=LENGTH_NEAR_MAX).contains(&word_count)
    {
        85
    } else if (LENGTH_FAR_MIN..LENGTH_NEAR_MIN).contains(&word_count)
        || (LENGTH_NEAR_MAX + 1..=LENGTH_FAR_MAX).contains(&word_count)
    {
        70
    } else {
        50
    }
}

fn action_verb_score(letter: &str) -> u32 {
    let letter_lower = letter.to_lowercase();
    let hits = ACTION_VERBS
        .iter()
        .filter(|verb| letter_lower.contains(**verb))
        .count();

    if hits >= VERBS_FOR_FULL_SCORE {
        100
    } else if hits >= VERBS_FOR_GOOD_SCORE {
        80
    } else if hits >= VERBS_FOR_BASE_SCORE {
        60
    } else {
        40
    }
}

fn readability_score(letter: &str) -> u32 {
    let sentences: Vec<&str> = SENTENCE_SPLIT
        .split(letter)
        .filter(|s| !s.trim().is_empty())
        .collect();

    if sentences.is_empty() {
        return 50;
    }

    let total_words: usize = sentences.iter().map(|s| s.split_whitespace().count()).sum();
    let mean = total_words as f64 / sentences.len() as f64;

    if (READABILITY_IDEAL_MIN..=READABILITY_IDEAL_MAX).contains(&mean) {
        100
    } else if (READABILITY_NEAR_MIN..READABILITY_IDEAL_MIN).contains(&mean)
        || (mean > READABILITY_IDEAL_MAX && mean <= READABILITY_NEAR_MAX)
    {
        85
    } else {
        70
    }
}

fn identify_strengths(breakdown: &BTreeMap<String, u32>) -> Vec<String> {
    let mut strengths = Vec::new();

    if breakdown["keyword_match"] >= STRONG_KEYWORD {
        strengths.push("Strong keyword match with the job posting".to_string());
    }
    if breakdown["formatting"] >= STRONG_FORMATTING {
        strengths.push("Clean, ATS-friendly formatting".to_string());
    }
    if breakdown["length"] >= STRONG_LENGTH {
        strengths.push("Optimal letter length".to_string());
    }
    if breakdown["action_verbs"] >= STRONG_ACTION_VERBS {
        strengths.push("Good use of action verbs".to_string());
    }
    if breakdown["readability"] >= STRONG_READABILITY {
        strengths.push("Excellent readability".to_string());
    }

    if strengths.is_empty() {
        strengths.push("Letter structure is acceptable".to_string());
    }
    strengths
}

fn identify_improvements(breakdown: &BTreeMap<String, u32>) -> Vec<String> {
    let mut improvements = Vec::new();

    if breakdown["keyword_match"] < STRONG_KEYWORD {
        improvements.push("Include more keywords from the job posting".to_string());
    }
    if breakdown["formatting"] < STRONG_FORMATTING {
        improvements.push("Simplify formatting for better ATS compatibility".to_string());
    }
    if breakdown["length"] < STRONG_LENGTH {
        improvements.push(format!(
            "Adjust letter length to {LENGTH_IDEAL_MIN}-{LENGTH_IDEAL_MAX} words"
        ));
    }
    if breakdown["action_verbs"] < STRONG_ACTION_VERBS {
        improvements.push("Use more strong action verbs to describe achievements".to_string());
    }
    if breakdown["readability"] < STRONG_READABILITY {
        improvements.push("Adjust sentence length for better readability".to_string());
    }

    if improvements.is_empty() {
        improvements.push("Consider adding specific metrics and achievements".to_string());
    }
    improvements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::vocabulary::Locale;

    fn scorer() -> AtsScorer {
        AtsScorer::new(Vocabulary::new(Locale::En))
    }

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_score_in_bounds() {
        let s = scorer();
        for (letter, job) in [
            ("", ""),
            ("short", "short job"),
            ("a perfectly reasonable letter about engineering.", "engineering role"),
        ] {
            let report = s.calculate_ats_score(letter, job);
            assert!(report.score <= 100, "score {} out of range", report.score);
            for (key, value) in &report.breakdown {
                assert!(*value <= 100, "{key} sub-score {value} out of range");
            }
        }
    }

    #[test]
    fn test_breakdown_has_five_sub_scores() {
        let report = scorer().calculate_ats_score("letter", "job");
        let keys: Vec<&str> = report.breakdown.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["action_verbs", "formatting", "keyword_match", "length", "readability"]
        );
    }

    #[test]
    fn test_empty_job_posting_gives_neutral_keyword_score() {
        let report = scorer().calculate_ats_score("some letter content here", "");
        assert_eq!(report.breakdown["keyword_match"], NEUTRAL_KEYWORD_SCORE);
    }

    #[test]
    fn test_keyword_match_full_overlap() {
        let s = scorer();
        let text = "docker kubernetes engineering experience";
        let report = s.calculate_ats_score(text, text);
        assert_eq!(report.breakdown["keyword_match"], 100);
    }

    #[test]
    fn test_formatting_penalties() {
        // One paragraph break only, plus a tab
        let letter = "first\tline\n\nsecond part";
        assert_eq!(formatting_score(letter), 80);
        // Clean letter with two breaks
        let clean = "one\n\ntwo\n\nthree";
        assert_eq!(formatting_score(clean), 100);
    }

    #[test]
    fn test_formatting_non_ascii_penalty() {
        let letter = "résumé with café naïveté — curls\n\nmore\n\ntext";
        assert_eq!(formatting_score(letter), 85);
    }

    #[test]
    fn test_length_bands() {
        assert_eq!(length_score(&words(300)), 100);
        assert_eq!(length_score(&words(250)), 100);
        assert_eq!(length_score(&words(249)), 85);
        assert_eq!(length_score(&words(420)), 85);
        assert_eq!(length_score(&words(180)), 70);
        assert_eq!(length_score(&words(480)), 70);
        assert_eq!(length_score(&words(50)), 50);
        assert_eq!(length_score(&words(600)), 50);
    }

    #[test]
    fn test_action_verb_tiers() {
        assert_eq!(
            action_verb_score("achieved improved developed implemented created"),
            100
        );
        assert_eq!(action_verb_score("achieved improved developed"), 80);
        assert_eq!(action_verb_score("achieved something"), 60);
        assert_eq!(action_verb_score("nothing relevant"), 40);
    }

    #[test]
    fn test_action_verb_boundary_five_vs_four() {
        assert_eq!(action_verb_score("achieved improved developed implemented"), 80);
        assert_eq!(
            action_verb_score("achieved improved developed implemented managed"),
            100
        );
    }

    #[test]
    fn test_readability_ideal_band() {
        // Two sentences of 16 words each
        let sentence = format!("{}.", words(16));
        let letter = format!("{sentence} {sentence}");
        assert_eq!(readability_score(&letter), 100);
    }

    #[test]
    fn test_readability_no_sentences() {
        assert_eq!(readability_score(""), 50);
        assert_eq!(readability_score("   "), 50);
    }

    #[test]
    fn test_readability_choppy_text() {
        let letter = "Short one. Tiny two. Wee three.";
        assert_eq!(readability_score(letter), 70);
    }

    #[test]
    fn test_strengths_and_improvements_never_empty() {
        let report = scorer().calculate_ats_score("", "");
        assert!(!report.strengths.is_empty());
        assert!(!report.improvements.is_empty());
    }

    #[test]
    fn test_deterministic_output() {
        let s = scorer();
        let letter = "I achieved results and improved systems.\n\nI developed tools.\n\nThanks.";
        let job = "Looking for someone who achieved and improved things.";
        let first = s.calculate_ats_score(letter, job);
        let second = s.calculate_ats_score(letter, job);
        assert_eq!(first, second);
    }
}
