//! Letter effectiveness aggregation.
//!
//! Combines the upstream ATS, grammar, and keyword scores with two locally
//! computed sub-scores (structure, personalization) into one weighted total
//! with a letter grade, a qualitative label, ranked improvement suggestions,
//! and multi-version comparison.

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::grammar::{passive_voice_count, quantified_mentions};
use crate::analysis::report::{Priority, Scored, Suggestion};

// ────────────────────────────────────────────────────────────────────────────
// Tunable policy constants
// ────────────────────────────────────────────────────────────────────────────

const WEIGHT_ATS: f64 = 0.30;
const WEIGHT_GRAMMAR: f64 = 0.20;
const WEIGHT_KEYWORDS: f64 = 0.20;
const WEIGHT_STRUCTURE: f64 = 0.15;
const WEIGHT_PERSONALIZATION: f64 = 0.15;

/// Structure deductions.
const FEW_PARAGRAPHS_PENALTY: i32 = 20;
const MANY_PARAGRAPHS_PENALTY: i32 = 10;
const MIN_PARAGRAPHS: usize = 3;
const MAX_PARAGRAPHS: usize = 5;
const MISSING_OPENING_CUE_PENALTY: i32 = 15;
const MISSING_CLOSING_CUE_PENALTY: i32 = 15;
const WORD_COUNT_PENALTY: i32 = 15;
const WORD_COUNT_MIN: usize = 200;
const WORD_COUNT_MAX: usize = 500;

/// Personalization deductions.
const GENERIC_PHRASE_PENALTY: i32 = 10;
const NO_PROPER_NOUN_PENALTY: i32 = 20;
const NO_NUMERIC_PENALTY: i32 = 15;
const NO_ROLE_CUE_PENALTY: i32 = 10;

/// Suggestion trigger thresholds on the sub-scores.
const SUGGEST_ATS_BELOW: u32 = 80;
const SUGGEST_GRAMMAR_BELOW: u32 = 80;
const SUGGEST_KEYWORDS_BELOW: u32 = 70;
const SUGGEST_STRUCTURE_BELOW: u32 = 75;
const SUGGEST_PERSONALIZATION_BELOW: u32 = 70;
const PASSIVE_VOICE_LIMIT: usize = 3;

/// Defaults for sub-scores a caller has not computed yet; assumes reasonable
/// quality rather than punishing the unmeasured.
const DEFAULT_ATS_SCORE: u32 = 75;
const DEFAULT_GRAMMAR_SCORE: u32 = 85;
const DEFAULT_KEYWORD_SCORE: u32 = 70;

/// Version-strength heuristics.
const STRENGTH_PERCENT_MENTIONS: usize = 2;
const STRENGTH_WORD_COUNT: usize = 300;
const STRENGTH_PARAGRAPHS: usize = 4;
const STRENGTH_ACTION_VERBS: usize = 3;
const WEAK_WORD_COUNT_LOW: usize = 250;
const WEAK_WORD_COUNT_HIGH: usize = 450;

const OPENING_CUES: &[&str] = &["position", "role", "opportunity", "writing", "apply"];
const CLOSING_CUES: &[&str] = &["thank", "look forward", "discuss", "interview", "contact"];

/// Boilerplate that marks a letter as generic.
const GENERIC_PHRASES: &[&str] = &[
    "to whom it may concern",
    "dear sir or madam",
    "dear hiring manager",
    "i am writing to apply",
    "i am a hard worker",
    "team player",
    "detail-oriented",
];

/// Two or more adjacent capitalized words: proxy for a company or other
/// proper-noun reference.
static PROPER_NOUN_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)+\b").unwrap());
static ROLE_CUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:role|position|opportunity)\b").unwrap());
static PERCENT_MENTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+%").unwrap());
static STRONG_VERBS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:achieved|developed|led|managed|created)\b").unwrap());
static ANY_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").unwrap());

// ────────────────────────────────────────────────────────────────────────────
// Reports
// ────────────────────────────────────────────────────────────────────────────

/// Aggregated effectiveness score across all five dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectivenessScore {
    pub total: u32,
    /// Sub-scores: ats, grammar, keywords, structure, personalization.
    pub breakdown: BTreeMap<String, u32>,
    pub grade: String,
    pub effectiveness: String,
}

impl Scored for EffectivenessScore {
    fn score(&self) -> u32 {
        self.total
    }
}

/// One letter variant submitted for comparison. Missing sub-scores default
/// to reasonable-quality assumptions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LetterVersion {
    pub content: String,
    #[serde(default)]
    pub ats_score: Option<u32>,
    #[serde(default)]
    pub grammar_score: Option<u32>,
    #[serde(default)]
    pub keyword_score: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionRanking {
    /// 1-based index of the submitted version.
    pub version: usize,
    pub score: u32,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Sorted non-increasing by score; ties keep submission order.
    pub rankings: Vec<VersionRanking>,
    pub recommended: usize,
    pub recommendation_reason: String,
}

/// Weighted aggregator over the upstream analyzer scores.
pub struct EffectivenessScorer;

impl EffectivenessScorer {
    pub fn new() -> Self {
        EffectivenessScorer
    }

    /// Combines upstream scores with locally computed structure and
    /// personalization sub-scores into a weighted 0-100 total.
    pub fn calculate_score(
        &self,
        letter: &str,
        ats_score: u32,
        grammar_score: u32,
        keyword_score: u32,
    ) -> EffectivenessScore {
        let structure = structure_score(letter);
        let personalization = personalization_score(letter);

        let total = (ats_score as f64 * WEIGHT_ATS
            + grammar_score as f64 * WEIGHT_GRAMMAR
            + keyword_score as f64 * WEIGHT_KEYWORDS
            + structure as f64 * WEIGHT_STRUCTURE
            + personalization as f64 * WEIGHT_PERSONALIZATION) as u32;

        let breakdown: BTreeMap<String, u32> = [
            ("ats".to_string(), ats_score),
            ("grammar".to_string(), grammar_score),
            ("keywords".to_string(), keyword_score),
            ("structure".to_string(), structure),
            ("personalization".to_string(), personalization),
        ]
        .into_iter()
        .collect();

        EffectivenessScore {
            total,
            breakdown,
            grade: grade_for(total).to_string(),
            effectiveness: effectiveness_label(total).to_string(),
        }
    }

    /// Same aggregation, but consuming upstream analyzer reports through the
    /// shared `Scored` shape instead of raw integers.
    pub fn score_reports(
        &self,
        letter: &str,
        ats: &dyn Scored,
        grammar: &dyn Scored,
        keywords: &dyn Scored,
    ) -> EffectivenessScore {
        self.calculate_score(letter, ats.score(), grammar.score(), keywords.score())
    }

    /// Ranked, canned improvement suggestions. Triggers are independent and
    /// may co-occur.
    pub fn get_suggestions(&self, letter: &str, score: &EffectivenessScore) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();

        if score.breakdown["ats"] < SUGGEST_ATS_BELOW {
            suggestions.push(Suggestion {
                title: "Improve ATS Compatibility".to_string(),
                description: "Your letter may not pass automated screening. Add more keywords \
                              from the job posting and use standard formatting."
                    .to_string(),
                priority: Priority::High,
                example: "Review the job posting and naturally incorporate key terms like \
                          required skills, qualifications, and technologies."
                    .to_string(),
            });
        }

        if score.breakdown["grammar"] < SUGGEST_GRAMMAR_BELOW {
            suggestions.push(Suggestion {
                title: "Fix Grammar and Style Issues".to_string(),
                description: "There are grammar or style issues that could hurt your \
                              credibility. Review and correct them."
                    .to_string(),
                priority: Priority::High,
                example: "Run the grammar check to identify and fix specific issues.".to_string(),
            });
        }

        if score.breakdown["keywords"] < SUGGEST_KEYWORDS_BELOW {
            suggestions.push(Suggestion {
                title: "Add More Relevant Keywords".to_string(),
                description: "Your letter is missing important keywords from the job posting."
                    .to_string(),
                priority: Priority::High,
                example: "Review the missing-keywords list and naturally incorporate them into \
                          your letter."
                    .to_string(),
            });
        }

        if score.breakdown["structure"] < SUGGEST_STRUCTURE_BELOW {
            suggestions.push(Suggestion {
                title: "Improve Letter Structure".to_string(),
                description: "Your letter structure could be clearer. Use 3-4 distinct \
                              paragraphs."
                    .to_string(),
                priority: Priority::Medium,
                example: "Paragraph 1: opening with enthusiasm. Paragraphs 2-3: relevant \
                          experience and achievements. Paragraph 4: strong closing with a call \
                          to action."
                    .to_string(),
            });
        }

        if score.breakdown["personalization"] < SUGGEST_PERSONALIZATION_BELOW {
            suggestions.push(Suggestion {
                title: "Make It More Personal and Specific".to_string(),
                description: "Your letter feels generic. Add specific details about the company \
                              and role."
                    .to_string(),
                priority: Priority::High,
                example: "Research the company and mention specific products, projects, values, \
                          or recent news, and why you're excited about this role at this company."
                    .to_string(),
            });
        }

        if quantified_mentions(letter) == 0 {
            suggestions.push(Suggestion {
                title: "Add Quantifiable Achievements".to_string(),
                description: "Include specific numbers, percentages, or metrics to demonstrate \
                              impact."
                    .to_string(),
                priority: Priority::Medium,
                example: "Instead of \"improved performance\", say \"improved performance by \
                          35%\" or \"led a team of 8 engineers\"."
                    .to_string(),
            });
        }

        let passive = passive_voice_count(letter);
        if passive > PASSIVE_VOICE_LIMIT {
            suggestions.push(Suggestion {
                title: "Use More Active Voice".to_string(),
                description: format!(
                    "Found {passive} instances of passive voice. Active voice is more engaging."
                ),
                priority: Priority::Low,
                example: "Change \"The project was completed by me\" to \"I completed the \
                          project\"."
                    .to_string(),
            });
        }

        suggestions
    }

    /// Scores each candidate, ranks them non-increasing, and recommends the
    /// top entry with a one-line rationale. Returns `None` for empty input.
    pub fn compare_versions(&self, versions: &[LetterVersion]) -> Option<ComparisonReport> {
        if versions.is_empty() {
            return None;
        }

        let mut rankings: Vec<VersionRanking> = versions
            .iter()
            .enumerate()
            .map(|(index, version)| {
                let score = self.calculate_score(
                    &version.content,
                    version.ats_score.unwrap_or(DEFAULT_ATS_SCORE),
                    version.grammar_score.unwrap_or(DEFAULT_GRAMMAR_SCORE),
                    version.keyword_score.unwrap_or(DEFAULT_KEYWORD_SCORE),
                );
                VersionRanking {
                    version: index + 1,
                    score: score.total,
                    strengths: version_strengths(&version.content),
                    weaknesses: version_weaknesses(&version.content),
                }
            })
            .collect();

        rankings.sort_by_key(|r| Reverse(r.score));

        let best = &rankings[0];
        let recommended = best.version;
        let top_strengths: Vec<&str> = best.strengths.iter().take(2).map(String::as_str).collect();
        let recommendation_reason = format!(
            "Version {} has the highest overall score ({}) with strong {}",
            best.version,
            best.score,
            top_strengths.join(", ")
        );

        Some(ComparisonReport {
            recommended,
            recommendation_reason,
            rankings,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Local sub-scores
// ────────────────────────────────────────────────────────────────────────────

fn paragraphs(letter: &str) -> Vec<&str> {
    letter
        .split("\n\n")
        .filter(|p| !p.trim().is_empty())
        .collect()
}

fn structure_score(letter: &str) -> u32 {
    let mut score: i32 = 100;
    let paragraphs = paragraphs(letter);

    if paragraphs.len() < MIN_PARAGRAPHS {
        score -= FEW_PARAGRAPHS_PENALTY;
    } else if paragraphs.len() > MAX_PARAGRAPHS {
        score -= MANY_PARAGRAPHS_PENALTY;
    }

    if let Some(first) = paragraphs.first() {
        let first_lower = first.to_lowercase();
        if !OPENING_CUES.iter().any(|cue| first_lower.contains(cue)) {
            score -= MISSING_OPENING_CUE_PENALTY;
        }
    }
    if let Some(last) = paragraphs.last() {
        let last_lower = last.to_lowercase();
        if !CLOSING_CUES.iter().any(|cue| last_lower.contains(cue)) {
            score -= MISSING_CLOSING_CUE_PENALTY;
        }
    }

    let word_count = letter.split_whitespace().count();
    if !(WORD_COUNT_MIN..=WORD_COUNT_MAX).contains(&word_count) {
        score -= WORD_COUNT_PENALTY;
    }

    score.max(0) as u32
}

fn personalization_score(letter: &str) -> u32 {
    let mut score: i32 = 100;
    let letter_lower = letter.to_lowercase();

    let generic_count = GENERIC_PHRASES
        .iter()
        .filter(|phrase| letter_lower.contains(**phrase))
        .count();
    score -= generic_count as i32 * GENERIC_PHRASE_PENALTY;

    if !PROPER_NOUN_PHRASE.is_match(letter) {
        score -= NO_PROPER_NOUN_PENALTY;
    }
    if quantified_mentions(letter) == 0 {
        score -= NO_NUMERIC_PENALTY;
    }
    if !ROLE_CUE.is_match(letter) {
        score -= NO_ROLE_CUE_PENALTY;
    }

    score.clamp(0, 100) as u32
}

fn grade_for(total: u32) -> &'static str {
    match total {
        90.. => "A",
        80..=89 => "B",
        70..=79 => "C",
        60..=69 => "D",
        _ => "F",
    }
}

fn effectiveness_label(total: u32) -> &'static str {
    match total {
        90.. => "Exceptional - Very likely to impress recruiters",
        80..=89 => "Excellent - Strong chance of getting an interview",
        70..=79 => "Good - Competitive application",
        60..=69 => "Fair - Needs some improvements",
        _ => "Needs Work - Requires significant revision",
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Version comparison heuristics
// ────────────────────────────────────────────────────────────────────────────

fn version_strengths(letter: &str) -> Vec<String> {
    let mut strengths = Vec::new();

    if PERCENT_MENTION.find_iter(letter).count() >= STRENGTH_PERCENT_MENTIONS {
        strengths.push("quantifiable achievements".to_string());
    }
    if letter.split_whitespace().count() >= STRENGTH_WORD_COUNT {
        strengths.push("comprehensive coverage".to_string());
    }
    if letter.split("\n\n").count() == STRENGTH_PARAGRAPHS {
        strengths.push("well-structured".to_string());
    }
    if STRONG_VERBS.find_iter(letter).count() >= STRENGTH_ACTION_VERBS {
        strengths.push("strong action verbs".to_string());
    }

    if strengths.is_empty() {
        strengths.push("acceptable format".to_string());
    }
    strengths
}

fn version_weaknesses(letter: &str) -> Vec<String> {
    let mut weaknesses = Vec::new();

    if !ANY_DIGIT.is_match(letter) {
        weaknesses.push("lacks specific metrics".to_string());
    }

    let word_count = letter.split_whitespace().count();
    if word_count < WEAK_WORD_COUNT_LOW {
        weaknesses.push("too brief".to_string());
    } else if word_count > WEAK_WORD_COUNT_HIGH {
        weaknesses.push("too lengthy".to_string());
    }

    if letter.contains("I am a") || letter.contains("I am very") {
        weaknesses.push("generic phrasing".to_string());
    }

    if weaknesses.is_empty() {
        weaknesses.push("minor improvements possible".to_string());
    }
    weaknesses
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> EffectivenessScorer {
        EffectivenessScorer::new()
    }

    fn well_formed_letter() -> String {
        let body: String = vec!["delivering measurable results for Acme Corp"; 60].join(" ");
        format!(
            "I am excited to apply for the Platform Engineer role at Acme Corp.\n\n\
             {body} I increased uptime by 35% across 12 services.\n\n\
             Thank you for your consideration; I would welcome an interview."
        )
    }

    #[test]
    fn test_total_is_weighted_sum() {
        let score = scorer().calculate_score(&well_formed_letter(), 80, 90, 70);
        // structure and personalization are both 100 for this letter
        assert_eq!(score.breakdown["structure"], 100);
        assert_eq!(score.breakdown["personalization"], 100);
        // 80*0.3 + 90*0.2 + 70*0.2 + 100*0.15 + 100*0.15 = 86
        assert_eq!(score.total, 86);
        assert_eq!(score.grade, "B");
    }

    #[test]
    fn test_scores_always_in_bounds() {
        for letter in ["", "short", &well_formed_letter()] {
            let score = scorer().calculate_score(letter, 0, 0, 0);
            assert!(score.total <= 100);
            for (key, value) in &score.breakdown {
                assert!(*value <= 100, "{key} = {value}");
            }
        }
    }

    #[test]
    fn test_grades_and_labels() {
        assert_eq!(grade_for(95), "A");
        assert_eq!(grade_for(85), "B");
        assert_eq!(grade_for(75), "C");
        assert_eq!(grade_for(65), "D");
        assert_eq!(grade_for(30), "F");
        assert!(effectiveness_label(95).starts_with("Exceptional"));
        assert!(effectiveness_label(30).starts_with("Needs Work"));
    }

    #[test]
    fn test_structure_penalizes_missing_paragraphs() {
        // One paragraph, no cues, too short: 100 - 20 - 15 - 15 - 15 = 35
        assert_eq!(structure_score("just one short paragraph"), 35);
    }

    #[test]
    fn test_structure_three_paragraphs_not_penalized() {
        let letter = format!(
            "I am writing to apply for this role.\n\n{}\n\nThank you; I hope to discuss further.",
            vec!["relevant experience"; 100].join(" ")
        );
        assert_eq!(structure_score(&letter), 100);
    }

    #[test]
    fn test_structure_too_many_paragraphs() {
        let letter = format!(
            "The role interests me.\n\na\n\nb\n\nc\n\nd\n\n{} thank you for the interview.",
            vec!["word"; 200].join(" ")
        );
        // 6 paragraphs: -10 only
        assert_eq!(structure_score(&letter), 90);
    }

    #[test]
    fn test_personalization_boilerplate_and_missing_numbers() {
        // 500-word letter, 3 paragraphs, no numbers, boilerplate opening.
        let body = vec!["experience"; 478].join(" ");
        let letter = format!(
            "To Whom It May Concern, I am writing about the advertised role.\n\n{body}\n\n\
             Thank you for your time and the chance to interview."
        );
        let personalization = personalization_score(&letter);
        // -10 boilerplate, -15 no numerics; proper noun and role cue present
        assert_eq!(personalization, 75);
        // 3 paragraphs is acceptable; opening contains cue words
        assert_eq!(structure_score(&letter), 100);
    }

    #[test]
    fn test_personalization_missing_proper_noun() {
        let letter = "i want this role because it pays 10 dollars";
        // all lowercase: no proper-noun phrase (-20); has numeric; has role cue
        assert_eq!(personalization_score(letter), 80);
    }

    #[test]
    fn test_suggestions_trigger_below_thresholds() {
        let score = scorer().calculate_score("short letter", 70, 70, 60);
        let suggestions = scorer().get_suggestions("short letter", &score);
        let titles: Vec<&str> = suggestions.iter().map(|s| s.title.as_str()).collect();
        assert!(titles.contains(&"Improve ATS Compatibility"));
        assert!(titles.contains(&"Fix Grammar and Style Issues"));
        assert!(titles.contains(&"Add More Relevant Keywords"));
        assert!(titles.contains(&"Add Quantifiable Achievements"));
    }

    #[test]
    fn test_no_high_suggestions_for_strong_letter() {
        let letter = well_formed_letter();
        let score = scorer().calculate_score(&letter, 90, 95, 85);
        let suggestions = scorer().get_suggestions(&letter, &score);
        assert!(
            suggestions.iter().all(|s| s.priority != Priority::High),
            "unexpected high-priority suggestions: {suggestions:?}"
        );
    }

    #[test]
    fn test_passive_voice_suggestion_is_low_priority() {
        let letter = "The system was designed by me. The code was reviewed by peers. \
                      The release was shipped on time. The plan was approved by all.";
        let score = scorer().calculate_score(letter, 90, 90, 90);
        let suggestions = scorer().get_suggestions(letter, &score);
        let passive = suggestions
            .iter()
            .find(|s| s.title == "Use More Active Voice")
            .expect("passive-voice suggestion expected");
        assert_eq!(passive.priority, Priority::Low);
    }

    #[test]
    fn test_compare_versions_ranks_descending() {
        let versions = vec![
            LetterVersion {
                content: "weak letter".to_string(),
                ats_score: Some(40),
                grammar_score: Some(50),
                keyword_score: Some(30),
            },
            LetterVersion {
                content: well_formed_letter(),
                ats_score: Some(90),
                grammar_score: Some(95),
                keyword_score: Some(85),
            },
            LetterVersion {
                content: "middling letter about the role".to_string(),
                ats_score: None,
                grammar_score: None,
                keyword_score: None,
            },
        ];

        let report = scorer().compare_versions(&versions).unwrap();
        assert_eq!(report.rankings.len(), 3);
        assert!(report.rankings[0].score >= report.rankings[1].score);
        assert!(report.rankings[1].score >= report.rankings[2].score);
        assert_eq!(report.recommended, report.rankings[0].version);
        assert_eq!(report.recommended, 2);
        assert!(report.recommendation_reason.contains("Version 2"));
    }

    #[test]
    fn test_compare_versions_defaults_missing_sub_scores() {
        let content = "middling letter about the role";
        let report = scorer()
            .compare_versions(&[LetterVersion {
                content: content.to_string(),
                ats_score: None,
                grammar_score: None,
                keyword_score: None,
            }])
            .unwrap();
        let expected = scorer().calculate_score(
            content,
            DEFAULT_ATS_SCORE,
            DEFAULT_GRAMMAR_SCORE,
            DEFAULT_KEYWORD_SCORE,
        );
        assert_eq!(report.rankings[0].score, expected.total);
        // 75*0.30 + 85*0.20 + 70*0.20 + structure 50*0.15 + personalization 65*0.15
        assert_eq!(report.rankings[0].score, 70);
    }

    #[test]
    fn test_compare_versions_empty_input() {
        assert!(scorer().compare_versions(&[]).is_none());
    }

    #[test]
    fn test_version_strengths_fallback() {
        assert_eq!(version_strengths("plain"), vec!["acceptable format"]);
    }

    #[test]
    fn test_version_strengths_detects_quantification() {
        let letter = format!(
            "Achieved 20% growth and 15% cost savings. {}",
            vec!["word"; 300].join(" ")
        );
        let strengths = version_strengths(&letter);
        assert!(strengths.contains(&"quantifiable achievements".to_string()));
        assert!(strengths.contains(&"comprehensive coverage".to_string()));
    }

    #[test]
    fn test_version_weaknesses() {
        let weaknesses = version_weaknesses("I am a hard worker without numbers");
        assert!(weaknesses.contains(&"lacks specific metrics".to_string()));
        assert!(weaknesses.contains(&"too brief".to_string()));
        assert!(weaknesses.contains(&"generic phrasing".to_string()));
    }

    #[test]
    fn test_score_reports_matches_raw_scores() {
        struct Fixed(u32);
        impl Scored for Fixed {
            fn score(&self) -> u32 {
                self.0
            }
        }
        let letter = well_formed_letter();
        let via_trait = scorer().score_reports(&letter, &Fixed(80), &Fixed(90), &Fixed(70));
        let via_ints = scorer().calculate_score(&letter, 80, 90, 70);
        assert_eq!(via_trait, via_ints);
    }
}
