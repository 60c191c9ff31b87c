//! Keyword coverage analysis between a letter and a job posting.
//!
//! Extracts frequency-ranked significant terms from each document and
//! measures how much of the job posting's vocabulary the letter covers.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::analysis::report::Scored;
use crate::analysis::vocabulary::Vocabulary;

/// How many ranked keywords to extract per document during analysis.
pub const MAX_RANKED_KEYWORDS: usize = 30;
/// Caps on the matched/missing lists returned to callers.
const MATCHED_CAP: usize = 15;
const MISSING_CAP: usize = 10;
/// Top-N keyword entries echoed back in the report.
const REPORT_KEYWORD_CAP: usize = 10;
/// Suggestion thresholds on the matched-term count.
const LOW_MATCH_COUNT: usize = 5;
const STRONG_MATCH_COUNT: usize = 10;
/// Importance weighting: frequency scaled, with bonuses for domain terms and
/// longer (usually more specific) terms.
const FREQUENCY_WEIGHT: f32 = 10.0;
const DOMAIN_TERM_BONUS: f32 = 1.5;
const LONG_TERM_BONUS: f32 = 1.2;
const LONG_TERM_LEN: usize = 8;

/// Curated domain-specific term lists. Terms on any list rank higher.
const DOMAIN_TERMS: &[(&str, &[&str])] = &[
    (
        "technology",
        &[
            "python", "java", "javascript", "react", "angular", "vue", "node", "docker",
            "kubernetes", "aws", "azure", "gcp", "sql", "nosql", "api", "rest", "graphql",
            "microservices", "agile", "scrum", "devops", "git", "jenkins", "terraform",
            "ansible",
        ],
    ),
    (
        "finance",
        &[
            "financial", "analysis", "modeling", "valuation", "portfolio", "risk",
            "compliance", "audit", "gaap", "ifrs", "derivatives", "equity", "hedge",
            "trading",
        ],
    ),
    (
        "marketing",
        &[
            "seo", "sem", "ppc", "roi", "analytics", "conversion", "funnel", "campaign",
            "brand", "content", "engagement", "growth", "acquisition", "retention", "crm",
            "automation",
        ],
    ),
    (
        "healthcare",
        &[
            "patient", "clinical", "diagnosis", "treatment", "care", "medical", "nursing",
            "healthcare", "ehr", "hipaa", "pharmacology", "therapy", "procedure",
            "assessment",
        ],
    ),
];

/// A ranked keyword: normalized term, raw frequency, derived importance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub term: String,
    pub frequency: u32,
    pub importance: f32,
}

/// Full keyword coverage report for a letter against a job posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordReport {
    /// Percentage of job-posting keywords present in the letter, 0-100.
    pub coverage: u32,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub job_keywords: Vec<KeywordEntry>,
    pub letter_keywords: Vec<KeywordEntry>,
    pub suggestions: Vec<String>,
}

impl Scored for KeywordReport {
    fn score(&self) -> u32 {
        self.coverage
    }
}

/// Frequency-ranking keyword analyzer over the shared vocabulary filter.
pub struct KeywordAnalyzer {
    vocabulary: Vocabulary,
}

impl KeywordAnalyzer {
    pub fn new(vocabulary: Vocabulary) -> Self {
        KeywordAnalyzer { vocabulary }
    }

    /// Extracts the top `max_keywords` terms ranked descending by importance.
    /// Ties keep first-seen document order (the sort is stable).
    pub fn extract_keywords(&self, text: &str, max_keywords: usize) -> Vec<KeywordEntry> {
        let terms = self.vocabulary.extract_terms(text);

        let mut counts: HashMap<&str, u32> = HashMap::new();
        let mut first_seen: Vec<&str> = Vec::new();
        for term in &terms {
            let count = counts.entry(term.as_str()).or_insert(0);
            if *count == 0 {
                first_seen.push(term.as_str());
            }
            *count += 1;
        }

        let mut entries: Vec<KeywordEntry> = first_seen
            .into_iter()
            .map(|term| KeywordEntry {
                term: term.to_string(),
                frequency: counts[term],
                importance: importance(term, counts[term]),
            })
            .collect();

        entries.sort_by(|a, b| {
            b.importance
                .partial_cmp(&a.importance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        entries.truncate(max_keywords);
        entries
    }

    /// Full coverage analysis: how much of the job posting's significant
    /// vocabulary appears in the letter.
    pub fn analyze(&self, letter: &str, job_posting: &str) -> KeywordReport {
        let mut job_keywords = self.extract_keywords(job_posting, MAX_RANKED_KEYWORDS);
        let mut letter_keywords = self.extract_keywords(letter, MAX_RANKED_KEYWORDS);

        let job_terms: HashSet<&str> = job_keywords.iter().map(|k| k.term.as_str()).collect();
        let letter_terms: HashSet<&str> = letter_keywords.iter().map(|k| k.term.as_str()).collect();

        let mut matched: Vec<String> = job_terms
            .intersection(&letter_terms)
            .map(|t| t.to_string())
            .collect();
        let mut missing: Vec<String> = job_terms
            .difference(&letter_terms)
            .map(|t| t.to_string())
            .collect();
        matched.sort();
        missing.sort();

        let coverage = if job_terms.is_empty() {
            0
        } else {
            (matched.len() * 100 / job_terms.len()) as u32
        };

        let suggestions = build_suggestions(matched.len(), &missing);

        matched.truncate(MATCHED_CAP);
        missing.truncate(MISSING_CAP);
        job_keywords.truncate(REPORT_KEYWORD_CAP);
        letter_keywords.truncate(REPORT_KEYWORD_CAP);

        KeywordReport {
            coverage,
            matched,
            missing,
            job_keywords,
            letter_keywords,
            suggestions,
        }
    }

    /// Density of one keyword as a percentage of all whitespace tokens.
    pub fn density(&self, text: &str, keyword: &str) -> f32 {
        let keyword = keyword.to_lowercase();
        let words: Vec<String> = text
            .split_whitespace()
            .map(|w| w.to_lowercase())
            .collect();
        if words.is_empty() {
            return 0.0;
        }
        let count = words.iter().filter(|w| **w == keyword).count();
        let density = count as f32 / words.len() as f32 * 100.0;
        (density * 100.0).round() / 100.0
    }

    /// Maps keywords still missing from each paragraph to the letter section
    /// where they could be worked in.
    pub fn suggest_placement(
        &self,
        letter: &str,
        keywords: &[String],
    ) -> BTreeMap<String, Vec<String>> {
        let paragraphs: Vec<&str> = letter.split("\n\n").collect();
        let total = paragraphs.len();

        let mut placements = BTreeMap::new();
        for (index, paragraph) in paragraphs.iter().enumerate() {
            let paragraph_lower = paragraph.to_lowercase();
            let missing: Vec<String> = keywords
                .iter()
                .filter(|kw| !paragraph_lower.contains(&kw.to_lowercase()))
                .take(3)
                .cloned()
                .collect();
            if !missing.is_empty() {
                placements.insert(section_label(index, total), missing);
            }
        }
        placements
    }
}

fn importance(term: &str, frequency: u32) -> f32 {
    let mut score = frequency as f32 * FREQUENCY_WEIGHT;
    if DOMAIN_TERMS
        .iter()
        .any(|(_, terms)| terms.contains(&term))
    {
        score *= DOMAIN_TERM_BONUS;
    }
    if term.chars().count() > LONG_TERM_LEN {
        score *= LONG_TERM_BONUS;
    }
    (score * 100.0).round() / 100.0
}

fn build_suggestions(matched_count: usize, missing: &[String]) -> Vec<String> {
    let mut suggestions = Vec::new();

    if matched_count < LOW_MATCH_COUNT {
        suggestions
            .push("Add more keywords from the job posting to improve the ATS match".to_string());
    }

    if !missing.is_empty() {
        let top_missing: Vec<&str> = missing.iter().take(3).map(String::as_str).collect();
        suggestions.push(format!("Consider incorporating: {}", top_missing.join(", ")));
    }

    if matched_count >= STRONG_MATCH_COUNT {
        suggestions.push("Great keyword coverage. Focus on natural integration.".to_string());
    }

    suggestions
}

fn section_label(index: usize, total: usize) -> String {
    if index == 0 {
        "Opening".to_string()
    } else if index == total - 1 {
        "Closing".to_string()
    } else {
        format!("Body Paragraph {index}")
    }
}
