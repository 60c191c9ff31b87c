//! Skill matching across resume, job posting, and letter.
//!
//! A fixed, categorized skill vocabulary is scanned against each document
//! with whole-word phrase matching. The key actionable signal is the set of
//! skills the resume already claims but the letter omits.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Caps on the flattened lists returned to callers.
const MATCHED_CAP: usize = 15;
const MISSING_CAP: usize = 10;
const FROM_RESUME_CAP: usize = 8;
/// Match-percentage tiers for the coverage recommendation.
const EXCELLENT_MATCH_PCT: u32 = 80;
const GOOD_MATCH_PCT: u32 = 60;
/// Matched-skill count that earns the diversity recommendation.
const DIVERSE_MATCH_COUNT: usize = 10;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Technical,
    SoftSkills,
    Management,
    Analytical,
    Creative,
    DomainSpecific,
}

/// Hand-curated skill phrases per category. Immutable reference data.
const SKILL_CATEGORIES: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::Technical,
        &[
            "python", "java", "javascript", "c++", "c#", "ruby", "php", "swift", "react",
            "angular", "vue", "node.js", "django", "flask", "spring", "sql", "postgresql",
            "mysql", "mongodb", "redis", "elasticsearch", "aws", "azure", "gcp", "docker",
            "kubernetes", "jenkins", "git", "tensorflow", "pytorch", "scikit-learn", "pandas",
            "numpy", "rest api", "graphql", "microservices", "agile", "scrum",
        ],
    ),
    (
        SkillCategory::SoftSkills,
        &[
            "leadership", "communication", "teamwork", "problem-solving", "critical thinking",
            "creativity", "adaptability", "time management", "collaboration", "negotiation",
            "presentation", "mentoring", "conflict resolution", "decision making",
            "emotional intelligence",
        ],
    ),
    (
        SkillCategory::Management,
        &[
            "project management", "team leadership", "strategic planning", "budget management",
            "stakeholder management", "resource allocation", "risk management",
            "change management", "vendor management", "agile methodology", "scrum master",
            "product management",
        ],
    ),
    (
        SkillCategory::Analytical,
        &[
            "data analysis", "statistical analysis", "business intelligence",
            "financial modeling", "forecasting", "market research", "a/b testing",
            "metrics analysis", "kpi tracking", "reporting",
        ],
    ),
    (
        SkillCategory::Creative,
        &[
            "graphic design", "ui/ux design", "content creation", "copywriting",
            "brand development", "video editing", "photography", "illustration",
            "storytelling", "creative direction",
        ],
    ),
    (
        SkillCategory::DomainSpecific,
        &[
            "compliance", "regulatory", "quality assurance", "customer service", "sales",
            "marketing", "operations", "finance", "accounting", "human resources", "legal",
            "healthcare", "education", "research",
        ],
    ),
];

/// Per-category breakdown of matched and missing skills.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryMatches {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Full skill alignment report across the three documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMatchReport {
    /// Percentage of job-posting skills the letter mentions, 0-100.
    pub match_percentage: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// Skills the resume claims but the letter omits: the highest-value fix.
    pub suggested_from_resume: Vec<String>,
    pub by_category: BTreeMap<SkillCategory, CategoryMatches>,
    pub recommendations: Vec<String>,
}

/// Gap report between a resume and a job posting, no letter involved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGapReport {
    pub gap_percentage: u32,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub total_required: usize,
    pub total_matching: usize,
}

/// Categorical skill matcher over the static skill vocabulary.
pub struct SkillMatcher;

impl SkillMatcher {
    pub fn new() -> Self {
        SkillMatcher
    }

    /// Extracts known skills from a text, grouped by category. Empty
    /// categories are omitted.
    pub fn extract_skills(&self, text: &str) -> BTreeMap<SkillCategory, Vec<String>> {
        let text_lower = text.to_lowercase();
        let mut found = BTreeMap::new();

        for (category, skills) in SKILL_CATEGORIES {
            let hits: Vec<String> = skills
                .iter()
                .filter(|skill| contains_phrase(&text_lower, skill))
                .map(|skill| skill.to_string())
                .collect();
            if !hits.is_empty() {
                found.insert(*category, hits);
            }
        }
        found
    }

    /// Matches skills across the three documents. The target vocabulary is
    /// the job posting's skill set; the candidate set is the letter's.
    pub fn match_skills(&self, resume: &str, job_posting: &str, letter: &str) -> SkillMatchReport {
        let resume_set = flatten(&self.extract_skills(resume));
        let job_set = flatten(&self.extract_skills(job_posting));
        let letter_set = flatten(&self.extract_skills(letter));

        let matched: BTreeSet<String> = job_set.intersection(&letter_set).cloned().collect();
        let missing: BTreeSet<String> = job_set.difference(&letter_set).cloned().collect();
        let available: BTreeSet<String> = missing.intersection(&resume_set).cloned().collect();

        let match_percentage = if job_set.is_empty() {
            0
        } else {
            (matched.len() * 100 / job_set.len()) as u32
        };

        let recommendations =
            build_recommendations(match_percentage, &matched, &missing, &available);

        SkillMatchReport {
            match_percentage,
            matched_skills: matched.iter().take(MATCHED_CAP).cloned().collect(),
            missing_skills: missing.iter().take(MISSING_CAP).cloned().collect(),
            suggested_from_resume: available.iter().take(FROM_RESUME_CAP).cloned().collect(),
            by_category: categorize(&matched, &missing),
            recommendations,
        }
    }

    /// Identifies skill gaps between a resume and a job posting.
    pub fn skill_gaps(&self, resume: &str, job_posting: &str) -> SkillGapReport {
        let resume_set = flatten(&self.extract_skills(resume));
        let job_set = flatten(&self.extract_skills(job_posting));

        let gaps: BTreeSet<String> = job_set.difference(&resume_set).cloned().collect();
        let overlap: BTreeSet<String> = job_set.intersection(&resume_set).cloned().collect();

        let gap_percentage = if job_set.is_empty() {
            0
        } else {
            (gaps.len() * 100 / job_set.len()) as u32
        };

        SkillGapReport {
            gap_percentage,
            total_required: job_set.len(),
            total_matching: overlap.len(),
            matching_skills: overlap.into_iter().collect(),
            missing_skills: gaps.into_iter().collect(),
        }
    }
}

/// Whole-word/phrase containment: the phrase must not be embedded in a longer
/// alphanumeric run on either side.
fn contains_phrase(text_lower: &str, phrase: &str) -> bool {
    let mut search_from = 0;
    while let Some(rel) = text_lower[search_from..].find(phrase) {
        let start = search_from + rel;
        let end = start + phrase.len();

        let before_ok = text_lower[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = text_lower[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
        search_from = end;
    }
    false
}

fn flatten(categorized: &BTreeMap<SkillCategory, Vec<String>>) -> BTreeSet<String> {
    categorized
        .values()
        .flat_map(|skills| skills.iter().cloned())
        .collect()
}

fn categorize(
    matched: &BTreeSet<String>,
    missing: &BTreeSet<String>,
) -> BTreeMap<SkillCategory, CategoryMatches> {
    let mut result = BTreeMap::new();

    for (category, skills) in SKILL_CATEGORIES {
        let category_matched: Vec<String> = skills
            .iter()
            .filter(|s| matched.contains(**s))
            .map(|s| s.to_string())
            .collect();
        let category_missing: Vec<String> = skills
            .iter()
            .filter(|s| missing.contains(**s))
            .map(|s| s.to_string())
            .collect();

        if !category_matched.is_empty() || !category_missing.is_empty() {
            result.insert(
                *category,
                CategoryMatches {
                    matched: category_matched,
                    missing: category_missing,
                },
            );
        }
    }
    result
}

fn build_recommendations(
    match_percentage: u32,
    matched: &BTreeSet<String>,
    missing: &BTreeSet<String>,
    available: &BTreeSet<String>,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if match_percentage >= EXCELLENT_MATCH_PCT {
        recommendations.push(
            "Excellent skill coverage. Your letter highlights most required skills.".to_string(),
        );
    } else if match_percentage >= GOOD_MATCH_PCT {
        recommendations
            .push("Good skill coverage, but consider adding a few more key skills.".to_string());
    } else {
        recommendations.push(
            "Low skill coverage. Add more relevant skills from the job posting.".to_string(),
        );
    }

    if !available.is_empty() {
        let top: Vec<&str> = available.iter().take(3).map(String::as_str).collect();
        recommendations.push(format!(
            "Your resume already lists these skills, but the letter never mentions them: {}",
            top.join(", ")
        ));
    }

    if !missing.is_empty() && available.is_empty() {
        let top: Vec<&str> = missing.iter().take(3).map(String::as_str).collect();
        recommendations.push(format!(
            "Consider acquiring or highlighting transferable skills related to: {}",
            top.join(", ")
        ));
    }

    if matched.len() > DIVERSE_MATCH_COUNT {
        recommendations
            .push("You're highlighting a diverse range of relevant skills.".to_string());
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_skills_categorizes() {
        let m = SkillMatcher::new();
        let skills = m.extract_skills("Python and Docker with strong leadership and data analysis");
        assert!(skills[&SkillCategory::Technical].contains(&"python".to_string()));
        assert!(skills[&SkillCategory::Technical].contains(&"docker".to_string()));
        assert!(skills[&SkillCategory::SoftSkills].contains(&"leadership".to_string()));
        assert!(skills[&SkillCategory::Analytical].contains(&"data analysis".to_string()));
    }

    #[test]
    fn test_empty_categories_omitted() {
        let m = SkillMatcher::new();
        let skills = m.extract_skills("Just python here");
        assert!(skills.contains_key(&SkillCategory::Technical));
        assert!(!skills.contains_key(&SkillCategory::Creative));
    }

    #[test]
    fn test_no_substring_matches() {
        let m = SkillMatcher::new();
        // "java" must not match inside "javascript"
        let skills = m.extract_skills("javascript only");
        let technical = &skills[&SkillCategory::Technical];
        assert!(technical.contains(&"javascript".to_string()));
        assert!(!technical.contains(&"java".to_string()), "got {technical:?}");
    }

    #[test]
    fn test_symbol_heavy_skills_match() {
        let m = SkillMatcher::new();
        let skills = m.extract_skills("Shipped C++ services and node.js tooling");
        let technical = &skills[&SkillCategory::Technical];
        assert!(technical.contains(&"c++".to_string()));
        assert!(technical.contains(&"node.js".to_string()));
    }

    #[test]
    fn test_match_skills_actionable_signal() {
        let m = SkillMatcher::new();
        let resume = "Expert in python, docker, kubernetes, and leadership.";
        let job = "We need python, docker, kubernetes, and communication.";
        let letter = "I have deep python experience.";

        let report = m.match_skills(resume, job, letter);
        assert!(report.matched_skills.contains(&"python".to_string()));
        assert!(report.missing_skills.contains(&"docker".to_string()));
        assert!(report.missing_skills.contains(&"communication".to_string()));
        // docker and kubernetes are on the resume but not in the letter
        assert!(report.suggested_from_resume.contains(&"docker".to_string()));
        assert!(report.suggested_from_resume.contains(&"kubernetes".to_string()));
        // communication is a true gap, absent from the resume too
        assert!(!report.suggested_from_resume.contains(&"communication".to_string()));
        assert_eq!(report.match_percentage, 25);
    }

    #[test]
    fn test_matched_union_missing_equals_target() {
        let m = SkillMatcher::new();
        let job = "python docker leadership data analysis compliance";
        let letter = "python and compliance focus";
        let report = m.match_skills("", job, letter);

        let target = flatten(&m.extract_skills(job));
        let mut reported: BTreeSet<String> = report.matched_skills.iter().cloned().collect();
        reported.extend(report.missing_skills.iter().cloned());
        assert_eq!(reported, target.into_iter().collect::<BTreeSet<_>>());
    }

    #[test]
    fn test_empty_target_yields_zero_percentage() {
        let m = SkillMatcher::new();
        let report = m.match_skills("python resume", "nothing relevant listed", "python letter");
        assert_eq!(report.match_percentage, 0);
        assert!(report.matched_skills.is_empty());
    }

    #[test]
    fn test_suggested_from_resume_is_sorted() {
        let m = SkillMatcher::new();
        let report = m.match_skills(
            "kubernetes docker aws background",
            "kubernetes docker aws required",
            "a letter mentioning none of them",
        );
        assert_eq!(
            report.suggested_from_resume,
            vec!["aws", "docker", "kubernetes"]
        );
    }

    #[test]
    fn test_recommendation_mentions_resume_skills() {
        let m = SkillMatcher::new();
        let report = m.match_skills(
            "docker kubernetes leadership",
            "docker kubernetes leadership communication",
            "unrelated letter",
        );
        assert!(
            report
                .recommendations
                .iter()
                .any(|r| r.contains("resume already lists")),
            "recommendations: {:?}",
            report.recommendations
        );
    }

    #[test]
    fn test_true_gap_recommendation_without_resume_backup() {
        let m = SkillMatcher::new();
        let report = m.match_skills("", "docker kubernetes", "unrelated letter");
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("transferable skills")));
    }

    #[test]
    fn test_by_category_breakdown() {
        let m = SkillMatcher::new();
        let report = m.match_skills("", "python and leadership needed", "python here");
        let technical = &report.by_category[&SkillCategory::Technical];
        assert_eq!(technical.matched, vec!["python"]);
        let soft = &report.by_category[&SkillCategory::SoftSkills];
        assert_eq!(soft.missing, vec!["leadership"]);
    }

    #[test]
    fn test_skill_gaps() {
        let m = SkillMatcher::new();
        let report = m.skill_gaps("python docker", "python docker kubernetes communication");
        assert_eq!(report.total_required, 4);
        assert_eq!(report.total_matching, 2);
        assert_eq!(report.gap_percentage, 50);
        assert!(report.missing_skills.contains(&"kubernetes".to_string()));
        assert!(report.matching_skills.contains(&"python".to_string()));
    }
}
