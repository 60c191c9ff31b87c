//! HTTP handlers for the analysis API.
//!
//! Thin adapters only: deserialize the request, call the pure analyzer,
//! serialize the report. Empty text fields are accepted and degrade inside
//! the analyzers; structural mistakes (no versions to compare) are rejected
//! with a validation error.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::effectiveness::{ComparisonReport, EffectivenessScore, LetterVersion};
use crate::analysis::grammar::{CoachingHint, GrammarReport};
use crate::analysis::keywords::KeywordReport;
use crate::analysis::report::{ScoreReport, Suggestion};
use crate::analysis::skills::{SkillGapReport, SkillMatchReport};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct KeywordAnalysisRequest {
    pub letter: String,
    pub job_posting: String,
}

#[derive(Debug, Serialize)]
pub struct KeywordAnalysisResponse {
    #[serde(flatten)]
    pub report: KeywordReport,
    /// Keyword density (percent of tokens) for each matched keyword.
    pub density: BTreeMap<String, f32>,
    /// Letter sections where still-missing keywords could be worked in.
    pub placement: BTreeMap<String, Vec<String>>,
}

/// POST /api/v1/analysis/keywords
pub async fn handle_keywords(
    State(state): State<AppState>,
    Json(req): Json<KeywordAnalysisRequest>,
) -> Result<Json<KeywordAnalysisResponse>, AppError> {
    let report = state.analyzers.keywords.analyze(&req.letter, &req.job_posting);

    let density: BTreeMap<String, f32> = report
        .matched
        .iter()
        .map(|kw| (kw.clone(), state.analyzers.keywords.density(&req.letter, kw)))
        .collect();
    let placement = state
        .analyzers
        .keywords
        .suggest_placement(&req.letter, &report.missing);

    Ok(Json(KeywordAnalysisResponse {
        report,
        density,
        placement,
    }))
}

#[derive(Debug, Deserialize)]
pub struct SkillMatchRequest {
    pub resume: String,
    pub job_posting: String,
    pub letter: String,
}

/// POST /api/v1/analysis/skills
pub async fn handle_skills(
    State(state): State<AppState>,
    Json(req): Json<SkillMatchRequest>,
) -> Result<Json<SkillMatchReport>, AppError> {
    let report = state
        .analyzers
        .skills
        .match_skills(&req.resume, &req.job_posting, &req.letter);
    Ok(Json(report))
}

#[derive(Debug, Deserialize)]
pub struct SkillGapRequest {
    pub resume: String,
    pub job_posting: String,
}

/// POST /api/v1/analysis/skill-gaps
pub async fn handle_skill_gaps(
    State(state): State<AppState>,
    Json(req): Json<SkillGapRequest>,
) -> Result<Json<SkillGapReport>, AppError> {
    let report = state
        .analyzers
        .skills
        .skill_gaps(&req.resume, &req.job_posting);
    Ok(Json(report))
}

#[derive(Debug, Deserialize)]
pub struct AtsRequest {
    pub letter: String,
    pub job_posting: String,
}

/// POST /api/v1/analysis/ats
pub async fn handle_ats(
    State(state): State<AppState>,
    Json(req): Json<AtsRequest>,
) -> Result<Json<ScoreReport>, AppError> {
    let report = state
        .analyzers
        .ats
        .calculate_ats_score(&req.letter, &req.job_posting);
    Ok(Json(report))
}

#[derive(Debug, Deserialize)]
pub struct GrammarRequest {
    pub letter: String,
}

#[derive(Debug, Serialize)]
pub struct GrammarResponse {
    #[serde(flatten)]
    pub report: GrammarReport,
    pub hints: Vec<CoachingHint>,
}

/// POST /api/v1/analysis/grammar
pub async fn handle_grammar(
    State(state): State<AppState>,
    Json(req): Json<GrammarRequest>,
) -> Result<Json<GrammarResponse>, AppError> {
    let report = state.analyzers.grammar.check(&req.letter);
    let hints = state.analyzers.grammar.suggest_improvements(&req.letter);
    Ok(Json(GrammarResponse { report, hints }))
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub letter: String,
    pub job_posting: String,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub effectiveness: EffectivenessScore,
    pub suggestions: Vec<Suggestion>,
    pub ats: ScoreReport,
    pub grammar: GrammarReport,
    pub keywords: KeywordReport,
}

/// POST /api/v1/analysis/score
///
/// Runs the full pipeline: ATS, grammar, and keyword analysis feed the
/// weighted effectiveness aggregate.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let ats = state
        .analyzers
        .ats
        .calculate_ats_score(&req.letter, &req.job_posting);
    let grammar = state.analyzers.grammar.check(&req.letter);
    let keywords = state.analyzers.keywords.analyze(&req.letter, &req.job_posting);

    let effectiveness = state
        .analyzers
        .effectiveness
        .score_reports(&req.letter, &ats, &grammar, &keywords);
    let suggestions = state
        .analyzers
        .effectiveness
        .get_suggestions(&req.letter, &effectiveness);

    Ok(Json(ScoreResponse {
        effectiveness,
        suggestions,
        ats,
        grammar,
        keywords,
    }))
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub versions: Vec<LetterVersion>,
}

/// POST /api/v1/analysis/compare
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(req): Json<CompareRequest>,
) -> Result<Json<ComparisonReport>, AppError> {
    let report = state
        .analyzers
        .effectiveness
        .compare_versions(&req.versions)
        .ok_or_else(|| AppError::Validation("at least one version is required".to_string()))?;
    Ok(Json(report))
}
