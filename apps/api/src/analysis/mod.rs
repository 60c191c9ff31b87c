//! Lexical letter-analysis engine.
//!
//! Every analyzer is pure and deterministic: same inputs, same report, no
//! network or model calls. All scores land in the 0-100 range.

pub mod ats;
pub mod effectiveness;
pub mod grammar;
pub mod handlers;
pub mod keywords;
pub mod report;
pub mod skills;
pub mod vocabulary;

use crate::analysis::ats::AtsScorer;
use crate::analysis::effectiveness::EffectivenessScorer;
use crate::analysis::grammar::GrammarChecker;
use crate::analysis::keywords::KeywordAnalyzer;
use crate::analysis::skills::SkillMatcher;
use crate::analysis::vocabulary::{Locale, Vocabulary};

/// All analyzers, built once at startup over a shared vocabulary filter.
pub struct Analyzers {
    pub keywords: KeywordAnalyzer,
    pub skills: SkillMatcher,
    pub ats: AtsScorer,
    pub grammar: GrammarChecker,
    pub effectiveness: EffectivenessScorer,
}

impl Analyzers {
    pub fn new(locale: Locale) -> Self {
        let vocabulary = Vocabulary::new(locale);
        Analyzers {
            keywords: KeywordAnalyzer::new(vocabulary.clone()),
            skills: SkillMatcher::new(),
            ats: AtsScorer::new(vocabulary),
            grammar: GrammarChecker::new(),
            effectiveness: EffectivenessScorer::new(),
        }
    }
}
