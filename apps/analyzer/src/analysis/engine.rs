//! Local scoring engine: the deterministic, always-available analysis path.
//!
//! Pipeline: taxonomy match → score → narrative → job fit. The engine holds only
//! immutable state, so one instance is shared across all requests.

use tracing::debug;

use crate::analysis::job_fit::estimate_fit;
use crate::analysis::matcher::{MatchMode, MatchResult, TaxonomyMatcher};
use crate::analysis::narrative::compose_narrative;
use crate::analysis::record::AnalysisRecord;
use crate::analysis::score::{compose_score, ScoreWeights};
use crate::analysis::taxonomy::KeywordTaxonomy;

#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub weights: ScoreWeights,
    /// Total matches above which "Diverse technical skill set" is credited.
    pub diverse_threshold: usize,
    pub match_mode: MatchMode,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            diverse_threshold: 5,
            match_mode: MatchMode::Substring,
        }
    }
}

#[derive(Debug)]
pub struct ScoringEngine {
    matcher: TaxonomyMatcher,
    weights: ScoreWeights,
    diverse_threshold: usize,
}

impl ScoringEngine {
    pub fn new(taxonomy: &KeywordTaxonomy, settings: EngineSettings) -> Result<Self, regex::Error> {
        Ok(Self {
            matcher: TaxonomyMatcher::new(taxonomy, settings.match_mode)?,
            weights: settings.weights,
            diverse_threshold: settings.diverse_threshold,
        })
    }

    pub fn find_matches(&self, resume_text: &str) -> MatchResult {
        self.matcher.find(resume_text)
    }

    /// Scores a resume. Total over its input: any text, including empty, yields a record.
    pub fn analyze(&self, resume_text: &str, job_description: Option<&str>) -> AnalysisRecord {
        let matches = self.find_matches(resume_text);
        let ats_score = compose_score(&matches, &self.weights);
        let narrative = compose_narrative(&matches, self.diverse_threshold);

        debug!(
            total = matches.total(),
            categories = matches.non_empty_categories(),
            ats_score,
            "Local analysis complete"
        );

        AnalysisRecord {
            ats_score,
            summary: narrative.summary,
            skill_gaps: narrative.skill_gaps,
            strengths: narrative.strengths,
            recommendations: narrative.recommendations,
            job_fit: Some(estimate_fit(resume_text, job_description)),
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self {
            matcher: TaxonomyMatcher::new(&KeywordTaxonomy::default(), MatchMode::Substring)
                .expect("built-in taxonomy compiles"),
            weights: ScoreWeights::default(),
            diverse_threshold: EngineSettings::default().diverse_threshold,
        }
    }
}
