//! Narrative Composer: turns match statistics into the four feedback sections.
//!
//! Every section has a fixed fallback, so output is never empty even when nothing matched.

use crate::analysis::matcher::MatchResult;
use crate::analysis::taxonomy::Category;

const SUMMARY_OPENING: &str = "The candidate presents a solid profile";
const SUMMARY_CLOSING: &str =
    " The resume is well-structured, though adding more quantifiable metrics could enhance impact.";

const FALLBACK_STRENGTHS: [&str; 2] = ["Clear professional history", "Education credentials visible"];
const FALLBACK_GAP: &str = "Advanced system architecture certifications";

pub const RECOMMENDATIONS: &str = "Quantify achievements with specific numbers \
    (e.g., 'improved performance by 20%'). Ensure all dates are consistent. \
    Tailor the summary to specific job descriptions.";

const SEPARATOR: &str = ", ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narrative {
    pub summary: String,
    pub strengths: String,
    pub skill_gaps: String,
    pub recommendations: String,
}

/// Composes all four sections. `diverse_threshold` is the total match count above which
/// the candidate is credited with a diverse skill set.
pub fn compose_narrative(matches: &MatchResult, diverse_threshold: usize) -> Narrative {
    Narrative {
        summary: compose_summary(matches),
        strengths: compose_strengths(matches, diverse_threshold),
        skill_gaps: compose_skill_gaps(matches),
        recommendations: RECOMMENDATIONS.to_string(),
    }
}

fn compose_summary(matches: &MatchResult) -> String {
    let languages = matches.get(Category::Languages);

    let focus = if languages.len() > 2 {
        let named: Vec<&str> = languages.iter().take(3).map(String::as_str).collect();
        format!(
            " with strong versatility in programming languages ({}).",
            named.join(SEPARATOR)
        )
    } else if matches.has(Category::Frontend) {
        " focused on frontend development technologies.".to_string()
    } else if matches.has(Category::Backend) {
        " with a focus on backend systems.".to_string()
    } else {
        ".".to_string()
    };

    format!("{SUMMARY_OPENING}{focus}{SUMMARY_CLOSING}")
}

fn compose_strengths(matches: &MatchResult, diverse_threshold: usize) -> String {
    let mut strengths = Vec::new();
    if matches.has(Category::Cloud) {
        strengths.push("Modern cloud & DevOps competency");
    }
    if matches.has(Category::SoftSkills) {
        strengths.push("Highlighted soft skills and leadership potential");
    }
    if matches.total() > diverse_threshold {
        strengths.push("Diverse technical skill set");
    }
    if strengths.is_empty() {
        strengths.extend(FALLBACK_STRENGTHS);
    }
    strengths.join(SEPARATOR)
}

fn compose_skill_gaps(matches: &MatchResult) -> String {
    let frontend = matches.has(Category::Frontend);
    let backend = matches.has(Category::Backend);

    let mut gaps = Vec::new();
    if !matches.has(Category::Cloud) {
        gaps.push("Cloud platforms (AWS/Azure)");
    }
    if frontend && !backend {
        gaps.push("Backend integration knowledge");
    }
    if backend && !frontend {
        gaps.push("Modern frontend frameworks");
    }
    if gaps.is_empty() {
        gaps.push(FALLBACK_GAP);
    }
    gaps.join(SEPARATOR)
}
