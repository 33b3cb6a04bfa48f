//! Content validation gate: rejects text that does not read like a resume before it is scored.

/// Terms whose presence marks a document as resume-like.
pub const RESUME_TERMS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "work history",
    "project",
    "summary",
    "profile",
    "cv",
    "resume",
    "contact",
    "references",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateResult {
    pub passed: bool,
    pub found: Vec<&'static str>,
    pub required: usize,
}

#[derive(Debug, Clone)]
pub struct ContentGate {
    min_terms: usize,
}

impl ContentGate {
    pub fn new(min_terms: usize) -> Self {
        Self { min_terms }
    }

    /// Case-insensitive substring check against [`RESUME_TERMS`].
    pub fn check(&self, text: &str) -> GateResult {
        let lower = text.to_lowercase();
        let found: Vec<&'static str> = RESUME_TERMS
            .iter()
            .copied()
            .filter(|term| lower.contains(term))
            .collect();

        GateResult {
            passed: found.len() >= self.min_terms,
            found,
            required: self.min_terms,
        }
    }
}

impl Default for ContentGate {
    fn default() -> Self {
        Self::new(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_like_text_passes() {
        let result = ContentGate::default()
            .check("PROFILE\nBackend engineer.\nWORK HISTORY\nAcme Corp 2019-2024\nEDUCATION\nBSc");
        assert!(result.passed);
        assert_eq!(result.found, vec!["education", "work history", "profile"]);
    }

    #[test]
    fn test_single_term_is_not_enough() {
        let result = ContentGate::default().check("My project is a birdhouse.");
        assert!(!result.passed);
        assert_eq!(result.found, vec!["project"]);
    }

    #[test]
    fn test_unrelated_text_is_rejected() {
        let result = ContentGate::default().check("Preheat the oven and whisk two eggs.");
        assert!(!result.passed);
        assert!(result.found.is_empty());
    }

    #[test]
    fn test_python_aws_leadership_sentence_passes() {
        // "Experienced" carries "experience"; "skills" is literal
        let result = ContentGate::default()
            .check("Experienced Python and AWS developer with leadership skills");
        assert!(result.passed);
    }

    #[test]
    fn test_threshold_is_configurable() {
        let gate = ContentGate::new(0);
        assert!(gate.check("").passed);
        let gate = ContentGate::new(3);
        assert!(!gate.check("skills and experience").passed);
    }
}
