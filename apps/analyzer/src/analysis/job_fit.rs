/// Placeholder returned when there is nothing to compare against.
pub const NOT_APPLICABLE: &str = "N/A";

/// Estimates how much of a job description is echoed by the resume.
///
/// The job description is split on runs of non-word characters; each non-empty token
/// that occurs (case-insensitively) somewhere in the resume counts as matched.
/// Returns `"NN%"`, or `"N/A"` when there is no job description or it has no tokens.
pub fn estimate_fit(resume_text: &str, job_description: Option<&str>) -> String {
    let Some(jd) = job_description.filter(|jd| !jd.trim().is_empty()) else {
        return NOT_APPLICABLE.to_string();
    };

    let tokens: Vec<String> = jd
        .split(|c: char| !is_word_char(c))
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect();

    if tokens.is_empty() {
        return NOT_APPLICABLE.to_string();
    }

    let resume = resume_text.to_lowercase();
    let matched = tokens.iter().filter(|t| resume.contains(t.as_str())).count();
    let percent = (matched as f64 / tokens.len() as f64 * 100.0).round() as u32;

    format!("{percent}%")
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
