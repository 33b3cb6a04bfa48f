// Analysis prompt templates.
// All prompts for the analysis module are defined here.

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an expert resume analyzer and ATS (Applicant Tracking System) specialist. Analyze the following resume and provide detailed feedback.

Resume Content:
{resume_text}

{job_description_block}
Please provide a comprehensive analysis in the following JSON format:
{
    "atsScore": <number between 0-100>,
    "summary": "<brief overall assessment>",
    "skillGaps": "<identified skill gaps{gap_qualifier}>",
    "strengths": "<key strengths and highlights>",
    "recommendations": "<specific actionable recommendations>"{job_fit_field}
}

{json_only}"#;

/// Fills the analysis template. The job-description block, the gap qualifier and the
/// `jobFit` field only appear when a job description is supplied.
pub fn build_analysis_prompt(resume_text: &str, job_description: Option<&str>) -> String {
    let jd = job_description.map(str::trim).filter(|jd| !jd.is_empty());

    let (block, qualifier, job_fit_field) = match jd {
        Some(jd) => (
            format!("Job Description:\n{jd}\n"),
            " compared to job description",
            ",\n    \"jobFit\": \"<percentage match with the job description, e.g. 75%>\"",
        ),
        None => (String::new(), "", ""),
    };

    let filled = ANALYSIS_PROMPT_TEMPLATE
        .replace("{gap_qualifier}", qualifier)
        .replace("{job_fit_field}", job_fit_field)
        .replace("{json_only}", JSON_ONLY_INSTRUCTION);

    // User text is spliced in once; placeholders inside it are never expanded.
    match filled.split_once("{resume_text}") {
        Some((head, tail)) => format!(
            "{head}{resume_text}{}",
            tail.replace("{job_description_block}", &block)
        ),
        None => filled.replace("{job_description_block}", &block),
    }
}
