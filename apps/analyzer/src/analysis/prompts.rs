// LLM prompt constants for resume analysis.

/// Resume evaluation prompt. Replace `{resume}` and `{job_description}` before sending.
///
/// The per-point `N/5` scores requested here are what `scoring::extract_scores` parses.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"
# Context:
- You are an AI Resume Analyzer, you will be given Candidate's resume and Job Description of the role he is applying for.

# Instruction:
- Analyze candidate's resume based on the possible points that can be extracted from job description, and give your evaluation on each point with the criteria below:
- Consider all points like required skills, experience, etc that are needed for the job role.
- Calculate the score to be given (out of 5) for every point based on evaluation at the beginning of each point with a detailed explanation.
- If the resume aligns with the job description point, mark it with ✅ and provide a detailed explanation.
- If the resume doesn't align with the job description point, mark it with ❌ and provide a reason for it.
- If a clear conclusion cannot be made, use a ⚠️ sign with a reason.
- The Final Heading should be "Suggestions to improve your resume:" and give where and what the candidate can improve to be selected for that job role.

# Inputs:
Candidate Resume: {resume}
---
Job Description: {job_description}

# Output:
- Each and every point should be given a score (example: 3/5 ).
- Mention the scores and relevant emoji at the beginning of each point and then explain the reason.
"#;

/// Fills the analysis template. The job description is substituted first so
/// a resume containing the literal `{job_description}` is left untouched.
pub fn build_analysis_prompt(resume: &str, job_description: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replacen("{resume}", resume, 1)
}
