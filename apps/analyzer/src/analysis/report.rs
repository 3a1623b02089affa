//! Report generation: turns resume text + job description into the LLM evaluation report.

use async_trait::async_trait;
use tracing::info;

use crate::analysis::prompts::build_analysis_prompt;
use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// Carried in `AppState` as `Arc<dyn ReportGenerator>`.
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    async fn generate(&self, resume_text: &str, job_description: &str) -> Result<String, AppError>;
}

/// Sends the filled analysis prompt verbatim to the chat-completion API and
/// returns the raw response text.
pub struct LlmReportGenerator(pub LlmClient);

#[async_trait]
impl ReportGenerator for LlmReportGenerator {
    async fn generate(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<String, AppError> {
        let prompt = build_analysis_prompt(resume_text, job_description);
        let report = self
            .0
            .complete(&prompt)
            .await
            .map_err(|e| AppError::Llm(format!("Report generation failed: {e}")))?;
        info!("Generated report ({} chars)", report.len());
        Ok(report)
    }
}
