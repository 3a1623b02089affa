//! Analysis pipeline: similarity score → LLM report → score extraction → HTML.

use serde::Serialize;
use tracing::info;

use crate::analysis::render::render_report_html;
use crate::analysis::report::ReportGenerator;
use crate::errors::AppError;
use crate::scoring::{average_score, extract_scores, SimilarityScorer};

/// Everything produced by one analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Embedding cosine similarity between resume and job description, in [-1, 1].
    pub ats_score: f32,
    /// Mean of the report's per-point scores as a fraction of 5. Zero when none were found.
    pub ai_score: f64,
    pub report_scores: Vec<f64>,
    pub report: String,
    pub report_html: String,
}

pub async fn run_analysis(
    resume_text: &str,
    job_description: &str,
    scorer: &dyn SimilarityScorer,
    generator: &dyn ReportGenerator,
) -> Result<AnalysisReport, AppError> {
    let ats_score = scorer.score(resume_text, job_description).await?;
    info!("ATS similarity score: {ats_score:.3}");

    let report = generator.generate(resume_text, job_description).await?;

    let report_scores = extract_scores(&report);
    let ai_score = average_score(&report_scores);
    info!(
        "AI analysis score: {ai_score:.3} ({} scored points)",
        report_scores.len()
    );

    let report_html = render_report_html(&report);

    Ok(AnalysisReport {
        ats_score,
        ai_score,
        report_scores,
        report,
        report_html,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedScorer(f32);

    #[async_trait]
    impl SimilarityScorer for FixedScorer {
        async fn score(&self, _resume: &str, _jd: &str) -> Result<f32, AppError> {
            Ok(self.0)
        }
    }

    struct CannedReport(&'static str);

    #[async_trait]
    impl ReportGenerator for CannedReport {
        async fn generate(&self, _resume: &str, _jd: &str) -> Result<String, AppError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingReport;

    #[async_trait]
    impl ReportGenerator for FailingReport {
        async fn generate(&self, _resume: &str, _jd: &str) -> Result<String, AppError> {
            Err(AppError::Llm("503 upstream".to_string()))
        }
    }

    #[tokio::test]
    async fn test_pipeline_combines_scores() {
        let report = run_analysis(
            "resume",
            "jd",
            &FixedScorer(0.734),
            &CannedReport("✅ 5/5 Rust\n⚠️ 2.5/5 Kafka"),
        )
        .await
        .unwrap();

        assert_eq!(report.ats_score, 0.734);
        assert_eq!(report.report_scores, vec![5.0, 2.5]);
        assert!((report.ai_score - 0.75).abs() < 1e-9);
        assert!(report.report_html.contains("<br>"));
    }

    #[tokio::test]
    async fn test_report_without_scores_gives_zero() {
        let report = run_analysis("r", "j", &FixedScorer(0.1), &CannedReport(""))
            .await
            .unwrap();
        assert_eq!(report.ai_score, 0.0);
        assert!(report.report_scores.is_empty());
    }

    #[tokio::test]
    async fn test_llm_failure_propagates() {
        let err = run_analysis("r", "j", &FixedScorer(0.5), &FailingReport)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }
}
