// Resume analysis: prompt construction, LLM report generation, scoring pipeline
// and report rendering. All LLM calls go through llm_client.

pub mod pipeline;
pub mod prompts;
pub mod render;
pub mod report;

pub use pipeline::{run_analysis, AnalysisReport};
pub use report::{LlmReportGenerator, ReportGenerator};
