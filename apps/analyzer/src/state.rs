use std::sync::Arc;

use crate::analysis::ReportGenerator;
use crate::config::Config;
use crate::scoring::SimilarityScorer;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: SessionStore,
    /// Pluggable similarity backend. Default: EmbeddingSimilarityScorer.
    pub scorer: Arc<dyn SimilarityScorer>,
    /// Pluggable report backend. Default: LlmReportGenerator.
    pub report_generator: Arc<dyn ReportGenerator>,
}
