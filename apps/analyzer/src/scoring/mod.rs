// Scoring: the ATS-style similarity score (embeddings) and the AI score
// (average of the per-point `N/5` scores found in a generated report).

pub mod report_scores;
pub mod similarity;

pub use report_scores::{average_score, extract_scores};
pub use similarity::{EmbeddingSimilarityScorer, SimilarityScorer};
