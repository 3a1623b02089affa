//! Similarity scoring: pluggable, trait-based scorer comparing resume text with a job description.
//!
//! Default: `EmbeddingSimilarityScorer` (local ONNX sentence embeddings via fastembed,
//! `sentence-transformers/all-mpnet-base-v2`, cosine similarity).
//!
//! `AppState` holds an `Arc<dyn SimilarityScorer>`.

use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use async_trait::async_trait;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use tracing::{debug, info};

use crate::errors::AppError;

/// Implement this to swap similarity backends without touching handlers.
#[async_trait]
pub trait SimilarityScorer: Send + Sync {
    /// Returns a similarity in [-1, 1]. Identical inputs must yield identical scores.
    async fn score(&self, resume_text: &str, job_description: &str) -> Result<f32, AppError>;
}

/// Sentence-embedding scorer. The model is downloaded to the fastembed cache and
/// loaded on first use, then reused for every request.
#[derive(Clone, Default)]
pub struct EmbeddingSimilarityScorer {
    model: Arc<Mutex<Option<TextEmbedding>>>,
}

impl EmbeddingSimilarityScorer {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SimilarityScorer for EmbeddingSimilarityScorer {
    async fn score(&self, resume_text: &str, job_description: &str) -> Result<f32, AppError> {
        let model = Arc::clone(&self.model);
        let resume_text = resume_text.to_string();
        let job_description = job_description.to_string();

        tokio::task::spawn_blocking(move || embed_and_compare(&model, resume_text, job_description))
            .await
            .map_err(|e| AppError::Embedding(format!("embedding task aborted: {e}")))?
            .map_err(|e| AppError::Embedding(e.to_string()))
    }
}

fn embed_and_compare(
    model: &Mutex<Option<TextEmbedding>>,
    resume_text: String,
    job_description: String,
) -> anyhow::Result<f32> {
    let mut guard = model
        .lock()
        .map_err(|_| anyhow!("embedding model lock poisoned"))?;

    if guard.is_none() {
        info!("Loading embedding model {:?}", EmbeddingModel::AllMpnetBaseV2);
        let options =
            InitOptions::new(EmbeddingModel::AllMpnetBaseV2).with_show_download_progress(false);
        *guard = Some(
            TextEmbedding::try_new(options)
                .map_err(|e| anyhow!("Failed to load embedding model: {e}"))?,
        );
    }

    let model = guard
        .as_mut()
        .ok_or_else(|| anyhow!("embedding model unavailable"))?;

    // Each text is encoded on its own, as a single-item batch.
    let resume_embedding = embed_one(model, resume_text)?;
    let jd_embedding = embed_one(model, job_description)?;

    let similarity = cosine_similarity(&resume_embedding, &jd_embedding);
    debug!(
        "Embedding similarity {similarity:.4} (dim {})",
        resume_embedding.len()
    );
    Ok(similarity)
}

fn embed_one(model: &mut TextEmbedding, text: String) -> anyhow::Result<Vec<f32>> {
    model
        .embed(vec![text], None)
        .map_err(|e| anyhow!("Failed to embed text: {e}"))?
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("No embedding returned"))
}

/// Compute cosine similarity between two vectors.
/// Returns 0.0 when either vector has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_similarity_identical() {
        let a = vec![0.3, 2.0, 3.5];
        let sim = cosine_similarity(&a, &a.clone());
        assert!((sim - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_cosine_similarity_orthogonal() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![0.0, 1.0, 0.0];
        assert!(cosine_similarity(&a, &b).abs() < 0.0001);
    }

    #[test]
    fn test_cosine_similarity_opposite() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![-1.0, -2.0, -3.0];
        assert!((cosine_similarity(&a, &b) + 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_cosine_similarity_zero_vector() {
        let a = vec![0.0, 0.0, 0.0];
        let b = vec![1.0, 2.0, 3.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_similarity_is_deterministic() {
        let a = vec![0.12, -0.7, 0.33, 0.05];
        let b = vec![0.4, 0.1, -0.2, 0.9];
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&a, &b));
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    #[test]
    fn test_cosine_similarity_bounded() {
        let a = vec![1e-20, 3.0];
        let b = vec![1e-20, 3.0];
        let sim = cosine_similarity(&a, &b);
        assert!((-1.0..=1.0).contains(&sim));
    }
}
