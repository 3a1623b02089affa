//! Form-submission guard for a single analysis session.
//!
//! A session starts unsubmitted. `submit` stores the resume text and job
//! description and flips `form_submitted` exactly once; inputs are never
//! mutated afterwards.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::analysis::AnalysisReport;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please Upload both Resume and Job Description to analyze")]
    MissingInput,

    #[error("This session has already been submitted")]
    AlreadySubmitted,

    #[error("Submit a resume and job description before requesting analysis")]
    NotSubmitted,
}

#[derive(Debug, Clone)]
pub struct FormSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    /// Bumped on every store access; idle eviction is measured from here.
    pub last_active_at: DateTime<Utc>,
    resume_text: String,
    job_description: String,
    form_submitted: bool,
    analysis: Option<AnalysisReport>,
}

/// Client-facing view of a session. Never includes the raw inputs.
#[derive(Debug, Serialize)]
pub struct SessionStatus {
    pub session_id: Uuid,
    pub form_submitted: bool,
    pub resume_chars: usize,
    pub job_description_chars: usize,
    pub analysis_ready: bool,
    pub created_at: DateTime<Utc>,
    pub last_active_at: DateTime<Utc>,
}

impl FormSession {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            last_active_at: now,
            resume_text: String::new(),
            job_description: String::new(),
            form_submitted: false,
            analysis: None,
        }
    }

    /// Both inputs must be non-blank; a session can be submitted once.
    pub fn submit(
        &mut self,
        resume_text: String,
        job_description: String,
    ) -> Result<(), FormError> {
        if self.form_submitted {
            return Err(FormError::AlreadySubmitted);
        }
        if resume_text.trim().is_empty() || job_description.trim().is_empty() {
            return Err(FormError::MissingInput);
        }
        self.resume_text = resume_text;
        self.job_description = job_description;
        self.form_submitted = true;
        Ok(())
    }

    pub fn touch(&mut self) {
        self.last_active_at = Utc::now();
    }

    pub fn is_submitted(&self) -> bool {
        self.form_submitted
    }

    /// `(resume_text, job_description)` once the form has been submitted.
    pub fn inputs(&self) -> Result<(&str, &str), FormError> {
        if !self.form_submitted {
            return Err(FormError::NotSubmitted);
        }
        Ok((&self.resume_text, &self.job_description))
    }

    pub fn record_analysis(&mut self, analysis: AnalysisReport) {
        self.analysis = Some(analysis);
    }

    pub fn analysis(&self) -> Option<&AnalysisReport> {
        self.analysis.as_ref()
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            session_id: self.id,
            form_submitted: self.form_submitted,
            resume_chars: self.resume_text.chars().count(),
            job_description_chars: self.job_description.chars().count(),
            analysis_ready: self.analysis.is_some(),
            created_at: self.created_at,
            last_active_at: self.last_active_at,
        }
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_unsubmitted() {
        let session = FormSession::new();
        assert!(!session.is_submitted());
        assert_eq!(session.inputs(), Err(FormError::NotSubmitted));
        assert!(session.analysis().is_none());
    }

    #[test]
    fn test_submit_flips_flag_and_stores_inputs() {
        let mut session = FormSession::new();
        session
            .submit("Rust, Tokio, Axum".to_string(), "Backend engineer".to_string())
            .unwrap();
        assert!(session.is_submitted());
        assert_eq!(
            session.inputs().unwrap(),
            ("Rust, Tokio, Axum", "Backend engineer")
        );
    }

    #[test]
    fn test_empty_job_description_blocks_submission() {
        let mut session = FormSession::new();
        let err = session
            .submit("resume text".to_string(), "   ".to_string())
            .unwrap_err();
        assert_eq!(err, FormError::MissingInput);
        assert!(!session.is_submitted());
    }

    #[test]
    fn test_empty_resume_blocks_submission() {
        let mut session = FormSession::new();
        let err = session
            .submit(String::new(), "Backend engineer".to_string())
            .unwrap_err();
        assert_eq!(err, FormError::MissingInput);
        assert_eq!(
            err.to_string(),
            "Please Upload both Resume and Job Description to analyze"
        );
    }

    #[test]
    fn test_second_submission_rejected_and_inputs_unchanged() {
        let mut session = FormSession::new();
        session.submit("first".to_string(), "jd".to_string()).unwrap();
        let err = session
            .submit("second".to_string(), "other".to_string())
            .unwrap_err();
        assert_eq!(err, FormError::AlreadySubmitted);
        assert_eq!(session.inputs().unwrap(), ("first", "jd"));
    }

    #[test]
    fn test_status_reports_lengths_not_content() {
        let mut session = FormSession::new();
        session.submit("héllo".to_string(), "jd".to_string()).unwrap();
        let status = session.status();
        assert!(status.form_submitted);
        assert_eq!(status.resume_chars, 5);
        assert_eq!(status.job_description_chars, 2);
        assert!(!status.analysis_ready);
    }

    #[test]
    fn test_touch_moves_last_active_but_not_created() {
        let mut session = FormSession::new();
        session.created_at = Utc::now() - chrono::Duration::minutes(90);
        session.last_active_at = session.created_at;
        session.touch();
        assert!(session.last_active_at > session.created_at + chrono::Duration::minutes(89));
        assert_eq!(session.status().last_active_at, session.last_active_at);
    }
}
