use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::form::FormSession;

/// In-memory session registry. Sessions live until removed or left idle past the TTL.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, FormSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> FormSession {
        let session = FormSession::new();
        self.sessions
            .write()
            .await
            .insert(session.id, session.clone());
        debug!("Session {} created", session.id);
        session
    }

    /// Snapshot of the session. Counts as activity.
    pub async fn get(&self, id: Uuid) -> Result<FormSession, AppError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
        session.touch();
        Ok(session.clone())
    }

    /// Applies `f` to the session under the write lock and marks it active.
    pub async fn update<T, F>(&self, id: Uuid, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut FormSession) -> Result<T, AppError>,
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
        session.touch();
        f(session)
    }

    /// Ends the session, discarding its inputs and report.
    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        match self.sessions.write().await.remove(&id) {
            Some(_) => {
                debug!("Session {id} removed");
                Ok(())
            }
            None => Err(session_not_found(id)),
        }
    }

    /// Drops sessions with no activity within `ttl`. Returns how many were dropped.
    pub async fn purge_expired(&self, ttl: Duration) -> usize {
        let cutoff = Utc::now() - ttl;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.last_active_at > cutoff);
        let purged = before - sessions.len();
        if purged > 0 {
            info!("Purged {purged} expired sessions");
        }
        purged
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}
