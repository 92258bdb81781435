//! Session State
//!
//! In-memory, per-process sessions. The only flag a session carries is
//! disclaimer acceptance; accepting is idempotent and sticky for the
//! session's lifetime. Nothing is persisted.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Flags attached to one browser session
#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    pub id: Uuid,
    pub disclaimer_accepted: bool,
    pub created_at: DateTime<Utc>,
}

impl SessionState {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            disclaimer_accepted: false,
            created_at: Utc::now(),
        }
    }
}

/// In-memory session registry
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, SessionState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh session with the disclaimer unaccepted
    pub async fn create(&self) -> SessionState {
        let session = SessionState::new();
        self.sessions
            .write()
            .await
            .insert(session.id, session.clone());

        tracing::debug!(session_id = %session.id, "Created session");
        session
    }

    pub async fn get(&self, id: Uuid) -> Option<SessionState> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Mark the disclaimer accepted; returns the updated session, or `None`
    /// for an unknown id. Accepting twice is a no-op.
    pub async fn accept_disclaimer(&self, id: Uuid) -> Option<SessionState> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id)?;

        if !session.disclaimer_accepted {
            session.disclaimer_accepted = true;
            tracing::info!(session_id = %id, "Disclaimer accepted");
        }

        Some(session.clone())
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
