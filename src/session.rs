//! In-memory store for follow-up sessions awaiting answers.
//!
//! Key properties:
//! - Sessions live only in memory, keyed by a random id
//! - Sessions idle longer than the TTL are purged on every access
//! - A session that completes or is abandoned leaves the store

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use thiserror::Error;
use uuid::Uuid;

use crate::config::SESSION_IDLE_TTL;
use crate::models::enums::Language;
use crate::reasoning::ChatMessage;
use crate::triage::FollowUpSession;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Follow-up session not found: {0}")]
    NotFound(Uuid),

    #[error("Session store lock poisoned")]
    LockPoisoned,
}

// ═══════════════════════════════════════════════════════════
// TriageSession: one pending follow-up
// ═══════════════════════════════════════════════════════════

/// A follow-up session plus what is needed to finish the triage afterwards.
#[derive(Debug, Clone)]
pub struct TriageSession {
    pub followup: FollowUpSession,
    pub language: Language,
    pub history: Vec<ChatMessage>,
}

impl TriageSession {
    pub fn new(followup: FollowUpSession, language: Language, history: Vec<ChatMessage>) -> Self {
        Self {
            followup,
            language,
            history,
        }
    }
}

struct Entry {
    session: TriageSession,
    last_access: Instant,
}

// ═══════════════════════════════════════════════════════════
// SessionStore
// ═══════════════════════════════════════════════════════════

pub struct SessionStore {
    entries: Mutex<HashMap<Uuid, Entry>>,
    idle_ttl: Duration,
}

impl SessionStore {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            idle_ttl,
        }
    }

    /// Register a new session and return its id.
    pub fn start(&self, session: TriageSession) -> Result<Uuid, SessionError> {
        let mut entries = self.lock()?;
        self.purge_idle(&mut entries);

        let id = Uuid::new_v4();
        entries.insert(
            id,
            Entry {
                session,
                last_access: Instant::now(),
            },
        );
        tracing::debug!(session_id = %id, active = entries.len(), "Follow-up session started");
        Ok(id)
    }

    /// Run `f` against a session under the store lock.
    ///
    /// The session is dropped from the store if it is finished afterwards.
    pub fn with_session<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut TriageSession) -> R,
    ) -> Result<R, SessionError> {
        let mut entries = self.lock()?;
        self.purge_idle(&mut entries);

        let entry = entries.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        entry.last_access = Instant::now();
        let result = f(&mut entry.session);

        if entry.session.followup.is_finished() {
            entries.remove(&id);
            tracing::debug!(session_id = %id, "Follow-up session finished and removed");
        }
        Ok(result)
    }

    /// Drop a session. Returns false if it was not present.
    pub fn remove(&self, id: Uuid) -> Result<bool, SessionError> {
        let mut entries = self.lock()?;
        self.purge_idle(&mut entries);
        Ok(entries.remove(&id).is_some())
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<Uuid, Entry>>, SessionError> {
        self.entries.lock().map_err(|_| SessionError::LockPoisoned)
    }

    fn purge_idle(&self, entries: &mut HashMap<Uuid, Entry>) {
        let before = entries.len();
        entries.retain(|_, entry| entry.last_access.elapsed() < self.idle_ttl);
        let purged = before - entries.len();
        if purged > 0 {
            tracing::info!(purged, "Purged idle follow-up sessions");
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(SESSION_IDLE_TTL)
    }
}
