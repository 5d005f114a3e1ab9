//! Shared state and response shapes for the HTTP API.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ServiceConfig;
use crate::models::enums::{Language, VagueCategory};
use crate::reasoning::{ChatMessage, ReasoningClient, Verdict};
use crate::session::SessionStore;
use crate::triage::{AnswerValue, ClassificationOutcome, FollowUpSession, FollowUpState, Question};

// ═══════════════════════════════════════════════════════════
// API context: shared state for the router
// ═══════════════════════════════════════════════════════════

/// Shared context for all API routes.
#[derive(Clone)]
pub struct ApiContext {
    pub sessions: Arc<SessionStore>,
    pub reasoning: Arc<dyn ReasoningClient>,
    pub reasoning_timeout: Duration,
}

impl ApiContext {
    pub fn new(reasoning: Arc<dyn ReasoningClient>, config: &ServiceConfig) -> Self {
        Self {
            sessions: Arc::new(SessionStore::default()),
            reasoning,
            reasoning_timeout: config.reasoning_timeout,
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Requests
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
pub struct RegionsRequest {
    pub regions: Vec<crate::triage::BodyRegion>,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

/// Answer to the current question. The shape picks the question kind.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AnswerInput {
    Scale(u8),
    Choice(String),
    Toggle { option: String, selected: bool },
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub question_id: Option<String>,
    pub answer: AnswerInput,
}

// ═══════════════════════════════════════════════════════════
// Responses
// ═══════════════════════════════════════════════════════════

/// Client-facing snapshot of a follow-up session.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub category: VagueCategory,
    #[serde(flatten)]
    pub state: FollowUpState,
    pub total: usize,
    pub question: Option<&'static Question>,
    pub answer: Option<AnswerValue>,
    pub can_proceed: bool,
}

impl SessionView {
    pub fn of(session_id: Uuid, session: &FollowUpSession) -> Self {
        let question = session.current_question();
        Self {
            session_id,
            category: session.question_set().category,
            state: session.state(),
            total: session.question_set().len(),
            question,
            answer: question.and_then(|q| session.answer(q.id).cloned()),
            can_proceed: session.can_proceed(),
        }
    }
}

/// Classification outcome plus whatever the outcome leads to.
#[derive(Debug, Serialize)]
pub struct TriageResponse {
    #[serde(flatten)]
    pub outcome: ClassificationOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
}

/// Result of advancing a session.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum StepResponse {
    Session(SessionView),
    Outcome(TriageResponse),
}
