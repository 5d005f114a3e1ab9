//! Triage endpoints.
//!
//! - `POST /api/triage/classify`: classify typed symptoms
//! - `POST /api/triage/regions`: classify a body-map selection
//!
//! A follow-up outcome opens a session; a deferral is answered by the
//! reasoning service (or its conservative fallback) in the same response.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, ClassifyRequest, RegionsRequest, SessionView, TriageResponse};
use crate::models::enums::Language;
use crate::reasoning::{assess_with_fallback, ChatMessage};
use crate::session::TriageSession;
use crate::triage::orchestrator::classify_localized;
use crate::triage::{text_from_regions, ClassificationOutcome, FollowUpSession};

/// Upper bound on accepted symptom text, in characters.
const MAX_TEXT_CHARS: usize = 4000;

/// `POST /api/triage/classify`
pub async fn classify(
    State(ctx): State<ApiContext>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Json<TriageResponse>, ApiError> {
    let Json(req) = payload?;
    if req.text.chars().count() > MAX_TEXT_CHARS {
        return Err(ApiError::BadRequest(format!(
            "Text too long (max {MAX_TEXT_CHARS} chars)"
        )));
    }

    let outcome = classify_localized(&req.text, None, req.language);
    respond(&ctx, outcome, &req.text, req.language, req.history).await
}

/// `POST /api/triage/regions`
pub async fn regions(
    State(ctx): State<ApiContext>,
    payload: Result<Json<RegionsRequest>, JsonRejection>,
) -> Result<Json<TriageResponse>, ApiError> {
    let Json(req) = payload?;
    let text = text_from_regions(&req.regions)?;

    let outcome = classify_localized(&text, None, req.language);
    respond(&ctx, outcome, &text, req.language, req.history).await
}

/// Carry an outcome to its next step: open a session or consult the reasoning service.
pub(crate) async fn respond(
    ctx: &ApiContext,
    outcome: ClassificationOutcome,
    original_text: &str,
    language: Language,
    history: Vec<ChatMessage>,
) -> Result<Json<TriageResponse>, ApiError> {
    let mut session = None;
    let mut verdict = None;

    match &outcome {
        ClassificationOutcome::NeedsFollowUp { question_set, .. } => {
            let followup = FollowUpSession::new(*question_set, original_text);
            let view_source = followup.clone();
            let id = ctx
                .sessions
                .start(TriageSession::new(followup, language, history))?;
            session = Some(SessionView::of(id, &view_source));
        }
        ClassificationOutcome::DeferToReasoningService { augmented_text } => {
            verdict = Some(
                assess_with_fallback(
                    ctx.reasoning.as_ref(),
                    augmented_text,
                    &history,
                    ctx.reasoning_timeout,
                )
                .await,
            );
        }
        ClassificationOutcome::Emergency { .. } | ClassificationOutcome::InvalidInput { .. } => {}
    }

    Ok(Json(TriageResponse {
        outcome,
        session,
        verdict,
    }))
}
