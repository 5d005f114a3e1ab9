//! Follow-up session endpoints.
//!
//! - `GET    /api/triage/sessions/:id`: current question and answer
//! - `POST   /api/triage/sessions/:id/answer`: answer the current question
//! - `POST   /api/triage/sessions/:id/next`: advance, or finish the triage
//! - `POST   /api/triage/sessions/:id/previous`: step back
//! - `DELETE /api/triage/sessions/:id`: start over

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use super::triage::respond;
use crate::api::error::ApiError;
use crate::api::types::{AnswerInput, AnswerRequest, ApiContext, SessionView, StepResponse};
use crate::models::enums::Language;
use crate::reasoning::ChatMessage;
use crate::session::TriageSession;
use crate::triage::orchestrator::classify_localized;
use crate::triage::{FollowUpAnswers, FollowUpError, FollowUpState};

fn session_id(path: Result<Path<Uuid>, PathRejection>) -> Result<Uuid, ApiError> {
    let Path(id) = path.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    Ok(id)
}

/// `GET /api/triage/sessions/:id`
pub async fn view(
    State(ctx): State<ApiContext>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<SessionView>, ApiError> {
    let id = session_id(path)?;
    let view = ctx
        .sessions
        .with_session(id, |s| SessionView::of(id, &s.followup))?;
    Ok(Json(view))
}

/// `POST /api/triage/sessions/:id/answer`
pub async fn answer(
    State(ctx): State<ApiContext>,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<AnswerRequest>, JsonRejection>,
) -> Result<Json<SessionView>, ApiError> {
    let id = session_id(path)?;
    let Json(req) = payload?;

    let view = ctx
        .sessions
        .with_session(id, |s: &mut TriageSession| -> Result<_, FollowUpError> {
            let followup = &mut s.followup;
            if let Some(question_id) = &req.question_id {
                followup.ensure_current(question_id)?;
            }
            match &req.answer {
                AnswerInput::Scale(value) => followup.answer_scale(*value)?,
                AnswerInput::Choice(option) => followup.answer_choice(option)?,
                AnswerInput::Toggle { option, selected } => {
                    followup.toggle_option(option, *selected)?
                }
            }
            Ok(SessionView::of(id, followup))
        })??;

    Ok(Json(view))
}

/// `POST /api/triage/sessions/:id/next`
///
/// On the last question this completes the session, removes it from the
/// store and runs the second classification pass on the augmented text.
pub async fn next(
    State(ctx): State<ApiContext>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<StepResponse>, ApiError> {
    let id = session_id(path)?;

    let step = ctx
        .sessions
        .with_session(id, |s: &mut TriageSession| -> Result<Step, FollowUpError> {
            let state = s.followup.next()?;
            if state != FollowUpState::Completed {
                return Ok(Step::Continue(SessionView::of(id, &s.followup)));
            }
            let answers = s.followup.answers().ok_or(FollowUpError::Finished)?;
            Ok(Step::Completed {
                original_text: s.followup.original_text().to_string(),
                answers,
                language: s.language,
                history: std::mem::take(&mut s.history),
            })
        })??;

    match step {
        Step::Continue(view) => Ok(Json(StepResponse::Session(view))),
        Step::Completed {
            original_text,
            answers,
            language,
            history,
        } => {
            tracing::info!(
                session_id = %id,
                category = %answers.question_set().category,
                "Follow-up completed"
            );
            let outcome = classify_localized(&original_text, Some(&answers), language);
            let Json(response) = respond(&ctx, outcome, &original_text, language, history).await?;
            Ok(Json(StepResponse::Outcome(response)))
        }
    }
}

/// `POST /api/triage/sessions/:id/previous`
pub async fn previous(
    State(ctx): State<ApiContext>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<SessionView>, ApiError> {
    let id = session_id(path)?;
    let view = ctx
        .sessions
        .with_session(id, |s: &mut TriageSession| -> Result<_, FollowUpError> {
            s.followup.previous()?;
            Ok(SessionView::of(id, &s.followup))
        })??;
    Ok(Json(view))
}

/// `DELETE /api/triage/sessions/:id`
pub async fn start_over(
    State(ctx): State<ApiContext>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = session_id(path)?;
    ctx.sessions.with_session(id, |s| s.followup.start_over())?;
    tracing::info!(session_id = %id, "Follow-up abandoned");
    Ok(StatusCode::NO_CONTENT)
}

enum Step {
    Continue(SessionView),
    Completed {
        original_text: String,
        answers: FollowUpAnswers,
        language: Language,
        history: Vec<ChatMessage>,
    },
}
