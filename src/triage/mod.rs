//! Symptom-classification pipeline.
//!
//! Layered text matching over free-text symptom descriptions:
//! input validation → emergency detection → vague-symptom detection →
//! deferral to the external reasoning service. Vague matches open a
//! follow-up session whose answers are folded back into the text for a
//! second pass.

pub mod body_map;
pub mod emergency;
pub mod followup;
pub mod fuzzy;
pub mod orchestrator;
pub mod questions;
pub mod types;
pub mod vague;
pub mod validator;

pub use body_map::{text_from_regions, BodyRegion};
pub use emergency::detect_emergency;
pub use followup::{AnswerValue, FollowUpAnswers, FollowUpError, FollowUpSession, FollowUpState};
pub use fuzzy::{match_pattern, normalize};
pub use orchestrator::classify;
pub use questions::{question_set, Question, QuestionKind, QuestionSet, NONE_OF_THESE};
pub use types::*;
pub use vague::detect_vague;
pub use validator::{check, validate, InvalidReason};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriageError {
    #[error("Invalid {field} value: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("No recognised symptom regions were selected")]
    NoRegionsSelected,
}
