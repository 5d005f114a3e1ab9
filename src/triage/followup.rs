//! Follow-up question state machine.
//!
//! A session walks one [`QuestionSet`] question by question. Answers are
//! keyed by question id, so moving back and changing an earlier answer
//! keeps every later one. On completion the answers are written back as
//! text and appended to the original description.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use super::questions::{Question, QuestionKind, QuestionSet, NONE_OF_THESE};

const ANSWERS_HEADER: &str = "\n\nAdditional clarifying information:\n";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FollowUpError {
    #[error("Question '{0}' requires an answer")]
    AnswerRequired(&'static str),

    #[error("Follow-up session is already finished")]
    Finished,

    #[error("Already at the first question")]
    AtFirstQuestion,

    #[error("Question '{question_id}' is a {expected} question")]
    WrongKind {
        question_id: &'static str,
        expected: &'static str,
    },

    #[error("'{option}' is not an option of question '{question_id}'")]
    UnknownOption {
        question_id: &'static str,
        option: String,
    },

    #[error("{value} is outside {min}..={max} for question '{question_id}'")]
    OutOfRange {
        question_id: &'static str,
        value: u8,
        min: u8,
        max: u8,
    },

    #[error("Question '{0}' is not the current question")]
    NotCurrentQuestion(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FollowUpState {
    Presenting { index: usize },
    Completed,
    Aborted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Choice(&'static str),
    Scale(u8),
    /// Kept in option declaration order.
    MultiSelect(Vec<&'static str>),
}

impl AnswerValue {
    fn is_empty(&self) -> bool {
        matches!(self, Self::MultiSelect(values) if values.is_empty())
    }

    fn to_text(&self) -> String {
        match self {
            Self::Choice(option) => (*option).to_string(),
            Self::Scale(value) => value.to_string(),
            Self::MultiSelect(values) => values.join(", "),
        }
    }
}

/// Answers of a completed session, ready to be folded into the symptom text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowUpAnswers {
    question_set: &'static QuestionSet,
    values: HashMap<&'static str, AnswerValue>,
}

impl FollowUpAnswers {
    pub fn question_set(&self) -> &'static QuestionSet {
        self.question_set
    }

    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.values.get(question_id)
    }

    /// `Label: value` lines in question order under a fixed header.
    pub fn to_text(&self) -> String {
        let mut text = String::from(ANSWERS_HEADER);
        for question in self.question_set.questions {
            match self.values.get(question.id) {
                Some(value) if !value.is_empty() => {
                    text.push_str(question.label);
                    text.push_str(": ");
                    text.push_str(&value.to_text());
                    text.push('\n');
                }
                _ => {}
            }
        }
        text
    }

    /// Original description with the answers appended.
    pub fn augment(&self, original_text: &str) -> String {
        format!("{original_text}{}", self.to_text())
    }
}

#[derive(Debug, Clone)]
pub struct FollowUpSession {
    question_set: &'static QuestionSet,
    original_text: String,
    state: FollowUpState,
    values: HashMap<&'static str, AnswerValue>,
}

impl FollowUpSession {
    pub fn new(question_set: &'static QuestionSet, original_text: impl Into<String>) -> Self {
        Self {
            question_set,
            original_text: original_text.into(),
            state: FollowUpState::Presenting { index: 0 },
            values: HashMap::new(),
        }
    }

    pub fn state(&self) -> FollowUpState {
        self.state
    }

    pub fn question_set(&self) -> &'static QuestionSet {
        self.question_set
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn is_finished(&self) -> bool {
        !matches!(self.state, FollowUpState::Presenting { .. })
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        match self.state {
            FollowUpState::Presenting { index } => self.question_set.questions.get(index),
            _ => None,
        }
    }

    pub fn answer(&self, question_id: &str) -> Option<&AnswerValue> {
        self.values.get(question_id)
    }

    /// Reject an answer aimed at any question other than the current one.
    pub fn ensure_current(&self, question_id: &str) -> Result<(), FollowUpError> {
        let current = self.presenting()?;
        if current.id == question_id {
            Ok(())
        } else {
            Err(FollowUpError::NotCurrentQuestion(question_id.to_string()))
        }
    }

    pub fn answer_choice(&mut self, option: &str) -> Result<(), FollowUpError> {
        let question = self.presenting()?;
        let QuestionKind::Choice { options } = question.kind else {
            return Err(wrong_kind(question, "choice"));
        };
        let option = find_option(question, options, option)?;
        self.values.insert(question.id, AnswerValue::Choice(option));
        Ok(())
    }

    pub fn answer_scale(&mut self, value: u8) -> Result<(), FollowUpError> {
        let question = self.presenting()?;
        let QuestionKind::Scale { min, max, .. } = question.kind else {
            return Err(wrong_kind(question, "scale"));
        };
        if !(min..=max).contains(&value) {
            return Err(FollowUpError::OutOfRange {
                question_id: question.id,
                value,
                min,
                max,
            });
        }
        self.values.insert(question.id, AnswerValue::Scale(value));
        Ok(())
    }

    /// Select or deselect one option of the current multi-select question.
    ///
    /// Selecting the sentinel clears every other selection; selecting any
    /// other option drops the sentinel.
    pub fn toggle_option(&mut self, option: &str, selected: bool) -> Result<(), FollowUpError> {
        let question = self.presenting()?;
        let QuestionKind::MultiSelect { options } = question.kind else {
            return Err(wrong_kind(question, "multi_select"));
        };
        let option = find_option(question, options, option)?;

        let entry = self
            .values
            .entry(question.id)
            .or_insert_with(|| AnswerValue::MultiSelect(Vec::new()));
        let AnswerValue::MultiSelect(chosen) = entry else {
            return Err(wrong_kind(question, "multi_select"));
        };

        if !selected {
            chosen.retain(|c| *c != option);
        } else if option == NONE_OF_THESE {
            chosen.clear();
            chosen.push(option);
        } else {
            chosen.retain(|c| *c != NONE_OF_THESE);
            if !chosen.contains(&option) {
                chosen.push(option);
                chosen.sort_by_key(|c| options.iter().position(|o| o == c));
            }
        }
        Ok(())
    }

    /// Whether the current question allows moving on.
    pub fn can_proceed(&self) -> bool {
        let Some(question) = self.current_question() else {
            return false;
        };
        if !question.required {
            return true;
        }
        match question.kind {
            // a scale always has a value: its minimum until moved
            QuestionKind::Scale { .. } => true,
            _ => self
                .values
                .get(question.id)
                .is_some_and(|value| !value.is_empty()),
        }
    }

    pub fn next(&mut self) -> Result<FollowUpState, FollowUpError> {
        let question = self.presenting()?;
        if !self.can_proceed() {
            return Err(FollowUpError::AnswerRequired(question.id));
        }

        if let QuestionKind::Scale { min, .. } = question.kind {
            self.values
                .entry(question.id)
                .or_insert(AnswerValue::Scale(min));
        }

        let FollowUpState::Presenting { index } = self.state else {
            return Err(FollowUpError::Finished);
        };
        self.state = if index + 1 < self.question_set.len() {
            FollowUpState::Presenting { index: index + 1 }
        } else {
            FollowUpState::Completed
        };
        Ok(self.state)
    }

    pub fn previous(&mut self) -> Result<FollowUpState, FollowUpError> {
        match self.state {
            FollowUpState::Presenting { index: 0 } => Err(FollowUpError::AtFirstQuestion),
            FollowUpState::Presenting { index } => {
                self.state = FollowUpState::Presenting { index: index - 1 };
                Ok(self.state)
            }
            _ => Err(FollowUpError::Finished),
        }
    }

    /// Abandon the session from any state.
    pub fn start_over(&mut self) {
        self.state = FollowUpState::Aborted;
        self.values.clear();
    }

    /// Collected answers, available once the session is completed.
    pub fn answers(&self) -> Option<FollowUpAnswers> {
        (self.state == FollowUpState::Completed).then(|| FollowUpAnswers {
            question_set: self.question_set,
            values: self.values.clone(),
        })
    }

    fn presenting(&self) -> Result<&'static Question, FollowUpError> {
        self.current_question().ok_or(FollowUpError::Finished)
    }
}

fn wrong_kind(question: &'static Question, expected: &'static str) -> FollowUpError {
    FollowUpError::WrongKind {
        question_id: question.id,
        expected,
    }
}

fn find_option(
    question: &'static Question,
    options: &'static [&'static str],
    option: &str,
) -> Result<&'static str, FollowUpError> {
    options
        .iter()
        .copied()
        .find(|o| *o == option)
        .ok_or_else(|| FollowUpError::UnknownOption {
            question_id: question.id,
            option: option.to_string(),
        })
}
