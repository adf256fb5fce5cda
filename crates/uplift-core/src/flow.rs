//! Per-session state machine of a single section traversal.
//!
//! `NotStarted -> InProgress { cursor } -> Scoring -> Complete`. The cursor only moves by one
//! question at a time and the answer set always holds exactly the answers before the cursor.

use crate::answers::AnswerSet;
use crate::error::FlowError;
use crate::scoring::{self, Outcome};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use uplift_config::{Question, Section};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    NotStarted,
    InProgress,
    Scoring,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    NotStarted,
    InProgress { cursor: usize },
    Scoring,
    Complete(Outcome),
}

impl FlowState {
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            Self::NotStarted => Phase::NotStarted,
            Self::InProgress { .. } => Phase::InProgress,
            Self::Scoring => Phase::Scoring,
            Self::Complete(_) => Phase::Complete,
        }
    }
}

/// What the UI needs to render the current step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowView {
    pub quest_id: String,
    pub section_id: String,
    pub phase: Phase,
    pub cursor: usize,
    pub question_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
    /// Earlier answer to the current question, kept after stepping back over it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefill: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackOutcome {
    Moved(FlowView),
    /// Back on the first question; the caller leaves the flow.
    ExitedFlow,
}

#[derive(Debug)]
pub struct FlowController {
    quest_id: String,
    section: Arc<Section>,
    state: FlowState,
    answers: AnswerSet,
    retained: BTreeMap<usize, String>,
}

impl FlowController {
    #[must_use]
    pub fn new(quest_id: impl Into<String>, section: Arc<Section>) -> Self {
        Self {
            quest_id: quest_id.into(),
            section,
            state: FlowState::NotStarted,
            answers: AnswerSet::new(),
            retained: BTreeMap::new(),
        }
    }

    pub fn start(&mut self) -> Result<FlowView, FlowError> {
        if self.state != FlowState::NotStarted {
            return Err(self.invalid("start"));
        }
        if self.section.question_count() == 0 {
            return Err(FlowError::EmptySection {
                section: self.section.id().to_owned(),
            });
        }
        self.state = FlowState::InProgress { cursor: 0 };
        tracing::debug!(
            quest_id = self.quest_id,
            section_id = self.section.id(),
            questions = self.section.question_count(),
            "section started"
        );
        Ok(self.view())
    }

    /// Records the answer to the current question and advances. A rejected answer leaves the
    /// flow untouched.
    pub fn submit_answer(&mut self, token: &str) -> Result<FlowView, FlowError> {
        let FlowState::InProgress { cursor } = self.state else {
            return Err(self.invalid("submit an answer"));
        };
        let question = self.section.question(cursor).ok_or_else(|| FlowError::EmptySection {
            section: self.section.id().to_owned(),
        })?;
        let accepted = question.accept(token).map_err(|reason| FlowError::InvalidAnswer {
            question_index: cursor,
            reason,
        })?;

        self.answers.push(accepted);
        self.retained.remove(&cursor);
        let next = cursor + 1;
        self.state = if next == self.section.question_count() {
            FlowState::Scoring
        } else {
            FlowState::InProgress { cursor: next }
        };
        tracing::debug!(section_id = self.section.id(), question_index = cursor, "answer accepted");
        Ok(self.view())
    }

    pub fn go_back(&mut self) -> Result<BackOutcome, FlowError> {
        let FlowState::InProgress { cursor } = self.state else {
            return Err(self.invalid("go back"));
        };
        if cursor == 0 {
            tracing::debug!(section_id = self.section.id(), "left section from first question");
            return Ok(BackOutcome::ExitedFlow);
        }
        if let Some(previous) = self.answers.pop() {
            self.retained.insert(cursor - 1, previous);
        }
        self.state = FlowState::InProgress { cursor: cursor - 1 };
        Ok(BackOutcome::Moved(self.view()))
    }

    /// Scores the fully answered section. Runs once; the flow is complete afterwards.
    pub fn finish_scoring(&mut self) -> Result<Outcome, FlowError> {
        if self.state != FlowState::Scoring {
            return Err(self.invalid("finish"));
        }
        let outcome = scoring::evaluate(&self.section, &self.answers)?;
        self.state = FlowState::Complete(outcome.clone());
        tracing::debug!(
            section_id = self.section.id(),
            category_id = outcome.category().map(|c| c.id.as_str()),
            "section complete"
        );
        Ok(outcome)
    }

    #[must_use]
    pub fn view(&self) -> FlowView {
        let cursor = self.cursor();
        let in_progress = matches!(self.state, FlowState::InProgress { .. });
        FlowView {
            quest_id: self.quest_id.clone(),
            section_id: self.section.id().to_owned(),
            phase: self.state.phase(),
            cursor,
            question_count: self.section.question_count(),
            question: in_progress.then(|| self.section.question(cursor).cloned()).flatten(),
            prefill: in_progress.then(|| self.retained.get(&cursor).cloned()).flatten(),
        }
    }

    /// Index of the current question; the question count once every question is answered.
    #[must_use]
    pub fn cursor(&self) -> usize {
        match self.state {
            FlowState::NotStarted => 0,
            FlowState::InProgress { cursor } => cursor,
            FlowState::Scoring | FlowState::Complete(_) => self.section.question_count(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &FlowState {
        &self.state
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    #[must_use]
    pub fn section(&self) -> &Arc<Section> {
        &self.section
    }

    #[must_use]
    pub fn quest_id(&self) -> &str {
        &self.quest_id
    }

    fn invalid(&self, action: &'static str) -> FlowError {
        FlowError::InvalidTransition {
            action,
            phase: self.state.phase(),
        }
    }
}
