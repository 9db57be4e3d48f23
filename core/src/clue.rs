use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::protocol::ClueRecord;
use crate::strip_italics;

/// How far a clue has been revealed. Only ever advances `Hidden -> Question -> Answer`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    #[default]
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    pub const fn next(self) -> Self {
        use RevealState::*;
        match self {
            Hidden => Question,
            Question | Answer => Answer,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Answer)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    ShowQuestion,
    ShowAnswer,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    showing: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            showing: RevealState::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn showing(&self) -> RevealState {
        self.showing
    }

    /// Advances one step along the reveal cycle.
    pub fn reveal(&mut self) -> RevealOutcome {
        use RevealState::*;
        let outcome = match self.showing {
            Hidden => RevealOutcome::ShowQuestion,
            Question => RevealOutcome::ShowAnswer,
            Answer => RevealOutcome::NoChange,
        };
        self.showing = self.showing.next();
        outcome
    }
}

impl From<ClueRecord> for Clue {
    fn from(record: ClueRecord) -> Self {
        let answer: String = strip_italics(&record.answer).into();
        Self::new(record.question, answer)
    }
}
