use crate::{ConfigError, QuestionId};

/// Error type for session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The id is not part of the session's catalog.
    #[error("Unknown question: {0}")]
    UnknownQuestion(QuestionId),

    #[error("Question {0} is not multiple-choice")]
    NotMultipleChoice(QuestionId),

    #[error("Option {index} out of range for question {id} ({len} options)")]
    OptionOutOfRange {
        id: QuestionId,
        index: usize,
        len: usize,
    },

    /// Required questions are still unanswered.
    #[error("{} required question(s) unanswered", .missing.len())]
    Incomplete { missing: Vec<QuestionId> },

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Renderer-specific failure (I/O, UI framework crash, etc.)
    #[error("Renderer error: {0}")]
    Renderer(#[from] anyhow::Error),
}

impl SessionError {
    /// Create a renderer error from any error type.
    pub fn renderer(err: impl Into<anyhow::Error>) -> Self {
        Self::Renderer(err.into())
    }

    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::Incomplete { .. })
    }
}
