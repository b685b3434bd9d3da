use crate::QuestionId;

/// Error type for catalog construction.
///
/// A malformed catalog is a configuration error and is reported before any
/// session starts.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Question {0} has empty text")]
    EmptyText(QuestionId),

    #[error("Multiple-choice question {0} has no options")]
    EmptyOptions(QuestionId),

    #[error("Option {index} of question {id} has an empty label")]
    EmptyOptionText { id: QuestionId, index: usize },

    #[error("Duplicate question id: {0}")]
    DuplicateId(QuestionId),

    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
