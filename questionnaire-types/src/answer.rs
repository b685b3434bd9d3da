use crate::QuestionId;

/// One submitted value tied to a question.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Answer {
    question_id: QuestionId,
    value: String,
}

impl Answer {
    pub fn new(question_id: QuestionId, value: impl Into<String>) -> Self {
        Self {
            question_id,
            value: value.into(),
        }
    }

    pub fn question_id(&self) -> QuestionId {
        self.question_id
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
