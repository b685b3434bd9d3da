use tracing::debug;

use crate::{Answer, AnswerSet, QuestionCatalog, QuestionId};

/// Accumulates answers for one questionnaire session.
///
/// Recording is total: any id and any value are accepted. Checking ids
/// against a catalog is the session's job.
#[derive(Debug, Clone, Default)]
pub struct AnswerCollector {
    answers: AnswerSet,
}

impl AnswerCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` as the answer to `question_id`.
    ///
    /// An empty value is ignored and leaves any earlier answer in place.
    pub fn record(&mut self, question_id: QuestionId, value: &str) {
        if value.is_empty() {
            debug!(question_id = %question_id, "ignoring empty answer");
            return;
        }

        debug!(question_id = %question_id, "recording answer");
        self.answers.insert(Answer::new(question_id, value));
    }

    /// Snapshot of the answers recorded so far.
    pub fn answers(&self) -> AnswerSet {
        self.answers.clone()
    }

    pub fn value(&self, question_id: QuestionId) -> Option<&str> {
        self.answers.value(question_id)
    }

    /// True iff every required question in `catalog` has an answer.
    pub fn is_complete(&self, catalog: &QuestionCatalog) -> bool {
        catalog.required().all(|q| self.answers.contains(q.id()))
    }

    /// Required questions without an answer, in catalog order.
    pub fn missing_required(&self, catalog: &QuestionCatalog) -> Vec<QuestionId> {
        catalog
            .required()
            .map(|q| q.id())
            .filter(|id| !self.answers.contains(*id))
            .collect()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }
}
