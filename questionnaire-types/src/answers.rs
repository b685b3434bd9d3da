use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Answer, QuestionId};

/// The answers collected in one session.
///
/// At most one answer per question id; inserting again replaces the old one.
/// Serializes as a flat JSON object `{ "<question id>": "<answer>", ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    answers: HashMap<QuestionId, Answer>,
}

impl AnswerSet {
    /// Create a new empty answer set.
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
        }
    }

    /// Insert an answer, returning the one it replaced.
    pub fn insert(&mut self, answer: Answer) -> Option<Answer> {
        self.answers.insert(answer.question_id(), answer)
    }

    pub fn get(&self, id: QuestionId) -> Option<&Answer> {
        self.answers.get(&id)
    }

    /// The answer text for `id`, if any.
    pub fn value(&self, id: QuestionId) -> Option<&str> {
        self.get(id).map(Answer::value)
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.answers.contains_key(&id)
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    /// Ids of all answered questions, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.answers.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.answers.values()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// The id-to-text mapping that gets posted to the answers endpoint.
    pub fn to_map(&self) -> HashMap<String, String> {
        self.answers
            .iter()
            .map(|(id, answer)| (id.to_string(), answer.value().to_string()))
            .collect()
    }
}

impl FromIterator<Answer> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        let mut set = Self::new();
        for answer in iter {
            set.insert(answer);
        }
        set
    }
}

impl IntoIterator for AnswerSet {
    type Item = Answer;
    type IntoIter = std::collections::hash_map::IntoValues<QuestionId, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.answers.into_values()
    }
}

impl Serialize for AnswerSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.answers.iter().map(|(id, a)| (id, a.value())))
    }
}

impl<'de> Deserialize<'de> for AnswerSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = HashMap::<QuestionId, String>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .map(|(id, value)| Answer::new(id, value))
            .collect())
    }
}
