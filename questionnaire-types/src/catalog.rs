use std::collections::HashSet;

use serde::Serialize;

use crate::{CatalogError, Question, QuestionId, QuestionKind};

/// The ordered, immutable list of questions a session presents.
///
/// Only constructible through [`QuestionCatalog::new`] (or [`QuestionCatalog::from_json`]),
/// so every catalog in circulation has unique ids, non-empty texts and
/// non-empty option lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Validate and wrap the given questions.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(questions.len());

        for question in &questions {
            let id = question.id();

            if !seen.insert(id) {
                return Err(CatalogError::DuplicateId(id));
            }
            if question.text().trim().is_empty() {
                return Err(CatalogError::EmptyText(id));
            }
            if let QuestionKind::MultipleChoice { options } = question.kind() {
                if options.is_empty() {
                    return Err(CatalogError::EmptyOptions(id));
                }
                if let Some(index) = options.iter().position(|o| o.text().trim().is_empty()) {
                    return Err(CatalogError::EmptyOptionText { id, index });
                }
            }
        }

        Ok(Self { questions })
    }

    /// Parse a JSON array of questions, then validate it.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    /// An empty catalog. Every session over it is complete.
    pub fn empty() -> Self {
        Self {
            questions: Vec::new(),
        }
    }

    /// All questions, in presentation order.
    pub fn all(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.get(id).is_some()
    }

    /// Questions whose absence blocks completion.
    pub fn required(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|q| q.is_required())
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChoiceOption;

    #[test]
    fn keeps_order() {
        let a = Question::text_filling("First?", None, false);
        let b = Question::text_filling("Second?", None, true);
        let catalog = QuestionCatalog::new(vec![a.clone(), b.clone()]).unwrap();

        assert_eq!(catalog.all(), &[a, b.clone()]);
        assert_eq!(catalog.required().map(Question::id).collect::<Vec<_>>(), vec![b.id()]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let q = Question::text_filling("Again?", None, false);
        let result = QuestionCatalog::new(vec![q.clone(), q.clone()]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == q.id()));
    }

    #[test]
    fn rejects_empty_options() {
        let q = Question::multiple_choice("Pick one", vec![], true);
        assert!(matches!(QuestionCatalog::new(vec![q]), Err(CatalogError::EmptyOptions(_))));
    }

    #[test]
    fn rejects_empty_option_label() {
        let q = Question::multiple_choice(
            "Pick one",
            vec![ChoiceOption::plain("Yes"), ChoiceOption::text_filling(" ", None)],
            false,
        );
        assert!(matches!(
            QuestionCatalog::new(vec![q]),
            Err(CatalogError::EmptyOptionText { index: 1, .. })
        ));
    }

    #[test]
    fn rejects_empty_text() {
        let q = Question::text_filling("", None, false);
        assert!(matches!(QuestionCatalog::new(vec![q]), Err(CatalogError::EmptyText(_))));
    }

    #[test]
    fn from_json_validates() {
        let json = r#"[
            { "text": "Difficulty?", "is_required": true,
              "kind": { "type": "multiple_choice", "options": [] } }
        ]"#;
        assert!(matches!(
            QuestionCatalog::from_json(json),
            Err(CatalogError::EmptyOptions(_))
        ));
        assert!(matches!(
            QuestionCatalog::from_json("{"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn json_round_trip_keeps_ids() {
        let catalog = QuestionCatalog::new(vec![
            Question::multiple_choice("Language?", vec!["Rust".into(), "C++".into()], false),
            Question::text_filling("Why?", Some("Your answer"), true),
        ])
        .unwrap();

        let json = serde_json::to_string(&catalog).unwrap();
        let back = QuestionCatalog::from_json(&json).unwrap();
        assert_eq!(back, catalog);
    }
}
