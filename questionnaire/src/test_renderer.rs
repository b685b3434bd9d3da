//! Test renderer for driving sessions without a UI.
//!
//! `TestRenderer` replays a script of input events against the controls it is
//! given, the way a real UI would report keystrokes and selections. Useful
//! for testing catalogs and sessions end to end.
//!
//! # Example
//!
//! ```rust
//! use questionnaire::{Question, QuestionCatalog, QuestionnaireConfig, QuestionnaireSession, TestRenderer};
//!
//! let why = Question::text_filling("Why?", None, true);
//! let id = why.id();
//! let catalog = QuestionCatalog::new(vec![why]).unwrap();
//! let mut session = QuestionnaireSession::new(QuestionnaireConfig::new(catalog));
//!
//! session
//!     .run(&TestRenderer::new().typing(id, "because"))
//!     .unwrap();
//!
//! assert_eq!(session.answers().value(id), Some("because"));
//! ```

use crate::{Affordance, Control, QuestionId, QuestionRenderer};

/// One scripted user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The text field now holds `value`.
    Text { id: QuestionId, value: String },

    /// Choice `index` was picked, with `typed` text for text-filling choices.
    Select {
        id: QuestionId,
        index: usize,
        typed: Option<String>,
    },
}

/// A renderer that replays pre-defined input events.
#[derive(Debug, Clone, Default)]
pub struct TestRenderer {
    events: Vec<InputEvent>,
}

/// Error type for TestRenderer.
#[derive(Debug, thiserror::Error)]
pub enum TestRendererError {
    #[error("No control presented for question {0}")]
    MissingControl(QuestionId),

    #[error("Control for question {id} does not accept {expected}")]
    WrongAffordance { id: QuestionId, expected: &'static str },

    #[error("Choice {index} out of range for question {id}")]
    NoSuchChoice { id: QuestionId, index: usize },
}

impl TestRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_event(mut self, event: InputEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Set the text field's content in one go.
    pub fn with_text(self, id: QuestionId, value: impl Into<String>) -> Self {
        self.with_event(InputEvent::Text {
            id,
            value: value.into(),
        })
    }

    /// Type `value` one character at a time, reporting every intermediate state.
    pub fn typing(mut self, id: QuestionId, value: &str) -> Self {
        for (end, _) in value.char_indices().skip(1) {
            self = self.with_text(id, &value[..end]);
        }
        self.with_text(id, value)
    }

    /// Pick a choice.
    pub fn with_selection(self, id: QuestionId, index: usize) -> Self {
        self.with_event(InputEvent::Select {
            id,
            index,
            typed: None,
        })
    }

    /// Pick a text-filling choice and type into it.
    pub fn with_typed_selection(
        self,
        id: QuestionId,
        index: usize,
        typed: impl Into<String>,
    ) -> Self {
        self.with_event(InputEvent::Select {
            id,
            index,
            typed: Some(typed.into()),
        })
    }
}

impl QuestionRenderer for TestRenderer {
    type Error = TestRendererError;

    fn present(
        &self,
        controls: &[Control],
        on_answer: &mut dyn FnMut(QuestionId, &str),
    ) -> Result<(), Self::Error> {
        for event in &self.events {
            match event {
                InputEvent::Text { id, value } => {
                    let control = find(controls, *id)?;
                    if !matches!(control.affordance, Affordance::TextField { .. }) {
                        return Err(TestRendererError::WrongAffordance {
                            id: *id,
                            expected: "text",
                        });
                    }
                    on_answer(*id, value);
                }
                InputEvent::Select { id, index, typed } => {
                    let control = find(controls, *id)?;
                    let Affordance::Choices(choices) = &control.affordance else {
                        return Err(TestRendererError::WrongAffordance {
                            id: *id,
                            expected: "a selection",
                        });
                    };
                    let choice = choices.get(*index).ok_or(TestRendererError::NoSuchChoice {
                        id: *id,
                        index: *index,
                    })?;

                    let value = match &choice.text_input {
                        None => choice.label.as_str(),
                        Some(_) => typed.as_deref().unwrap_or(""),
                    };
                    on_answer(*id, value);
                }
            }
        }

        Ok(())
    }
}

fn find(controls: &[Control], id: QuestionId) -> Result<&Control, TestRendererError> {
    controls
        .iter()
        .find(|c| c.question_id == id)
        .ok_or(TestRendererError::MissingControl(id))
}
