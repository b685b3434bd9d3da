//! # questionnaire
//!
//! Collect questionnaire answers keyed by question id. Renderer-agnostic.
//!
//! A [`QuestionnaireSession`] is built from an explicit [`QuestionnaireConfig`]
//! holding the catalog and endpoints. UI layers implement [`QuestionRenderer`]
//! and report input through a callback; the session's [`AnswerCollector`]
//! keeps the last non-empty value per question.
//!
//! ## Usage
//!
//! ```rust
//! use questionnaire::{ChoiceOption, Question, QuestionCatalog, QuestionnaireConfig, QuestionnaireSession};
//!
//! let difficulty = Question::multiple_choice(
//!     "How was the assignment?",
//!     vec![ChoiceOption::plain("Easy"), ChoiceOption::text_filling("Other", None)],
//!     true,
//! );
//! let id = difficulty.id();
//!
//! let catalog = QuestionCatalog::new(vec![difficulty]).unwrap();
//! let mut session = QuestionnaireSession::new(QuestionnaireConfig::new(catalog));
//!
//! assert!(!session.is_complete());
//! session.select_option(id, 0, None).unwrap();
//! assert!(session.is_complete());
//!
//! let body = session.submission().unwrap().to_json().unwrap();
//! assert!(body.contains("Easy"));
//! ```

// Re-export all types from questionnaire-types
pub use questionnaire_types::*;

mod collector;
pub use collector::AnswerCollector;

mod config;
pub use config::{
    ConfigError, DEFAULT_ANSWERS_URL, DEFAULT_QUESTIONS_URL, DEFAULT_SERVER_URL, QuestionnaireConfig,
};

mod error;
pub use error::SessionError;

mod session;
pub use session::{QuestionnaireSession, Submission};

// Test renderer for driving sessions without a UI
mod test_renderer;
pub use test_renderer::{InputEvent, TestRenderer, TestRendererError};
