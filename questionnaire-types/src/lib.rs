//! Core types for the questionnaire crate.
//!
//! This crate provides the foundational types for defining questionnaires:
//! - `QuestionCatalog` - The ordered, validated list of questions
//! - `Question`, `QuestionKind` and `ChoiceOption` - Individual questions and their input shape
//! - `Answer` and `AnswerSet` - Collected data keyed by `QuestionId`
//! - `Control` and `QuestionRenderer` - The boundary to a UI layer

mod question_id;
pub use question_id::QuestionId;

mod question;
pub use question::{ChoiceOption, Question, QuestionKind};

mod catalog;
pub use catalog::QuestionCatalog;

mod answer;
pub use answer::Answer;

mod answers;
pub use answers::AnswerSet;

mod control;
pub use control::{Affordance, ChoiceControl, Control, TextInput};

mod error;
pub use error::CatalogError;

mod traits;
pub use traits::QuestionRenderer;
