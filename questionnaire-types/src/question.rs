use serde::{Deserialize, Serialize};

use crate::QuestionId;

/// A single question in a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Identifier answers are keyed by. Assigned on load when absent.
    #[serde(default)]
    id: QuestionId,

    /// The prompt text shown to the user.
    text: String,

    /// Whether a missing answer blocks completion.
    #[serde(default)]
    is_required: bool,

    /// Input shape expected for this question.
    kind: QuestionKind,
}

impl Question {
    /// Create a new question with a fresh id.
    pub fn new(text: impl Into<String>, kind: QuestionKind, is_required: bool) -> Self {
        Self::with_id(QuestionId::new(), text, kind, is_required)
    }

    /// Create a question with a known id.
    pub fn with_id(
        id: QuestionId,
        text: impl Into<String>,
        kind: QuestionKind,
        is_required: bool,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            is_required,
            kind,
        }
    }

    /// Free-text question.
    pub fn text_filling(
        text: impl Into<String>,
        placeholder: Option<&str>,
        is_required: bool,
    ) -> Self {
        Self::new(text, QuestionKind::text_filling(placeholder), is_required)
    }

    /// Multiple-choice question.
    pub fn multiple_choice(
        text: impl Into<String>,
        options: Vec<ChoiceOption>,
        is_required: bool,
    ) -> Self {
        Self::new(text, QuestionKind::MultipleChoice { options }, is_required)
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_required(&self) -> bool {
        self.is_required
    }

    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }
}

/// The kind of question, determining the input affordance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Free-text input with an optional placeholder.
    TextFilling {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },

    /// Pick one of the listed options.
    MultipleChoice { options: Vec<ChoiceOption> },
}

impl QuestionKind {
    pub fn text_filling(placeholder: Option<&str>) -> Self {
        Self::TextFilling {
            placeholder: placeholder.map(str::to_string),
        }
    }

    pub fn is_multiple_choice(&self) -> bool {
        matches!(self, Self::MultipleChoice { .. })
    }

    /// The options of a multiple-choice question, or `None` for free text.
    pub fn options(&self) -> Option<&[ChoiceOption]> {
        match self {
            Self::MultipleChoice { options } => Some(options),
            Self::TextFilling { .. } => None,
        }
    }
}

/// One choice within a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChoiceOption {
    /// Selecting the option answers with its label.
    Plain { text: String },

    /// Selecting the option opens a text field; the typed text is the answer.
    TextFilling {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
}

impl ChoiceOption {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain { text: text.into() }
    }

    pub fn text_filling(text: impl Into<String>, placeholder: Option<&str>) -> Self {
        Self::TextFilling {
            text: text.into(),
            placeholder: placeholder.map(str::to_string),
        }
    }

    /// The label shown for this option.
    pub fn text(&self) -> &str {
        match self {
            Self::Plain { text } | Self::TextFilling { text, .. } => text,
        }
    }

    pub fn placeholder(&self) -> Option<&str> {
        match self {
            Self::Plain { .. } => None,
            Self::TextFilling { placeholder, .. } => placeholder.as_deref(),
        }
    }

    /// Whether selecting this option asks for typed text.
    pub fn accepts_text(&self) -> bool {
        matches!(self, Self::TextFilling { .. })
    }
}

impl From<&str> for ChoiceOption {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}
