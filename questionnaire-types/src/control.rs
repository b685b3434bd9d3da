use crate::{ChoiceOption, Question, QuestionId, QuestionKind};

/// Everything a renderer needs to draw one question.
///
/// Built from a [`Question`] alone; carries no session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub question_id: QuestionId,
    pub label: String,
    pub required: bool,
    pub affordance: Affordance,
}

/// The input element behind a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Affordance {
    /// A single text field.
    TextField { placeholder: Option<String> },

    /// A list of selectable choices.
    Choices(Vec<ChoiceControl>),
}

/// One selectable entry of an [`Affordance::Choices`] list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceControl {
    pub label: String,

    /// Set when selecting the entry opens a text field.
    pub text_input: Option<TextInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    pub placeholder: Option<String>,
}

impl Control {
    pub fn for_question(question: &Question) -> Self {
        let affordance = match question.kind() {
            QuestionKind::TextFilling { placeholder } => Affordance::TextField {
                placeholder: placeholder.clone(),
            },
            QuestionKind::MultipleChoice { options } => {
                Affordance::Choices(options.iter().map(ChoiceControl::from).collect())
            }
        };

        Self {
            question_id: question.id(),
            label: question.text().to_string(),
            required: question.is_required(),
            affordance,
        }
    }
}

impl From<&Question> for Control {
    fn from(question: &Question) -> Self {
        Self::for_question(question)
    }
}

impl From<&ChoiceOption> for ChoiceControl {
    fn from(option: &ChoiceOption) -> Self {
        match option {
            ChoiceOption::Plain { text } => Self {
                label: text.clone(),
                text_input: None,
            },
            ChoiceOption::TextFilling { text, placeholder } => Self {
                label: text.clone(),
                text_input: Some(TextInput {
                    placeholder: placeholder.clone(),
                }),
            },
        }
    }
}
