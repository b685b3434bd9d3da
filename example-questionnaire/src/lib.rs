//! The bundled programming questionnaire.

use questionnaire::{ChoiceOption, Question, QuestionCatalog, QuestionnaireConfig};

pub const FAVOURITE_LANGUAGE: &str = "What language is your favorite?";
pub const LIKES: &str = "What do you like about programming?";
pub const DIFFICULTY: &str = "How was the assignment?";

/// The three questions of the programming questionnaire, with fresh ids.
///
/// # Panics
///
/// If the compiled-in questions fail catalog validation.
pub fn programming_catalog() -> QuestionCatalog {
    let questions = vec![
        Question::multiple_choice(
            FAVOURITE_LANGUAGE,
            vec![
                ChoiceOption::plain("Kotlin"),
                ChoiceOption::plain("Java"),
                ChoiceOption::plain("C++"),
            ],
            false,
        ),
        Question::text_filling(LIKES, Some("Your answer"), false),
        Question::multiple_choice(
            DIFFICULTY,
            vec![
                ChoiceOption::plain("Easy"),
                ChoiceOption::plain("Normal"),
                ChoiceOption::plain("Hard"),
                ChoiceOption::text_filling("Other", None),
            ],
            true,
        ),
    ];

    QuestionCatalog::new(questions).expect("bundled questionnaire is malformed")
}

/// Default endpoints around [`programming_catalog`].
pub fn programming_config() -> QuestionnaireConfig {
    QuestionnaireConfig::new(programming_catalog())
}
