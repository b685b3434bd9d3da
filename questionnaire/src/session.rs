use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    AnswerCollector, AnswerSet, ChoiceOption, Control, QuestionCatalog, QuestionId,
    QuestionRenderer, QuestionnaireConfig, SessionError,
};

/// One user's pass through a questionnaire.
///
/// Owns its catalog and answers. Dropping the session discards both.
#[derive(Debug, Clone)]
pub struct QuestionnaireSession {
    config: QuestionnaireConfig,
    collector: AnswerCollector,
}

impl QuestionnaireSession {
    pub fn new(config: QuestionnaireConfig) -> Self {
        Self {
            config,
            collector: AnswerCollector::new(),
        }
    }

    /// Start a session from a JSON config, validating its catalog.
    pub fn from_config_json(json: &str) -> Result<Self, SessionError> {
        Ok(Self::new(QuestionnaireConfig::from_json(json)?))
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.config.catalog
    }

    pub fn config(&self) -> &QuestionnaireConfig {
        &self.config
    }

    /// One control per question, in catalog order.
    pub fn controls(&self) -> Vec<Control> {
        self.catalog().all().iter().map(Control::for_question).collect()
    }

    /// Record a typed answer. Empty values are ignored.
    pub fn answer(&mut self, id: QuestionId, value: &str) -> Result<(), SessionError> {
        if !self.catalog().contains(id) {
            return Err(SessionError::UnknownQuestion(id));
        }
        self.collector.record(id, value);
        Ok(())
    }

    /// Record the selection of option `index` of a multiple-choice question.
    ///
    /// Plain options answer with their label. Text-filling options answer
    /// with `typed`, so selecting one without text records nothing yet.
    pub fn select_option(
        &mut self,
        id: QuestionId,
        index: usize,
        typed: Option<&str>,
    ) -> Result<(), SessionError> {
        let question = self
            .config
            .catalog
            .get(id)
            .ok_or(SessionError::UnknownQuestion(id))?;
        let options = question
            .kind()
            .options()
            .ok_or(SessionError::NotMultipleChoice(id))?;
        let option = options.get(index).ok_or(SessionError::OptionOutOfRange {
            id,
            index,
            len: options.len(),
        })?;

        match option {
            ChoiceOption::Plain { text } => self.collector.record(id, text),
            ChoiceOption::TextFilling { .. } => self.collector.record(id, typed.unwrap_or("")),
        }
        Ok(())
    }

    /// Hand the controls to `renderer` and collect what it reports.
    ///
    /// Reports for ids outside the catalog are logged and dropped.
    pub fn run<R: QuestionRenderer>(&mut self, renderer: &R) -> Result<(), SessionError> {
        let controls = self.controls();
        let catalog = &self.config.catalog;
        let collector = &mut self.collector;

        let mut on_answer = |id: QuestionId, value: &str| {
            if catalog.contains(id) {
                collector.record(id, value);
            } else {
                warn!(question_id = %id, "renderer reported an answer for an unknown question");
            }
        };

        renderer
            .present(&controls, &mut on_answer)
            .map_err(SessionError::renderer)
    }

    pub fn answers(&self) -> AnswerSet {
        self.collector.answers()
    }

    pub fn is_complete(&self) -> bool {
        self.collector.is_complete(self.catalog())
    }

    pub fn missing_required(&self) -> Vec<QuestionId> {
        self.collector.missing_required(self.catalog())
    }

    /// Start over with no answers.
    pub fn reset(&mut self) {
        self.collector.clear();
    }

    /// The payload to post to the answers endpoint.
    ///
    /// Fails while any required question is unanswered.
    pub fn submission(&self) -> Result<Submission, SessionError> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(SessionError::Incomplete { missing });
        }

        let answers = self.answers();
        debug!(answers = answers.len(), url = %self.config.answers_url, "building submission");
        Ok(Submission {
            url: self.config.answers_url.clone(),
            answers,
        })
    }
}

/// A complete answer set and where it should go.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub url: String,
    pub answers: AnswerSet,
}

impl Submission {
    /// The request body: `{ "<question id>": "<answer>", ... }`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.answers)
    }
}
