use serde::Deserialize;

use crate::{CatalogError, Question, QuestionCatalog};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000/db";
pub const DEFAULT_ANSWERS_URL: &str = "http://127.0.0.1:3000/answers";
pub const DEFAULT_QUESTIONS_URL: &str = "http://127.0.0.1:3000/questions";

/// Error type for loading a [`QuestionnaireConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Everything a session needs, passed in explicitly at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionnaireConfig {
    /// Base URL of the backing server.
    pub server_url: String,

    /// Where submitted answers are posted.
    pub answers_url: String,

    /// Where a remote catalog would be fetched from.
    pub questions_url: String,

    /// The questions to present.
    pub catalog: QuestionCatalog,
}

/// Wire shape of a config; the catalog is validated after parsing.
#[derive(Deserialize)]
#[serde(default)]
struct RawConfig {
    server_url: String,
    answers_url: String,
    questions_url: String,
    catalog: Vec<Question>,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            answers_url: DEFAULT_ANSWERS_URL.to_string(),
            questions_url: DEFAULT_QUESTIONS_URL.to_string(),
            catalog: Vec::new(),
        }
    }
}

impl QuestionnaireConfig {
    /// Config with default endpoints around `catalog`.
    pub fn new(catalog: QuestionCatalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// Parse a JSON config. Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;
        Ok(Self {
            server_url: raw.server_url,
            answers_url: raw.answers_url,
            questions_url: raw.questions_url,
            catalog: QuestionCatalog::new(raw.catalog)?,
        })
    }

    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = url.into();
        self
    }

    pub fn with_answers_url(mut self, url: impl Into<String>) -> Self {
        self.answers_url = url.into();
        self
    }

    pub fn with_questions_url(mut self, url: impl Into<String>) -> Self {
        self.questions_url = url.into();
        self
    }
}

impl Default for QuestionnaireConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            answers_url: DEFAULT_ANSWERS_URL.to_string(),
            questions_url: DEFAULT_QUESTIONS_URL.to_string(),
            catalog: QuestionCatalog::empty(),
        }
    }
}
