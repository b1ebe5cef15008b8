use serde::{Deserialize, Serialize};
use thiserror::Error;

use sokha_core::{Locale, QuestionnaireKind};

use crate::page::PageData;

/// Success body of a section submission: the server's instruction for where
/// the flow goes next. The client never computes the next section itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitOutcome {
    pub redirect: String,
}

/// The REST backend's interface, as consumed by the flow engine.
///
/// Requests are sequential request/response cycles; implementations do not
/// need interior concurrency. The engine treats every rejected request the
/// same regardless of cause (timeout, 4xx, 5xx, transport failure): the
/// message is surfaced inline and nothing the respondent entered is lost.
pub trait Backend {
    /// Fetch the questionnaire's entry section.
    fn fetch_entry(
        &self,
        kind: QuestionnaireKind,
        token: &str,
        locale: Locale,
    ) -> Result<PageData, BackendError>;

    /// Fetch a specific section of an in-progress session.
    fn fetch_section(
        &self,
        kind: QuestionnaireKind,
        token: &str,
        locale: Locale,
        session_id: &str,
        section_index: &str,
    ) -> Result<PageData, BackendError>;

    /// Post a section-scoped answer payload.
    fn submit(
        &self,
        kind: QuestionnaireKind,
        token: &str,
        section_id: &str,
        body: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<SubmitOutcome, BackendError>;
}

#[derive(Debug, Error)]
pub enum BackendError {
    /// The request never produced a usable response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with an error body (`{ "error": ... }`).
    #[error("{message}")]
    Api { message: String },

    /// The response arrived but could not be decoded.
    #[error("response could not be decoded: {0}")]
    Decode(String),
}

impl BackendError {
    /// The inline message shown to the respondent. One shape for every
    /// cause — the UI does not distinguish failure classes.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
