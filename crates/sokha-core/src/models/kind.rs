use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Which of the two questionnaire flows a session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum QuestionnaireKind {
    /// Patient (client) satisfaction questionnaire.
    Client,
    /// Health-provider satisfaction questionnaire.
    Provider,
}

impl QuestionnaireKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Provider => "provider",
        }
    }

    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "client" => Ok(Self::Client),
            "provider" => Ok(Self::Provider),
            _ => Err(CoreError::UnknownKind(value.to_string())),
        }
    }
}

impl std::fmt::Display for QuestionnaireKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
