use thiserror::Error;

/// Errors from loading an external dictionary. Resolution itself never
/// fails — a missing key degrades to the literal key string.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("dictionary is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dictionary references unknown locale: {0}")]
    UnknownLocale(String),

    #[error("dictionary references unknown namespace: {0}")]
    UnknownNamespace(String),
}
