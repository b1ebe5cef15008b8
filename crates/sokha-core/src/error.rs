use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    #[error("unknown questionnaire kind: {0}")]
    UnknownKind(String),

    #[error("unrecognized route shape: {0}")]
    InvalidRoute(String),
}
