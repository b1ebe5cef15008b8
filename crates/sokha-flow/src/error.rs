use thiserror::Error;

use crate::backend::BackendError;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("section {section} has no field {field}")]
    UnknownField { section: String, field: String },

    #[error("no section is currently active")]
    NoActiveSection,

    #[error("redirect chain did not settle: {0}")]
    RedirectLoop(String),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Route(#[from] sokha_core::CoreError),
}
