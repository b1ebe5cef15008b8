use serde::Serialize;
use tracing::info;

use sokha_core::{QuestionnaireKind, SessionIdentity};

/// A structured flow event for logging session progress.
///
/// Emitted via `tracing` so device logs can be correlated with the
/// server-side submission records. Answer values never appear here — only
/// positions and outcomes.
#[derive(Debug, Clone, Serialize)]
pub struct FlowEvent {
    pub action: String,
    pub kind: QuestionnaireKind,
    pub token: String,
    pub section: String,
    pub session_id: Option<String>,
    pub at: jiff::Timestamp,
    pub details: Option<serde_json::Value>,
}

impl FlowEvent {
    pub fn new(
        action: impl Into<String>,
        identity: &SessionIdentity,
        section: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            kind: identity.kind,
            token: identity.token.clone(),
            section: section.into(),
            session_id: identity.session_id.clone(),
            at: jiff::Timestamp::now(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this event via tracing.
    pub fn emit(&self) {
        info!(
            flow.action = %self.action,
            flow.kind = %self.kind,
            flow.token = %self.token,
            flow.section = %self.section,
            flow.session_id = self.session_id.as_deref().unwrap_or("-"),
            "flow event"
        );
    }
}
