use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::kind::QuestionnaireKind;
use crate::models::locale::Locale;
use crate::routes;

/// A respondent's position in the flow, derived from the URL on every
/// navigation event. Immutable per render; a new identity triggers
/// reconciliation by the session navigator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionIdentity {
    pub kind: QuestionnaireKind,
    /// Opaque site/installation token. The literal `"index"` is the
    /// site-selection placeholder, not a real token.
    pub token: String,
    pub locale: Locale,
    /// Server-minted identifier binding an in-progress submission.
    pub session_id: Option<String>,
    pub section_index: Option<String>,
}

impl SessionIdentity {
    pub fn entry(kind: QuestionnaireKind, token: impl Into<String>, locale: Locale) -> Self {
        Self {
            kind,
            token: token.into(),
            locale,
            session_id: None,
            section_index: None,
        }
    }

    pub fn at_section(
        kind: QuestionnaireKind,
        token: impl Into<String>,
        locale: Locale,
        session_id: impl Into<String>,
        section_index: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            token: token.into(),
            locale,
            session_id: Some(session_id.into()),
            section_index: Some(section_index.into()),
        }
    }

    /// True when this identity points at the site-selection placeholder
    /// rather than a real installation.
    pub fn has_placeholder_token(&self) -> bool {
        self.token.is_empty() || self.token == routes::SITE_SELECT_TOKEN
    }

    /// Consent-page detection: no session yet, no section index, or the
    /// index is the consent section itself. Submission always targets
    /// `consent` when this holds, regardless of anything else in the URL.
    pub fn is_consent_page(&self) -> bool {
        self.session_id.is_none()
            || self.section_index.is_none()
            || self.section_index.as_deref() == Some(routes::CONSENT_SECTION)
    }
}
