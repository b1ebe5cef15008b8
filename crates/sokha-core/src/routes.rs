//! URL path conventions.
//!
//! Pure string functions plus the parsed [`Route`] value type. These define
//! the canonical shape of every page URL and API path the flow touches; the
//! server's redirect strings are parsed through [`Route::parse`] rather than
//! followed as opaque text.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::identity::SessionIdentity;
use crate::models::kind::QuestionnaireKind;
use crate::models::locale::Locale;

/// Placeholder token naming the site-selection entry page.
pub const SITE_SELECT_TOKEN: &str = "index";

/// The mandatory first section gating entry into the rest of the flow.
pub const CONSENT_SECTION: &str = "consent";

/// Terminal render-only page; never fetched as a schema, never submitted.
pub const THANK_SECTION: &str = "thank";

/// Site-selection entry page for a questionnaire kind and locale.
pub fn site_selection(kind: QuestionnaireKind, locale: Locale) -> String {
    format!("/{kind}/{SITE_SELECT_TOKEN}/{locale}")
}

/// Questionnaire entry page (consent) for a real site token.
pub fn entry(kind: QuestionnaireKind, token: &str, locale: Locale) -> String {
    format!("/{kind}/{token}/{locale}")
}

/// Canonical mid-flow section page.
pub fn section(
    kind: QuestionnaireKind,
    token: &str,
    locale: Locale,
    session_id: &str,
    section_index: &str,
) -> String {
    format!("/{kind}/{token}/{locale}/{session_id}/{section_index}")
}

/// GET path for the entry section descriptor.
pub fn api_entry(kind: QuestionnaireKind, token: &str, locale: Locale) -> String {
    format!("/questionnaire/{kind}/{token}/{locale}")
}

/// GET path for a specific section descriptor.
pub fn api_section(
    kind: QuestionnaireKind,
    token: &str,
    locale: Locale,
    session_id: &str,
    section_index: &str,
) -> String {
    format!("/questionnaire/{kind}/{token}/{locale}/{session_id}/{section_index}")
}

/// POST path for a section submission.
pub fn api_submit(kind: QuestionnaireKind, token: &str, section_id: &str) -> String {
    format!("/questionnaire/{kind}/{token}/{section_id}")
}

/// A validated navigation target: `/{kind}/{token}/{locale}` or
/// `/{kind}/{token}/{locale}/{session}/{section}`.
///
/// The parser fails closed — an unrecognized path shape is an error, never a
/// silently dropped navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Route {
    pub kind: QuestionnaireKind,
    pub token: String,
    pub locale: Locale,
    pub session_id: Option<String>,
    pub section_index: Option<String>,
}

impl Route {
    pub fn entry(kind: QuestionnaireKind, token: impl Into<String>, locale: Locale) -> Self {
        Self {
            kind,
            token: token.into(),
            locale,
            session_id: None,
            section_index: None,
        }
    }

    pub fn section(
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

    pub fn site_selection(kind: QuestionnaireKind, locale: Locale) -> Self {
        Self::entry(kind, SITE_SELECT_TOKEN, locale)
    }

    /// Parse a path (typically a server redirect). A missing leading `/` is
    /// tolerated because the backend has historically emitted both forms.
    pub fn parse(path: &str) -> Result<Self, CoreError> {
        let trimmed = path.trim().trim_start_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        let (kind, token, locale) = match segments.as_slice() {
            [kind, token, locale, ..] => (*kind, *token, *locale),
            _ => return Err(CoreError::InvalidRoute(path.to_string())),
        };

        let kind = QuestionnaireKind::parse(kind)
            .map_err(|_| CoreError::InvalidRoute(path.to_string()))?;
        let locale =
            Locale::parse(locale).map_err(|_| CoreError::InvalidRoute(path.to_string()))?;

        match segments.len() {
            3 => Ok(Self::entry(kind, token, locale)),
            5 => Ok(Self::section(kind, token, locale, segments[3], segments[4])),
            _ => Err(CoreError::InvalidRoute(path.to_string())),
        }
    }

    /// Canonical string form, always with a leading `/`.
    pub fn path(&self) -> String {
        match (&self.session_id, &self.section_index) {
            (Some(session), Some(index)) => {
                section(self.kind, &self.token, self.locale, session, index)
            }
            _ => entry(self.kind, &self.token, self.locale),
        }
    }

    pub fn identity(&self) -> SessionIdentity {
        SessionIdentity {
            kind: self.kind,
            token: self.token.clone(),
            locale: self.locale,
            session_id: self.session_id.clone(),
            section_index: self.section_index.clone(),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_entry_and_section_paths() {
        let entry = Route::parse("/client/site-12/kh").unwrap();
        assert_eq!(entry.path(), "/client/site-12/kh");
        assert!(entry.session_id.is_none());

        let section = Route::parse("/provider/site-12/en/abc123/section2p").unwrap();
        assert_eq!(section.path(), "/provider/site-12/en/abc123/section2p");
        assert_eq!(section.section_index.as_deref(), Some("section2p"));
    }

    #[test]
    fn parse_tolerates_missing_leading_slash() {
        let route = Route::parse("client/site-12/kh").unwrap();
        assert_eq!(route.path(), "/client/site-12/kh");
    }

    #[test]
    fn parse_fails_closed_on_unrecognized_shapes() {
        assert!(Route::parse("").is_err());
        assert!(Route::parse("/client").is_err());
        assert!(Route::parse("/client/site-12").is_err());
        // four segments is ambiguous: session without section
        assert!(Route::parse("/client/site-12/kh/abc123").is_err());
        assert!(Route::parse("/unknown/site-12/kh").is_err());
        assert!(Route::parse("/client/site-12/zz").is_err());
        assert!(Route::parse("/admin/users/list").is_err());
    }

    #[test]
    fn identity_carries_every_url_component() {
        let route = Route::parse("/client/site-12/kh/abc123/section6c").unwrap();
        let id = route.identity();
        assert_eq!(id.kind, QuestionnaireKind::Client);
        assert_eq!(id.token, "site-12");
        assert_eq!(id.locale, Locale::Kh);
        assert_eq!(id.session_id.as_deref(), Some("abc123"));
        assert_eq!(id.section_index.as_deref(), Some("section6c"));
    }
}
