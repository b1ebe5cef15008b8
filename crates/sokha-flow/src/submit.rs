use tracing::info;

use sokha_core::routes::{CONSENT_SECTION, THANK_SECTION};
use sokha_core::{Route, SessionIdentity};
use sokha_schema::Questionnaire;

use crate::backend::Backend;
use crate::error::FlowError;
use crate::form::FormState;

/// Which section id a submission posts against.
///
/// Precedence: consent-page detection first (it wins regardless of what the
/// URL's section index says), then a recognized non-terminal section index,
/// then `consent` — an unrecognized section must not silently no-op.
pub fn target_section(identity: &SessionIdentity, questionnaire: &dyn Questionnaire) -> String {
    if identity.is_consent_page() {
        return CONSENT_SECTION.to_string();
    }
    if let Some(index) = identity.section_index.as_deref()
        && index != THANK_SECTION
        && questionnaire.is_known_section(index)
    {
        return index.to_string();
    }
    CONSENT_SECTION.to_string()
}

/// Post the current answers and return the server's (parsed) navigation
/// instruction.
///
/// On any failure the form state is left untouched — the caller surfaces
/// the message inline and the respondent corrects and resubmits without
/// re-entering anything.
pub fn submit(
    backend: &dyn Backend,
    identity: &SessionIdentity,
    questionnaire: &dyn Questionnaire,
    form: &FormState,
) -> Result<Route, FlowError> {
    let section_id = target_section(identity, questionnaire);

    let mut body = form.to_submission_payload();
    body.insert(
        "locale".to_string(),
        serde_json::Value::String(identity.locale.as_str().to_string()),
    );
    if let Some(session_id) = &identity.session_id {
        body.insert(
            "sessionId".to_string(),
            serde_json::Value::String(session_id.clone()),
        );
    }

    info!(
        kind = %identity.kind,
        token = %identity.token,
        section = %section_id,
        "submitting section"
    );

    let outcome = backend.submit(identity.kind, &identity.token, &section_id, &body)?;

    // The redirect is server-authoritative but not trusted blind: it is
    // normalized to a leading slash and parsed fail-closed.
    let normalized = if outcome.redirect.starts_with('/') {
        outcome.redirect.clone()
    } else {
        format!("/{}", outcome.redirect)
    };
    Ok(Route::parse(&normalized)?)
}
