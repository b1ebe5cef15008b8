use sokha_core::routes::THANK_SECTION;
use sokha_core::{Locale, Route, SessionIdentity};
use sokha_schema::Questionnaire;

use crate::page::PageData;

/// What the session navigator decided to do with a URL identity.
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    /// Client-side redirect to a known-good canonical location. Never
    /// surfaced as an error — legacy and malformed URL shapes are recovered
    /// silently.
    Redirect(Route),
    /// Fetch the questionnaire's entry section.
    FetchEntry,
    /// Fetch a specific section of an in-progress session.
    FetchSection {
        session_id: String,
        section_index: String,
    },
    /// Render-only page; nothing further is fetched or submitted.
    Terminal(TerminalPage),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalPage {
    Thank,
    NotFound,
}

/// Decide what to do with a session identity. Rules are evaluated in order;
/// the first match wins.
pub fn plan(identity: &SessionIdentity, questionnaire: &dyn Questionnaire) -> Navigation {
    // 1. No real site token: the respondent came in through the generic
    //    entry point and must pick a site first.
    if identity.has_placeholder_token() {
        return Navigation::Redirect(Route::site_selection(identity.kind, identity.locale));
    }

    if let Some(index) = identity.section_index.as_deref() {
        // 2. Legacy alias for the first real section (old QR codes).
        if index == questionnaire.legacy_first_alias() {
            if let Some(session_id) = &identity.session_id {
                return Navigation::Redirect(Route::section(
                    identity.kind,
                    &identity.token,
                    identity.locale,
                    session_id,
                    questionnaire.first_section_id(),
                ));
            }
            // An alias without a session has nowhere canonical to land
            // mid-flow; recover at consent.
            return Navigation::Redirect(Route::entry(
                identity.kind,
                &identity.token,
                identity.locale,
            ));
        }

        // 3. Historical URL-shape bug: the locale landed in the section
        //    position. Honor it as the locale and restart at consent.
        if let Ok(locale) = Locale::parse(index) {
            return Navigation::Redirect(Route::entry(identity.kind, &identity.token, locale));
        }

        if index == THANK_SECTION {
            return Navigation::Terminal(TerminalPage::Thank);
        }

        // 4. Unreachable or invalid section id: recover at consent rather
        //    than rendering a dead end.
        if !questionnaire.is_known_section(index) {
            return Navigation::Redirect(Route::entry(
                identity.kind,
                &identity.token,
                identity.locale,
            ));
        }
    }

    // 5. Fetch. A fully-specified position fetches that section; anything
    //    less fetches the entry section.
    match (&identity.session_id, &identity.section_index) {
        (Some(session_id), Some(section_index)) => Navigation::FetchSection {
            session_id: session_id.clone(),
            section_index: section_index.clone(),
        },
        _ => Navigation::FetchEntry,
    }
}

/// Rule 6: after a fetch, a server-minted session id the URL lacked forces
/// a redirect to the canonical URL that includes it, so reloads are
/// idempotent.
pub fn reconcile(identity: &SessionIdentity, page: &PageData) -> Option<Route> {
    if identity.session_id.is_some() {
        return None;
    }
    let uuid = page.uuid.as_deref()?;
    Some(Route::section(
        identity.kind,
        &identity.token,
        identity.locale,
        uuid,
        &page.section_id,
    ))
}
