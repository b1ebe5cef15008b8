use sokha_core::{Locale, QuestionnaireKind, Route, SessionIdentity};
use sokha_flow::navigator::{self, Navigation, TerminalPage};
use sokha_flow::page::PageData;
use sokha_schema::questionnaire_for;

fn client_identity(path: &str) -> SessionIdentity {
    Route::parse(path).unwrap().identity()
}

#[test]
fn placeholder_token_redirects_to_site_selection() {
    let q = questionnaire_for(QuestionnaireKind::Client);
    let identity = client_identity("/client/index/kh");

    match navigator::plan(&identity, q.as_ref()) {
        Navigation::Redirect(route) => assert_eq!(route.path(), "/client/index/kh"),
        other => panic!("expected redirect, got {other:?}"),
    }

    // An empty token behaves the same.
    let mut identity = client_identity("/client/index/kh");
    identity.token = String::new();
    assert!(matches!(
        navigator::plan(&identity, q.as_ref()),
        Navigation::Redirect(_)
    ));
}

#[test]
fn legacy_alias_redirects_to_canonical_first_section() {
    let q = questionnaire_for(QuestionnaireKind::Client);
    let identity = client_identity("/client/site-12/kh/abc123/section1");

    match navigator::plan(&identity, q.as_ref()) {
        Navigation::Redirect(route) => {
            assert_eq!(route.path(), "/client/site-12/kh/abc123/section1a");
        }
        other => panic!("expected redirect, got {other:?}"),
    }

    let q = questionnaire_for(QuestionnaireKind::Provider);
    let identity = client_identity("/provider/site-12/en/abc123/section1");
    match navigator::plan(&identity, q.as_ref()) {
        Navigation::Redirect(route) => {
            assert_eq!(route.path(), "/provider/site-12/en/abc123/section1p");
        }
        other => panic!("expected redirect, got {other:?}"),
    }
}

#[test]
fn alias_without_a_session_recovers_at_consent() {
    let q = questionnaire_for(QuestionnaireKind::Client);
    let mut identity = client_identity("/client/site-12/kh");
    identity.section_index = Some("section1".to_string());

    match navigator::plan(&identity, q.as_ref()) {
        Navigation::Redirect(route) => assert_eq!(route.path(), "/client/site-12/kh"),
        other => panic!("expected redirect, got {other:?}"),
    }
}

#[test]
fn locale_in_the_section_position_is_honored_as_the_locale() {
    let q = questionnaire_for(QuestionnaireKind::Client);
    let identity = client_identity("/client/site-12/en/abc123/kh");

    match navigator::plan(&identity, q.as_ref()) {
        Navigation::Redirect(route) => {
            assert_eq!(route.locale, Locale::Kh);
            assert_eq!(route.path(), "/client/site-12/kh");
        }
        other => panic!("expected redirect, got {other:?}"),
    }
}

#[test]
fn unknown_section_index_recovers_at_consent() {
    let q = questionnaire_for(QuestionnaireKind::Client);
    let identity = client_identity("/client/site-12/kh/abc123/section9z");

    match navigator::plan(&identity, q.as_ref()) {
        Navigation::Redirect(route) => assert_eq!(route.path(), "/client/site-12/kh"),
        other => panic!("expected redirect, got {other:?}"),
    }
}

#[test]
fn thank_is_terminal_and_never_fetched() {
    let q = questionnaire_for(QuestionnaireKind::Client);
    let identity = client_identity("/client/site-12/kh/abc123/thank");
    assert_eq!(
        navigator::plan(&identity, q.as_ref()),
        Navigation::Terminal(TerminalPage::Thank)
    );
}

#[test]
fn fully_specified_position_fetches_that_section() {
    let q = questionnaire_for(QuestionnaireKind::Client);
    let identity = client_identity("/client/site-12/kh/abc123/section6c");

    assert_eq!(
        navigator::plan(&identity, q.as_ref()),
        Navigation::FetchSection {
            session_id: "abc123".to_string(),
            section_index: "section6c".to_string(),
        }
    );
}

#[test]
fn bare_entry_fetches_the_entry_section() {
    let q = questionnaire_for(QuestionnaireKind::Client);
    let identity = client_identity("/client/site-12/kh");
    assert_eq!(navigator::plan(&identity, q.as_ref()), Navigation::FetchEntry);
}

#[test]
fn every_redirect_settles_in_one_hop() {
    // Following any navigator redirect must land on a plan that no longer
    // redirects — otherwise reloads would loop.
    let q = questionnaire_for(QuestionnaireKind::Client);
    for path in [
        "/client/site-12/kh/abc123/section1",
        "/client/site-12/en/abc123/kh",
        "/client/site-12/kh/abc123/section9z",
    ] {
        let first = match navigator::plan(&client_identity(path), q.as_ref()) {
            Navigation::Redirect(route) => route,
            other => panic!("{path}: expected redirect, got {other:?}"),
        };
        let second = navigator::plan(&first.identity(), q.as_ref());
        assert!(
            !matches!(second, Navigation::Redirect(_)),
            "{path}: redirect chain did not settle: {second:?}"
        );
    }
}

#[test]
fn server_minted_session_id_canonicalizes_the_url() {
    let identity = client_identity("/client/site-12/kh");
    let page = PageData::section("consent").with_uuid("f00d");

    let route = navigator::reconcile(&identity, &page).unwrap();
    assert_eq!(route.path(), "/client/site-12/kh/f00d/consent");

    // Already canonical: nothing to do.
    let canonical = client_identity("/client/site-12/kh/f00d/consent");
    assert!(navigator::reconcile(&canonical, &page).is_none());

    // No uuid in the response: nothing to do.
    let page = PageData::section("consent");
    assert!(navigator::reconcile(&identity, &page).is_none());
}
