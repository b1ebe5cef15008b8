use sokha_core::{Locale, QuestionnaireKind};
use sokha_i18n::Catalog;

#[test]
fn khmer_falls_back_to_english_then_to_the_literal_key() {
    let catalog = Catalog::embedded();

    // q1a has a Khmer translation.
    let khmer = catalog.resolve(Locale::Kh, QuestionnaireKind::Client, "q1a");
    assert!(khmer.contains("ភេទ"), "expected Khmer text, got {khmer}");

    // q6c has no Khmer entry; the English question text is used.
    assert_eq!(
        catalog.resolve(Locale::Kh, QuestionnaireKind::Client, "q6c"),
        "How was the waiting time before you were seen?"
    );

    // A key absent from every table degrades to the key itself.
    assert_eq!(
        catalog.resolve(Locale::Kh, QuestionnaireKind::Client, "q99z"),
        "q99z"
    );
}

#[test]
fn answers_namespace_is_consulted_after_questions() {
    let catalog = Catalog::embedded();
    assert_eq!(
        catalog.resolve(Locale::En, QuestionnaireKind::Client, "gender_female"),
        "Female"
    );
    assert_eq!(
        catalog.resolve(Locale::Kh, QuestionnaireKind::Client, "yes"),
        "បាទ/ចាស"
    );
}

#[test]
fn namespaces_are_isolated_by_questionnaire_kind() {
    let catalog = Catalog::embedded();
    // role_doctor exists only in the provider namespace.
    assert_eq!(
        catalog.resolve(Locale::En, QuestionnaireKind::Provider, "role_doctor"),
        "Doctor"
    );
    assert_eq!(
        catalog.resolve(Locale::En, QuestionnaireKind::Client, "role_doctor"),
        "role_doctor"
    );
}

#[test]
fn site_dictionary_overrides_embedded_text() {
    let mut catalog = Catalog::embedded();
    catalog
        .merge_json(
            r#"{"en": {"client": {"questions": {"q2a": "What is your age in years?"}}}}"#,
        )
        .unwrap();

    assert_eq!(
        catalog.resolve(Locale::En, QuestionnaireKind::Client, "q2a"),
        "What is your age in years?"
    );
    // Untouched keys keep the embedded text.
    assert_eq!(
        catalog.resolve(Locale::En, QuestionnaireKind::Client, "q1a"),
        "What is your sex?"
    );
}

#[test]
fn unknown_locale_in_a_dictionary_is_rejected() {
    let mut catalog = Catalog::embedded();
    let err = catalog
        .merge_json(r#"{"fr": {"client": {"questions": {}}}}"#)
        .unwrap_err();
    assert!(err.to_string().contains("unknown locale"));
}
