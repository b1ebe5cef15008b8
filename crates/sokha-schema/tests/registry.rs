use sokha_core::QuestionnaireKind;
use sokha_schema::fields::{DependencyEffect, FieldKind};
use sokha_schema::{Questionnaire, all_questionnaires, questionnaire_for};

#[test]
fn both_catalogs_are_structurally_valid() {
    for q in all_questionnaires() {
        let errors = q.validate();
        assert!(errors.is_empty(), "{}: {errors:?}", q.name());
    }
}

#[test]
fn consent_is_always_the_first_section() {
    for q in all_questionnaires() {
        assert_eq!(q.sections()[0].section_id, "consent");
        assert_eq!(q.entry_section_id(), "consent");
    }
}

#[test]
fn first_real_sections_and_aliases() {
    let client = questionnaire_for(QuestionnaireKind::Client);
    assert_eq!(client.first_section_id(), "section1a");
    assert_eq!(client.legacy_first_alias(), "section1");

    let provider = questionnaire_for(QuestionnaireKind::Provider);
    assert_eq!(provider.first_section_id(), "section1p");
    assert_eq!(provider.legacy_first_alias(), "section1");
}

#[test]
fn section_membership_excludes_thank_and_garbage() {
    let client = questionnaire_for(QuestionnaireKind::Client);
    assert!(client.is_known_section("consent"));
    assert!(client.is_known_section("section6c"));
    assert!(!client.is_known_section("thank"));
    assert!(!client.is_known_section("section9z"));
    assert!(!client.is_known_section("section1p"));
}

#[test]
fn payment_amount_depends_on_payment_flag() {
    let client = questionnaire_for(QuestionnaireKind::Client);
    let section = client.section("section6c").unwrap();
    let q14c = section.field("q14c").unwrap();

    let dep = q14c.depends_on.as_ref().unwrap();
    assert_eq!(dep.source, "q13c");
    assert_eq!(dep.equals, "1");
    assert_eq!(dep.effect, DependencyEffect::Clear);
    assert_eq!(q14c.kind, FieldKind::Text);
    assert!(q14c.required);
}

#[test]
fn always_send_consent_column_has_a_default() {
    for q in all_questionnaires() {
        let consent = q.section("consent").unwrap();
        let assisted = consent.field("assisted").unwrap();
        assert_eq!(assisted.kind, FieldKind::Hidden);
        assert_eq!(assisted.send_default.as_deref(), Some("0"));
    }
}
