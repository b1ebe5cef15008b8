use sokha_core::QuestionnaireKind;
use sokha_core::routes::CONSENT_SECTION;

use crate::Questionnaire;
use crate::fields::{
    DependencyEffect, FieldDependency, FieldOption, FieldSpec, SectionDescriptor,
};

/// Health-provider satisfaction questionnaire. Shorter than the client
/// flow: consent plus three sections.
pub struct ProviderQuestionnaire;

impl Questionnaire for ProviderQuestionnaire {
    fn kind(&self) -> QuestionnaireKind {
        QuestionnaireKind::Provider
    }

    fn name(&self) -> &str {
        "Provider satisfaction questionnaire"
    }

    fn sections(&self) -> &[SectionDescriptor] {
        static SECTIONS: std::sync::LazyLock<Vec<SectionDescriptor>> =
            std::sync::LazyLock::new(|| {
                let yes_no = || {
                    vec![
                        FieldOption::new("1", "yes"),
                        FieldOption::new("0", "no"),
                    ]
                };
                let rating = || {
                    vec![
                        FieldOption::new("1", "rating_very_poor"),
                        FieldOption::new("2", "rating_poor"),
                        FieldOption::new("3", "rating_good"),
                        FieldOption::new("4", "rating_very_good"),
                    ]
                };

                vec![
                    SectionDescriptor::new(
                        CONSENT_SECTION,
                        QuestionnaireKind::Provider,
                        vec![
                            FieldSpec::radio("consent", yes_no()),
                            FieldSpec::hidden("assisted", "0"),
                        ],
                    ),
                    SectionDescriptor::new(
                        "section1p",
                        QuestionnaireKind::Provider,
                        vec![
                            FieldSpec::radio(
                                "p1",
                                vec![
                                    FieldOption::new("1", "role_doctor"),
                                    FieldOption::new("2", "role_nurse"),
                                    FieldOption::new("3", "role_midwife"),
                                    FieldOption::new("4", "role_other"),
                                ],
                            ),
                            FieldSpec::text("p2"),
                        ],
                    ),
                    SectionDescriptor::new(
                        "section2p",
                        QuestionnaireKind::Provider,
                        vec![
                            FieldSpec::radio("p3", rating()),
                            FieldSpec::checkbox_group(
                                "p4",
                                vec![
                                    FieldOption::new("1", "training_clinical"),
                                    FieldOption::new("2", "training_hygiene"),
                                    FieldOption::new("3", "training_management"),
                                ],
                            )
                            .require_at_least_one(),
                        ],
                    ),
                    SectionDescriptor::new(
                        "section3p",
                        QuestionnaireKind::Provider,
                        vec![
                            FieldSpec::radio("p5", yes_no()),
                            // Visits per quarter; only asked after a "yes".
                            FieldSpec::text("p6").depends(FieldDependency::when_equals(
                                "p5",
                                "1",
                                DependencyEffect::Clear,
                            )),
                            FieldSpec::radio("p7", rating()),
                            FieldSpec::text("p8").optional(),
                        ],
                    ),
                ]
            });
        &SECTIONS
    }

    fn legacy_first_alias(&self) -> &str {
        "section1"
    }
}
