use sokha_core::QuestionnaireKind;
use sokha_core::routes::CONSENT_SECTION;

use crate::Questionnaire;
use crate::fields::{
    DependencyEffect, FieldDependency, FieldOption, FieldSpec, SectionDescriptor,
};

/// Patient (client) satisfaction questionnaire. Seven sections from consent
/// through payment; `section1` is the legacy alias for `section1a`.
pub struct ClientQuestionnaire;

impl Questionnaire for ClientQuestionnaire {
    fn kind(&self) -> QuestionnaireKind {
        QuestionnaireKind::Client
    }

    fn name(&self) -> &str {
        "Client satisfaction questionnaire"
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
                        QuestionnaireKind::Client,
                        vec![
                            FieldSpec::radio("consent", yes_no()),
                            // Legacy column the server still expects on
                            // every consent row.
                            FieldSpec::hidden("assisted", "0"),
                        ],
                    ),
                    SectionDescriptor::new(
                        "section1a",
                        QuestionnaireKind::Client,
                        vec![
                            FieldSpec::radio(
                                "q1a",
                                vec![
                                    FieldOption::new("1", "gender_male"),
                                    FieldOption::new("2", "gender_female"),
                                    FieldOption::new("3", "gender_other"),
                                ],
                            ),
                            FieldSpec::text("q2a"),
                            FieldSpec::radio("q3a", yes_no()),
                        ],
                    ),
                    SectionDescriptor::new(
                        "section2c",
                        QuestionnaireKind::Client,
                        vec![
                            FieldSpec::radio(
                                "q4c",
                                vec![
                                    FieldOption::new("1", "travel_under_30"),
                                    FieldOption::new("2", "travel_30_to_60"),
                                    FieldOption::new("3", "travel_over_60"),
                                ],
                            ),
                            FieldSpec::checkbox_group(
                                "q5c",
                                vec![
                                    FieldOption::new("1", "service_consultation"),
                                    FieldOption::new("2", "service_pharmacy"),
                                    FieldOption::new("3", "service_laboratory"),
                                    FieldOption::new("4", "service_vaccination"),
                                ],
                            )
                            .require_at_least_one(),
                        ],
                    ),
                    SectionDescriptor::new(
                        "section3c",
                        QuestionnaireKind::Client,
                        vec![
                            FieldSpec::radio("q6c", rating()),
                            FieldSpec::radio("q7c", rating()),
                            FieldSpec::radio("q8c", yes_no()),
                        ],
                    ),
                    SectionDescriptor::new(
                        "section4c",
                        QuestionnaireKind::Client,
                        vec![
                            FieldSpec::radio("q9c", rating()),
                            FieldSpec::radio("q10c", yes_no()),
                        ],
                    ),
                    SectionDescriptor::new(
                        "section5c",
                        QuestionnaireKind::Client,
                        vec![
                            FieldSpec::radio("q11c", rating()),
                            FieldSpec::text("q12c").optional(),
                        ],
                    ),
                    SectionDescriptor::new(
                        "section6c",
                        QuestionnaireKind::Client,
                        vec![
                            FieldSpec::radio("q13c", yes_no()),
                            // Amount paid, in riel. Only answerable after a
                            // "yes" above.
                            FieldSpec::text("q14c").depends(FieldDependency::when_equals(
                                "q13c",
                                "1",
                                DependencyEffect::Clear,
                            )),
                            FieldSpec::radio("q15c", rating()),
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
