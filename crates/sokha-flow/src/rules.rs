use std::collections::BTreeMap;

use sokha_schema::fields::{
    DependencyEffect, FieldKind, FieldSpec, SectionDescriptor, checkbox_key,
};

use crate::form::FormState;

/// Computed state of one form control after rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldEffects {
    pub required: bool,
    pub disabled: bool,
}

/// Effects per form-state key. Checkbox groups appear per option, under
/// their `"<group>_<value>"` keys.
pub type EffectMap = BTreeMap<String, FieldEffects>;

/// Recompute field effects against the current answers, force-clearing
/// dependents whose condition no longer holds.
///
/// Runs on mount (to normalize state before first render) and again on
/// every change to a source field. All value comparisons are type-tolerant:
/// `"1"` and a numeric `1` are the same answer.
pub fn evaluate(section: &SectionDescriptor, form: &mut FormState) -> EffectMap {
    let mut effects = EffectMap::new();

    for field in &section.fields {
        match field.kind {
            FieldKind::CheckboxGroup => {
                let any_checked = field
                    .options
                    .iter()
                    .any(|o| form.is_checked(&field.name, &o.value));
                for (i, option) in field.options.iter().enumerate() {
                    // "Require at least one" pins the requirement on the
                    // first option only while the group is empty; a single
                    // check anywhere satisfies it. Marking every option
                    // required would deadlock the form.
                    let required = field.at_least_one && i == 0 && !any_checked;
                    effects.insert(
                        checkbox_key(&field.name, &option.value),
                        FieldEffects {
                            required,
                            disabled: false,
                        },
                    );
                }
            }
            FieldKind::Radio | FieldKind::Text | FieldKind::Hidden => {
                effects.insert(field.name.clone(), evaluate_scalar(field, form));
            }
        }
    }

    effects
}

fn evaluate_scalar(field: &FieldSpec, form: &mut FormState) -> FieldEffects {
    let Some(dep) = &field.depends_on else {
        return FieldEffects {
            required: field.required,
            disabled: false,
        };
    };

    let met = form
        .get(&dep.source)
        .is_some_and(|value| value.loosely_eq(&dep.equals));

    match dep.effect {
        DependencyEffect::Clear => {
            if met {
                FieldEffects {
                    required: field.required,
                    disabled: false,
                }
            } else {
                let holds_value = form.get(&field.name).is_some_and(|v| !v.is_empty());
                if holds_value {
                    form.clear(&field.name);
                }
                FieldEffects {
                    required: false,
                    disabled: true,
                }
            }
        }
        DependencyEffect::Disable => FieldEffects {
            required: field.required && met,
            disabled: !met,
        },
        DependencyEffect::Require => FieldEffects {
            required: field.required || met,
            disabled: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use sokha_core::QuestionnaireKind;
    use sokha_schema::fields::{FieldDependency, FieldOption};

    use super::*;

    fn payment_section() -> SectionDescriptor {
        SectionDescriptor::new(
            "section6c",
            QuestionnaireKind::Client,
            vec![
                FieldSpec::radio(
                    "q13c",
                    vec![FieldOption::new("1", "yes"), FieldOption::new("0", "no")],
                ),
                FieldSpec::text("q14c").depends(FieldDependency::when_equals(
                    "q13c",
                    "1",
                    DependencyEffect::Clear,
                )),
            ],
        )
    }

    #[test]
    fn dependent_is_enabled_and_required_when_source_is_one() {
        let section = payment_section();
        let mut form = FormState::for_section(&section);
        form.set("q13c", "1").unwrap();

        let effects = evaluate(&section, &mut form);
        let q14c = effects["q14c"];
        assert!(q14c.required);
        assert!(!q14c.disabled);
    }

    #[test]
    fn numeric_source_value_counts_the_same_as_the_string() {
        let section = payment_section();
        let mut form = FormState::for_section(&section);
        form.set("q13c", 1_i64).unwrap();

        let effects = evaluate(&section, &mut form);
        assert!(effects["q14c"].required);
        assert!(!effects["q14c"].disabled);
    }

    #[test]
    fn unmet_condition_clears_and_disables_the_dependent() {
        let section = payment_section();
        let mut form = FormState::for_section(&section);
        form.set("q13c", "1").unwrap();
        form.set("q14c", "42").unwrap();

        // Respondent flips the answer back to "no".
        form.set("q13c", "0").unwrap();
        let effects = evaluate(&section, &mut form);

        assert!(form.get("q14c").is_none(), "stale amount must be cleared");
        assert!(!effects["q14c"].required);
        assert!(effects["q14c"].disabled);
    }

    #[test]
    fn mount_normalizes_state_before_first_render() {
        let section = payment_section();
        let mut form = FormState::for_section(&section);

        // No answer for q13c yet: the dependent starts disabled.
        let effects = evaluate(&section, &mut form);
        assert!(effects["q14c"].disabled);
        assert!(!effects["q14c"].required);
    }

    #[test]
    fn disable_effect_keeps_the_value_but_locks_the_input() {
        let section = SectionDescriptor::new(
            "s",
            QuestionnaireKind::Client,
            vec![
                FieldSpec::radio(
                    "gate",
                    vec![FieldOption::new("1", "yes"), FieldOption::new("0", "no")],
                ),
                FieldSpec::text("detail").depends(FieldDependency::when_equals(
                    "gate",
                    "1",
                    DependencyEffect::Disable,
                )),
            ],
        );
        let mut form = FormState::for_section(&section);
        form.set("gate", "1").unwrap();
        form.set("detail", "kept").unwrap();
        form.set("gate", "0").unwrap();

        let effects = evaluate(&section, &mut form);
        assert!(effects["detail"].disabled);
        assert!(form.get("detail").is_some(), "disable does not clear");
    }

    #[test]
    fn require_effect_raises_required_when_the_condition_holds() {
        let section = SectionDescriptor::new(
            "s",
            QuestionnaireKind::Client,
            vec![
                FieldSpec::radio(
                    "gate",
                    vec![FieldOption::new("1", "yes"), FieldOption::new("0", "no")],
                ),
                FieldSpec::text("detail").optional().depends(
                    FieldDependency::when_equals("gate", "1", DependencyEffect::Require),
                ),
            ],
        );
        let mut form = FormState::for_section(&section);

        let effects = evaluate(&section, &mut form);
        assert!(!effects["detail"].required);

        form.set("gate", "1").unwrap();
        let effects = evaluate(&section, &mut form);
        assert!(effects["detail"].required);
        assert!(!effects["detail"].disabled);
    }

    #[test]
    fn first_checkbox_option_required_only_while_group_is_empty() {
        let section = SectionDescriptor::new(
            "section2c",
            QuestionnaireKind::Client,
            vec![
                FieldSpec::checkbox_group(
                    "q5c",
                    vec![
                        FieldOption::new("1", "a"),
                        FieldOption::new("2", "b"),
                        FieldOption::new("3", "c"),
                    ],
                )
                .require_at_least_one(),
            ],
        );
        let mut form = FormState::for_section(&section);

        let effects = evaluate(&section, &mut form);
        assert!(effects["q5c_1"].required);
        assert!(!effects["q5c_2"].required);

        // Checking any option releases the first option's requirement.
        form.set_checked("q5c", "3", true).unwrap();
        let effects = evaluate(&section, &mut form);
        assert!(!effects["q5c_1"].required);

        // Unchecking it re-arms the constraint.
        form.set_checked("q5c", "3", false).unwrap();
        let effects = evaluate(&section, &mut form);
        assert!(effects["q5c_1"].required);
    }
}
