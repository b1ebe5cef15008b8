use serde::{Deserialize, Serialize};
use ts_rs::TS;

use sokha_core::QuestionnaireKind;

/// How a field is rendered and how its value mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    /// Single choice; `set` replaces the value outright.
    Radio,
    /// Multi choice; state is kept per option under `"<group>_<value>"` keys.
    CheckboxGroup,
    /// Free text (numeric free fields included).
    Text,
    /// Not rendered; exists so the server always receives its column.
    Hidden,
}

/// One selectable option of a radio or checkbox-group field.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldOption {
    /// Wire value, by convention a small numeric string.
    pub value: String,
    /// Key resolved through the answers namespace of the translation catalog.
    pub translation_key: String,
}

impl FieldOption {
    pub fn new(value: impl Into<String>, translation_key: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            translation_key: translation_key.into(),
        }
    }
}

/// What an unmet/met dependency condition does to the dependent field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DependencyEffect {
    /// Unmet: value force-cleared, input disabled, required suppressed.
    /// Met: the field's own `required` flag applies.
    Clear,
    /// Unmet: input disabled, value left alone.
    Disable,
    /// Met: required regardless of the field's own flag.
    Require,
}

/// Declares that a field's state is derived from another field's value.
///
/// The dependency graph is acyclic with depth at most 1 — no chained
/// dependencies exist in the domain, and [`crate::Questionnaire::validate`]
/// rejects catalogs that introduce one. Comparison against `equals` is
/// type-tolerant (`"1"` matches a numeric `1`).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldDependency {
    pub source: String,
    pub equals: String,
    pub effect: DependencyEffect,
}

impl FieldDependency {
    pub fn when_equals(
        source: impl Into<String>,
        equals: impl Into<String>,
        effect: DependencyEffect,
    ) -> Self {
        Self {
            source: source.into(),
            equals: equals.into(),
            effect,
        }
    }
}

/// A single form field within a section.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    pub options: Vec<FieldOption>,
    pub required: bool,
    pub depends_on: Option<FieldDependency>,
    /// Value the submission payload carries when the field was never
    /// touched. Reproduces historically-required columns the server still
    /// expects on every row.
    pub send_default: Option<String>,
    /// Checkbox groups only: at least one option must be checked. Enforced
    /// by marking the first option required while the group is empty.
    pub at_least_one: bool,
}

impl FieldSpec {
    pub fn radio(name: impl Into<String>, options: Vec<FieldOption>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Radio,
            options,
            required: true,
            depends_on: None,
            send_default: None,
            at_least_one: false,
        }
    }

    pub fn checkbox_group(name: impl Into<String>, options: Vec<FieldOption>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::CheckboxGroup,
            options,
            required: false,
            depends_on: None,
            send_default: None,
            at_least_one: false,
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Text,
            options: Vec::new(),
            required: true,
            depends_on: None,
            send_default: None,
            at_least_one: false,
        }
    }

    pub fn hidden(name: impl Into<String>, send_default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Hidden,
            options: Vec::new(),
            required: false,
            depends_on: None,
            send_default: Some(send_default.into()),
            at_least_one: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn depends(mut self, dependency: FieldDependency) -> Self {
        self.depends_on = Some(dependency);
        self
    }

    pub fn require_at_least_one(mut self) -> Self {
        self.at_least_one = true;
        self
    }
}

/// One page of the questionnaire: a fixed, ordered set of fields.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionDescriptor {
    pub section_id: String,
    pub kind: QuestionnaireKind,
    pub fields: Vec<FieldSpec>,
}

impl SectionDescriptor {
    pub fn new(
        section_id: impl Into<String>,
        kind: QuestionnaireKind,
        fields: Vec<FieldSpec>,
    ) -> Self {
        Self {
            section_id: section_id.into(),
            kind,
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Every key the form state may legally hold for this section: plain
    /// field names, plus the per-option keys of checkbox groups.
    pub fn known_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        for field in &self.fields {
            if field.kind == FieldKind::CheckboxGroup {
                for option in &field.options {
                    keys.push(checkbox_key(&field.name, &option.value));
                }
            } else {
                keys.push(field.name.clone());
            }
        }
        keys
    }
}

/// Form-state key for one option of a checkbox group.
pub fn checkbox_key(group: &str, option_value: &str) -> String {
    format!("{group}_{option_value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_expand_checkbox_groups_per_option() {
        let section = SectionDescriptor::new(
            "s",
            QuestionnaireKind::Client,
            vec![
                FieldSpec::radio("q1", vec![FieldOption::new("1", "yes")]),
                FieldSpec::checkbox_group(
                    "q2",
                    vec![FieldOption::new("1", "a"), FieldOption::new("2", "b")],
                ),
            ],
        );
        assert_eq!(section.known_keys(), vec!["q1", "q2_1", "q2_2"]);
    }
}
