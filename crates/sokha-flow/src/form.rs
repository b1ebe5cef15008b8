use std::collections::{BTreeMap, BTreeSet};

use sokha_core::AnswerValue;
use sokha_schema::fields::{SectionDescriptor, checkbox_key};

use crate::error::FlowError;

/// In-memory answers for the currently displayed section.
///
/// Owned exclusively by that section: state is re-initialized empty on every
/// fetch and never pre-filled from server data — the server holds previously
/// submitted sections. Keys are validated against the section descriptor so
/// a misspelled field name is an error rather than a silent no-op.
#[derive(Debug, Clone)]
pub struct FormState {
    section_id: String,
    known: BTreeSet<String>,
    values: BTreeMap<String, AnswerValue>,
    send_defaults: Vec<(String, String)>,
}

impl FormState {
    pub fn for_section(descriptor: &SectionDescriptor) -> Self {
        Self {
            section_id: descriptor.section_id.clone(),
            known: descriptor.known_keys().into_iter().collect(),
            values: BTreeMap::new(),
            send_defaults: descriptor
                .fields
                .iter()
                .filter_map(|f| {
                    f.send_default
                        .as_ref()
                        .map(|d| (f.name.clone(), d.clone()))
                })
                .collect(),
        }
    }

    pub fn section_id(&self) -> &str {
        &self.section_id
    }

    pub fn get(&self, name: &str) -> Option<&AnswerValue> {
        self.values.get(name)
    }

    /// Replace a field's value outright (radio, text, hidden).
    pub fn set(
        &mut self,
        name: &str,
        value: impl Into<AnswerValue>,
    ) -> Result<(), FlowError> {
        if !self.known.contains(name) {
            return Err(FlowError::UnknownField {
                section: self.section_id.clone(),
                field: name.to_string(),
            });
        }
        self.values.insert(name.to_string(), value.into());
        Ok(())
    }

    /// Unset a field. Clearing an absent key is harmless; absence and the
    /// empty string mean the same thing to the payload.
    pub fn clear(&mut self, name: &str) {
        self.values.remove(name);
    }

    /// Toggle one option of a checkbox group. Checking writes the literal
    /// flag `"1"` under `"<group>_<value>"`; unchecking removes the key —
    /// absence denotes "not selected", never `false` or `0`.
    pub fn set_checked(
        &mut self,
        group: &str,
        option_value: &str,
        checked: bool,
    ) -> Result<(), FlowError> {
        let key = checkbox_key(group, option_value);
        if checked {
            self.set(&key, "1")
        } else {
            if !self.known.contains(key.as_str()) {
                return Err(FlowError::UnknownField {
                    section: self.section_id.clone(),
                    field: key,
                });
            }
            self.values.remove(&key);
            Ok(())
        }
    }

    pub fn is_checked(&self, group: &str, option_value: &str) -> bool {
        self.values.contains_key(&checkbox_key(group, option_value))
    }

    /// The section-scoped answer payload. Always includes the
    /// historically-required columns via their defaults, whether or not the
    /// respondent touched them.
    pub fn to_submission_payload(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut payload = serde_json::Map::new();
        for (name, value) in &self.values {
            let wire = match value {
                AnswerValue::Text(s) => serde_json::Value::String(s.clone()),
                AnswerValue::Number(n) => serde_json::json!(n),
            };
            payload.insert(name.clone(), wire);
        }
        for (name, default) in &self.send_defaults {
            if !payload.contains_key(name) {
                payload.insert(name.clone(), serde_json::Value::String(default.clone()));
            }
        }
        payload
    }
}
