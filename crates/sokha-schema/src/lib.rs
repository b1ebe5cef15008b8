//! sokha-schema
//!
//! Section catalogs for the two questionnaire flows. Pure data — no I/O.
//! Defines the ordered sections, field kinds, option sets, and cross-field
//! dependencies for each questionnaire, and validates their structure.

pub mod error;
pub mod fields;
pub mod questionnaires;

use error::SchemaError;
use fields::{FieldKind, SectionDescriptor};
use sokha_core::QuestionnaireKind;
use sokha_core::routes::{CONSENT_SECTION, THANK_SECTION};

/// Trait implemented by each questionnaire flow.
///
/// Sections are ordered as presented; the consent section is always first.
/// The terminal thank page is render-only and has no catalog entry.
pub trait Questionnaire: Send + Sync {
    fn kind(&self) -> QuestionnaireKind;

    /// Human-readable name (e.g., "Client satisfaction questionnaire").
    fn name(&self) -> &str;

    /// All schema-backed sections, consent first, in presentation order.
    fn sections(&self) -> &[SectionDescriptor];

    /// The section served when a session has no position yet.
    fn entry_section_id(&self) -> &str {
        CONSENT_SECTION
    }

    /// Canonical id of the first section after consent.
    fn first_section_id(&self) -> &str {
        self.sections()
            .iter()
            .map(|s| s.section_id.as_str())
            .find(|id| *id != CONSENT_SECTION)
            .unwrap_or(CONSENT_SECTION)
    }

    /// Legacy URL alias for [`Self::first_section_id`]. Old QR codes and
    /// bookmarks still carry it.
    fn legacy_first_alias(&self) -> &str {
        "section1"
    }

    fn section(&self, id: &str) -> Option<&SectionDescriptor> {
        self.sections().iter().find(|s| s.section_id == id)
    }

    fn is_known_section(&self, id: &str) -> bool {
        self.section(id).is_some()
    }

    /// Structural validation of the catalog: option integrity, and a
    /// dependency graph that is acyclic with depth at most 1.
    fn validate(&self) -> Vec<SchemaError> {
        let mut errors = Vec::new();
        let mut seen_ids: Vec<&str> = Vec::new();

        for section in self.sections() {
            let sid = section.section_id.as_str();
            if sid == THANK_SECTION {
                errors.push(SchemaError::DuplicateSection {
                    section: sid.to_string(),
                });
            }
            if seen_ids.contains(&sid) {
                errors.push(SchemaError::DuplicateSection {
                    section: sid.to_string(),
                });
            }
            seen_ids.push(sid);

            for field in &section.fields {
                let choice = matches!(field.kind, FieldKind::Radio | FieldKind::CheckboxGroup);
                if choice && field.options.is_empty() {
                    errors.push(SchemaError::MissingOptions {
                        section: sid.to_string(),
                        field: field.name.clone(),
                    });
                }
                if !choice && !field.options.is_empty() {
                    errors.push(SchemaError::UnexpectedOptions {
                        section: sid.to_string(),
                        field: field.name.clone(),
                    });
                }
                if field.at_least_one && field.kind != FieldKind::CheckboxGroup {
                    errors.push(SchemaError::AtLeastOneOnNonGroup {
                        section: sid.to_string(),
                        field: field.name.clone(),
                    });
                }

                let mut seen_values: Vec<&str> = Vec::new();
                for option in &field.options {
                    if seen_values.contains(&option.value.as_str()) {
                        errors.push(SchemaError::DuplicateOptionValue {
                            section: sid.to_string(),
                            field: field.name.clone(),
                            value: option.value.clone(),
                        });
                    }
                    seen_values.push(&option.value);
                }

                if let Some(dep) = &field.depends_on {
                    if dep.source == field.name {
                        errors.push(SchemaError::SelfDependency {
                            section: sid.to_string(),
                            field: field.name.clone(),
                        });
                    } else {
                        match section.field(&dep.source) {
                            None => errors.push(SchemaError::UnknownDependencySource {
                                section: sid.to_string(),
                                field: field.name.clone(),
                                dependency: dep.source.clone(),
                            }),
                            Some(source) if source.depends_on.is_some() => {
                                errors.push(SchemaError::ChainedDependency {
                                    section: sid.to_string(),
                                    field: field.name.clone(),
                                    dependency: dep.source.clone(),
                                });
                            }
                            Some(_) => {}
                        }
                    }
                }
            }
        }

        errors
    }
}

/// Return both questionnaire flows.
pub fn all_questionnaires() -> Vec<Box<dyn Questionnaire>> {
    vec![
        Box::new(questionnaires::client::ClientQuestionnaire),
        Box::new(questionnaires::provider::ProviderQuestionnaire),
    ]
}

/// Look up the questionnaire for a flow kind.
pub fn questionnaire_for(kind: QuestionnaireKind) -> Box<dyn Questionnaire> {
    match kind {
        QuestionnaireKind::Client => Box::new(questionnaires::client::ClientQuestionnaire),
        QuestionnaireKind::Provider => Box::new(questionnaires::provider::ProviderQuestionnaire),
    }
}
