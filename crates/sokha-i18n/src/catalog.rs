use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use sokha_core::{Locale, QuestionnaireKind};

use crate::embedded;
use crate::error::I18nError;

/// Question and answer text for one `(locale, namespace)` pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationTable {
    #[serde(default)]
    pub questions: HashMap<String, String>,
    #[serde(default)]
    pub answers: HashMap<String, String>,
}

/// Layered translation catalog keyed by locale and questionnaire kind.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: HashMap<(Locale, QuestionnaireKind), TranslationTable>,
}

impl Catalog {
    /// The catalog bundled with the binary: full English, partial Khmer.
    pub fn embedded() -> Self {
        let mut catalog = Self::default();
        for (locale, kind, questions, answers) in embedded::TABLES {
            let table = catalog.table_mut(*locale, *kind);
            table
                .questions
                .extend(questions.iter().map(|(k, v)| (k.to_string(), v.to_string())));
            table
                .answers
                .extend(answers.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        }
        catalog
    }

    /// Merge a site dictionary (JSON, `locale → namespace → table`) over
    /// this catalog. Later entries win key-by-key.
    pub fn merge_json(&mut self, json: &str) -> Result<(), I18nError> {
        let parsed: HashMap<String, HashMap<String, TranslationTable>> =
            serde_json::from_str(json)?;

        for (locale_key, namespaces) in parsed {
            let locale = Locale::parse(&locale_key)
                .map_err(|_| I18nError::UnknownLocale(locale_key.clone()))?;
            for (ns_key, incoming) in namespaces {
                let kind = QuestionnaireKind::parse(&ns_key)
                    .map_err(|_| I18nError::UnknownNamespace(ns_key.clone()))?;
                let table = self.table_mut(locale, kind);
                table.questions.extend(incoming.questions);
                table.answers.extend(incoming.answers);
            }
        }
        Ok(())
    }

    /// Resolve display text. Fallback order, first non-empty wins: locale
    /// questions, locale answers, English questions, English answers, and
    /// finally the literal key.
    pub fn resolve(&self, locale: Locale, namespace: QuestionnaireKind, key: &str) -> String {
        self.lookup(locale, namespace, key)
            .or_else(|| {
                if locale == Locale::En {
                    None
                } else {
                    self.lookup(Locale::En, namespace, key)
                }
            })
            .unwrap_or(key)
            .to_string()
    }

    fn lookup(&self, locale: Locale, namespace: QuestionnaireKind, key: &str) -> Option<&str> {
        let table = self.tables.get(&(locale, namespace))?;
        table
            .questions
            .get(key)
            .or_else(|| table.answers.get(key))
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    fn table_mut(&mut self, locale: Locale, kind: QuestionnaireKind) -> &mut TranslationTable {
        self.tables.entry((locale, kind)).or_default()
    }
}
