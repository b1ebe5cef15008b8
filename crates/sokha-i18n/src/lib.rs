//! sokha-i18n
//!
//! Question and answer text resolution. A lookup walks a fixed fallback
//! chain — requested locale, then English, then the literal key — so a
//! respondent never sees a blank control label, only (at worst) the raw
//! key, which is at least diagnosable.
//!
//! The catalog ships with embedded English text and a partial Khmer
//! translation; site-specific dictionaries from the translation service are
//! merged on top via [`Catalog::merge_json`].

pub mod catalog;
mod embedded;
pub mod error;

pub use catalog::{Catalog, TranslationTable};
pub use error::I18nError;
