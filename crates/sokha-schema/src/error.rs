use thiserror::Error;

/// Structural defects in a section catalog, reported by
/// [`crate::Questionnaire::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("duplicate section id: {section}")]
    DuplicateSection { section: String },

    #[error("{section}.{field}: dependency source {dependency} is not a field of this section")]
    UnknownDependencySource {
        section: String,
        field: String,
        dependency: String,
    },

    #[error("{section}.{field}: field depends on itself")]
    SelfDependency { section: String, field: String },

    #[error("{section}.{field}: chained dependency through {dependency}")]
    ChainedDependency {
        section: String,
        field: String,
        dependency: String,
    },

    #[error("{section}.{field}: choice field has no options")]
    MissingOptions { section: String, field: String },

    #[error("{section}.{field}: non-choice field declares options")]
    UnexpectedOptions { section: String, field: String },

    #[error("{section}.{field}: at-least-one only applies to checkbox groups")]
    AtLeastOneOnNonGroup { section: String, field: String },

    #[error("{section}.{field}: duplicate option value {value}")]
    DuplicateOptionValue {
        section: String,
        field: String,
        value: String,
    },
}
