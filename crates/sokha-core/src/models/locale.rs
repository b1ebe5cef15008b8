use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Supported respondent locales. [`Locale::En`] is the fallback for every
/// translation lookup and the default for new sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Locale {
    #[default]
    En,
    /// Khmer.
    Kh,
}

impl Locale {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Kh => "kh",
        }
    }

    /// Tolerant parse: case-insensitive, region tags (`kh-KH`) accepted.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Ok(Self::En),
            "kh" | "km" => Ok(Self::Kh),
            _ => Err(CoreError::UnknownLocale(value.to_string())),
        }
    }

    /// Whether `value` names a locale at all. The session navigator uses this
    /// to recognize a historical URL shape where the locale landed in the
    /// section-index position.
    pub fn is_locale_code(value: &str) -> bool {
        Self::parse(value).is_ok()
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_tolerant_of_case_and_region() {
        assert_eq!(Locale::parse("KH").unwrap(), Locale::Kh);
        assert_eq!(Locale::parse("kh-KH").unwrap(), Locale::Kh);
        assert_eq!(Locale::parse(" en ").unwrap(), Locale::En);
        assert!(Locale::parse("fr").is_err());
        assert!(Locale::parse("").is_err());
    }
}
