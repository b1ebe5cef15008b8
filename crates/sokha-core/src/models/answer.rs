use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single form answer as it crosses the wire.
///
/// The transport layer is not type-consistent: the same logical value
/// arrives as `"1"` on user input and as `1` on initial load. This is a
/// known quirk of the upstream payload format that the backend also relies
/// on, so every comparison goes through [`AnswerValue::normalized`] instead
/// of being "fixed" to strict equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum AnswerValue {
    Text(String),
    Number(f64),
}

impl AnswerValue {
    /// Canonical string form: numeric values with no fractional part lose
    /// their decimal point, so `"1"`, `1` and `1.0` all normalize to `"1"`.
    pub fn normalized(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => normalize_answer_value(s),
            Self::Number(n) => Cow::Owned(canonical_number(*n)),
        }
    }

    /// Type-tolerant equality against a literal, e.g. `value.loosely_eq("1")`.
    pub fn loosely_eq(&self, other: &str) -> bool {
        self.normalized() == normalize_answer_value(other)
    }

    /// Empty text counts as unset; a number never does.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}

/// Collapse the string/numeric representation split once, at the read site.
pub fn normalize_answer_value(raw: &str) -> Cow<'_, str> {
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Cow::Owned(canonical_number(n)),
        _ => Cow::Borrowed(raw),
    }
}

fn canonical_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for AnswerValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for AnswerValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_and_numeric_one_are_equal() {
        assert!(AnswerValue::from("1").loosely_eq("1"));
        assert!(AnswerValue::from(1_i64).loosely_eq("1"));
        assert!(AnswerValue::from(1.0).loosely_eq("1"));
        assert!(AnswerValue::from("1.0").loosely_eq("1"));
        assert!(!AnswerValue::from("0").loosely_eq("1"));
        assert!(!AnswerValue::from("10").loosely_eq("1"));
    }

    #[test]
    fn free_text_is_left_alone() {
        assert_eq!(AnswerValue::from("yes").normalized(), "yes");
        assert!(AnswerValue::from("yes").loosely_eq("yes"));
        assert!(!AnswerValue::from("yes").loosely_eq("no"));
    }

    #[test]
    fn only_empty_text_is_empty() {
        assert!(AnswerValue::from("").is_empty());
        assert!(!AnswerValue::from("0").is_empty());
        assert!(!AnswerValue::from(0_i64).is_empty());
    }
}
