//! Option records shown in the list.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The value carried by an option: a string or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Number(n) => write!(f, "{n}"),
            OptionValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Text(s)
    }
}

impl From<f64> for OptionValue {
    fn from(n: f64) -> Self {
        OptionValue::Number(n)
    }
}

impl From<i32> for OptionValue {
    fn from(n: i32) -> Self {
        OptionValue::Number(n.into())
    }
}

/// A selectable entry.
///
/// Equality is structural over the whole record: two options are the same
/// choice only if both `label` and `value` match. Options with equal values
/// but different labels are distinct selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: OptionValue,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_covers_label_and_value() {
        assert_eq!(SelectOption::new("One", 1), SelectOption::new("One", 1));
        assert_ne!(SelectOption::new("One", 1), SelectOption::new("Uno", 1));
        assert_ne!(SelectOption::new("One", 1), SelectOption::new("One", "1"));
    }

    #[test]
    fn value_deserializes_from_string_or_number() {
        let opts: Vec<SelectOption> = serde_json::from_str(
            r#"[{"label": "a", "value": 1}, {"label": "b", "value": "bee"}]"#,
        )
        .unwrap();
        assert_eq!(opts[0].value, OptionValue::Number(1.0));
        assert_eq!(opts[1].value, OptionValue::Text("bee".into()));
    }

    #[test]
    fn value_displays_plainly() {
        assert_eq!(OptionValue::from(3).to_string(), "3");
        assert_eq!(OptionValue::from(2.5).to_string(), "2.5");
        assert_eq!(OptionValue::from("x").to_string(), "x");
    }
}
