//! Document Kinds and Field Values

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{DocError, Result};

/// Placeholder rendered for a missing or empty field
pub const MISSING_VALUE: &str = "N/A";

/// Supported legal document kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    #[serde(rename = "will")]
    Will,
    #[serde(rename = "poa")]
    PowerOfAttorney,
}

impl DocumentKind {
    pub const ALL: [Self; 2] = [Self::Will, Self::PowerOfAttorney];

    /// Wire identifier used by clients
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Will => "will",
            Self::PowerOfAttorney => "poa",
        }
    }

    /// Heading printed at the top of the first page
    pub const fn title(self) -> &'static str {
        match self {
            Self::Will => "LAST WILL AND TESTAMENT",
            Self::PowerOfAttorney => "POWER OF ATTORNEY",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Will => "Last Will & Testament",
            Self::PowerOfAttorney => "Power of Attorney",
        }
    }

    /// Filename offered for the final download
    pub const fn filename(self) -> &'static str {
        match self {
            Self::Will => "will.pdf",
            Self::PowerOfAttorney => "power_of_attorney.pdf",
        }
    }

    /// Distance the title is shifted left of the page centre, in points
    pub const fn title_offset(self) -> f32 {
        match self {
            Self::Will => 120.0,
            Self::PowerOfAttorney => 100.0,
        }
    }

    /// List price in USD
    pub fn price(self) -> Decimal {
        match self {
            Self::Will | Self::PowerOfAttorney => dec!(29.99),
        }
    }
}

impl FromStr for DocumentKind {
    type Err = DocError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "will" => Ok(Self::Will),
            "poa" => Ok(Self::PowerOfAttorney),
            other => Err(DocError::InvalidInput(format!("Invalid document type: {other}"))),
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form data submitted for a document, keyed by field name
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues(BTreeMap<String, String>);

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Raw value, if present and non-empty
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str).filter(|v| !v.is_empty())
    }

    /// Value for display, substituting `fallback` when missing or empty
    pub fn get_or<'a>(&'a self, name: &str, fallback: &'a str) -> &'a str {
        self.get(name).unwrap_or(fallback)
    }

    /// Value for display, substituting "N/A" when missing or empty
    pub fn display(&self, name: &str) -> &str {
        self.get_or(name, MISSING_VALUE)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert a JSON object into field values.
    ///
    /// Strings are taken as-is, numbers and booleans are stringified and
    /// `null` is treated as absent. Arrays and nested objects are rejected.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| DocError::InvalidInput("formData must be an object".into()))?;

        let mut fields = Self::new();
        for (name, value) in object {
            match value {
                serde_json::Value::Null => {}
                serde_json::Value::String(s) => fields.insert(name.clone(), s.clone()),
                serde_json::Value::Number(n) => fields.insert(name.clone(), n.to_string()),
                serde_json::Value::Bool(b) => fields.insert(name.clone(), b.to_string()),
                serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                    return Err(DocError::InvalidInput(format!(
                        "formData field '{name}' must be a string"
                    )));
                }
            }
        }
        Ok(fields)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_parsing() {
        assert_eq!("will".parse::<DocumentKind>().unwrap(), DocumentKind::Will);
        assert_eq!("poa".parse::<DocumentKind>().unwrap(), DocumentKind::PowerOfAttorney);

        let err = "invalid-kind".parse::<DocumentKind>().unwrap_err();
        assert!(matches!(err, DocError::InvalidInput(_)));
    }

    #[test]
    fn test_kind_serde_names() {
        assert_eq!(serde_json::to_string(&DocumentKind::PowerOfAttorney).unwrap(), "\"poa\"");
        let kind: DocumentKind = serde_json::from_str("\"will\"").unwrap();
        assert_eq!(kind, DocumentKind::Will);
    }

    #[test]
    fn test_missing_and_empty_fall_back() {
        let fields = FieldValues::new().with("fullName", "Jane Doe").with("address", "");
        assert_eq!(fields.display("fullName"), "Jane Doe");
        assert_eq!(fields.display("address"), MISSING_VALUE);
        assert_eq!(fields.display("executor"), MISSING_VALUE);
        assert_eq!(fields.get_or("executor", "nobody"), "nobody");
    }

    #[test]
    fn test_from_json() {
        let fields = FieldValues::from_json(&json!({
            "fullName": "Jane Doe",
            "age": 42,
            "witnessed": true,
            "executor": null,
        }))
        .unwrap();

        assert_eq!(fields.get("fullName"), Some("Jane Doe"));
        assert_eq!(fields.get("age"), Some("42"));
        assert_eq!(fields.get("witnessed"), Some("true"));
        assert_eq!(fields.get("executor"), None);
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        assert!(FieldValues::from_json(&json!("nope")).is_err());
        assert!(FieldValues::from_json(&json!({"a": {"b": 1}})).is_err());
        assert!(FieldValues::from_json(&json!({"a": [1, 2]})).is_err());
    }
}
