//! Document Catalog
//!
//! Field schemas published to clients so they can build the intake form.
//! Required flags are advisory: rendering never rejects incomplete input.

use serde::Serialize;

use crate::document::{DocumentKind, FieldValues};

/// Input widget a client should use for a field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldInput {
    Text,
    Date,
    Textarea,
    Select,
}

/// Schema entry for one form field
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    #[serde(rename = "type")]
    pub input: FieldInput,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "no_options")]
    pub options: &'static [&'static str],
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn no_options(options: &&'static [&'static str]) -> bool {
    options.is_empty()
}

impl FieldSpec {
    const fn new(name: &'static str, label: &'static str, input: FieldInput) -> Self {
        Self {
            name,
            label,
            input,
            required: true,
            placeholder: None,
            options: &[],
        }
    }

    const fn placeholder(mut self, text: &'static str) -> Self {
        self.placeholder = Some(text);
        self
    }

    const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    const fn options(mut self, options: &'static [&'static str]) -> Self {
        self.options = options;
        self
    }
}

const WILL_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("fullName", "Full Legal Name", FieldInput::Text)
        .placeholder("Enter your full legal name"),
    FieldSpec::new("address", "Complete Address", FieldInput::Textarea)
        .placeholder("Street address, city, state, ZIP code"),
    FieldSpec::new("dateOfBirth", "Date of Birth", FieldInput::Date),
    FieldSpec::new("executionDate", "Date of Will Execution", FieldInput::Date),
    FieldSpec::new("beneficiaries", "Beneficiaries and Their Shares", FieldInput::Textarea)
        .placeholder("List all beneficiaries and what they will receive"),
    FieldSpec::new("executor", "Executor Name", FieldInput::Text)
        .placeholder("Name of person to execute your will"),
    FieldSpec::new("executorAddress", "Executor Address", FieldInput::Textarea)
        .placeholder("Complete address of executor"),
    FieldSpec::new("executorPhone", "Executor Phone Number", FieldInput::Text)
        .placeholder("(555) 123-4567"),
    FieldSpec::new("specialInstructions", "Special Instructions", FieldInput::Textarea)
        .placeholder("Any specific instructions or wishes (optional)")
        .optional(),
    FieldSpec::new("witnessRequired", "Witness Requirement", FieldInput::Select).options(&[
        "Yes, witnesses required",
        "No witnesses required",
        "Notarization only",
    ]),
];

const POA_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("principalName", "Principal Full Name", FieldInput::Text)
        .placeholder("Your full legal name"),
    FieldSpec::new("principalAddress", "Principal Address", FieldInput::Textarea)
        .placeholder("Your complete address"),
    FieldSpec::new("principalPhone", "Principal Phone", FieldInput::Text)
        .placeholder("(555) 123-4567"),
    FieldSpec::new("principalDOB", "Principal Date of Birth", FieldInput::Date),
    FieldSpec::new("attorneyName", "Attorney-in-Fact Name", FieldInput::Text)
        .placeholder("Full name of person you are appointing"),
    FieldSpec::new("attorneyAddress", "Attorney-in-Fact Address", FieldInput::Textarea)
        .placeholder("Complete address of attorney-in-fact"),
    FieldSpec::new("attorneyPhone", "Attorney-in-Fact Phone", FieldInput::Text)
        .placeholder("(555) 123-4567"),
    FieldSpec::new("scopeOfAuthority", "Scope of Authority", FieldInput::Textarea)
        .placeholder("Describe what powers you are granting (financial, medical, real estate, etc.)"),
    FieldSpec::new("effectiveDate", "Effective Date", FieldInput::Date),
    FieldSpec::new("duration", "Duration/Termination", FieldInput::Textarea)
        .placeholder("When does this power of attorney end?"),
];

/// Form fields for a document kind, in display order
pub const fn fields(kind: DocumentKind) -> &'static [FieldSpec] {
    match kind {
        DocumentKind::Will => WILL_FIELDS,
        DocumentKind::PowerOfAttorney => POA_FIELDS,
    }
}

/// Marketing blurb shown next to the document kind
pub const fn description(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Will => {
            "Ensure your assets are distributed according to your wishes with a legally sound will."
        }
        DocumentKind::PowerOfAttorney => {
            "Authorize someone you trust to make decisions on your behalf when you cannot."
        }
    }
}

/// Required fields that are absent or empty in `values`
pub fn missing_required(kind: DocumentKind, values: &FieldValues) -> Vec<&'static str> {
    fields(kind)
        .iter()
        .filter(|spec| spec.required && values.get(spec.name).is_none())
        .map(|spec| spec.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_kind_has_ten_fields() {
        assert_eq!(fields(DocumentKind::Will).len(), 10);
        assert_eq!(fields(DocumentKind::PowerOfAttorney).len(), 10);
    }

    #[test]
    fn test_missing_required_ignores_optional() {
        let values: FieldValues = fields(DocumentKind::Will)
            .iter()
            .filter(|f| f.name != "specialInstructions")
            .map(|f| (f.name, "x"))
            .collect();

        assert!(missing_required(DocumentKind::Will, &values).is_empty());
    }

    #[test]
    fn test_missing_required_lists_gaps() {
        let values = FieldValues::new().with("principalName", "Jane Doe");
        let missing = missing_required(DocumentKind::PowerOfAttorney, &values);

        assert_eq!(missing.len(), 9);
        assert!(!missing.contains(&"principalName"));
        assert!(missing.contains(&"duration"));
    }

    #[test]
    fn test_schema_serializes_select_options() {
        let json = serde_json::to_value(fields(DocumentKind::Will)).unwrap();
        let witness = &json[9];
        assert_eq!(witness["type"], "select");
        assert_eq!(witness["options"].as_array().unwrap().len(), 3);
        assert!(json[0].get("options").is_none());
    }
}
