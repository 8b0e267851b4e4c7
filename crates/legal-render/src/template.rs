//! Document Templates
//!
//! Fixed, ordered body lines for each document kind. Every interpolated
//! field falls back on its own, so one missing value never blanks a line.

use legal_core::{DocumentKind, FieldValues};

const SIGNATURE_RULE: &str = "_________________________";
const DOUBLE_SIGNATURE_RULE: &str = "_________________________    _________________________";

/// Body lines for `kind`, in print order. Blank strings are spacers.
pub fn template_lines(kind: DocumentKind, fields: &FieldValues) -> Vec<String> {
    let v = |name: &str| single_line(fields.display(name));

    match kind {
        DocumentKind::Will => will_lines(fields, v),
        DocumentKind::PowerOfAttorney => poa_lines(v),
    }
}

fn will_lines(fields: &FieldValues, v: impl Fn(&str) -> String) -> Vec<String> {
    let instructions =
        single_line(fields.get_or("specialInstructions", "No special instructions provided."));
    let witnesses =
        single_line(fields.get_or("witnessRequired", "Standard witness requirements apply."));

    vec![
        format!(
            "I, {}, of {}, being of sound mind and disposing memory,",
            v("fullName"),
            v("address")
        ),
        "do hereby make, publish, and declare this to be my Last Will and Testament.".into(),
        String::new(),
        format!("Date of Birth: {}", v("dateOfBirth")),
        format!("Date of Execution: {}", v("executionDate")),
        String::new(),
        "ARTICLE I - REVOCATION".into(),
        "I hereby revoke all prior wills and codicils made by me.".into(),
        String::new(),
        "ARTICLE II - BENEFICIARIES".into(),
        "I give, devise, and bequeath my estate to the following beneficiaries:".into(),
        v("beneficiaries"),
        String::new(),
        "ARTICLE III - EXECUTOR".into(),
        format!(
            "I hereby nominate and appoint {} as the Executor of this Will.",
            v("executor")
        ),
        format!("Address: {}", v("executorAddress")),
        format!("Phone: {}", v("executorPhone")),
        String::new(),
        "ARTICLE IV - SPECIAL INSTRUCTIONS".into(),
        instructions,
        String::new(),
        "ARTICLE V - WITNESS REQUIREMENTS".into(),
        witnesses,
        String::new(),
        format!(
            "IN WITNESS WHEREOF, I have hereunto set my hand this {}.",
            v("executionDate")
        ),
        String::new(),
        String::new(),
        SIGNATURE_RULE.into(),
        format!("{}, Testator", v("fullName")),
        String::new(),
        String::new(),
        "WITNESSES:".into(),
        String::new(),
        DOUBLE_SIGNATURE_RULE.into(),
        "Witness 1 Signature           Witness 2 Signature".into(),
        String::new(),
        DOUBLE_SIGNATURE_RULE.into(),
        "Print Name                    Print Name".into(),
    ]
}

fn poa_lines(v: impl Fn(&str) -> String) -> Vec<String> {
    vec![
        "KNOW ALL MEN BY THESE PRESENTS:".into(),
        String::new(),
        format!(
            "I, {}, of {}, being of sound mind,",
            v("principalName"),
            v("principalAddress")
        ),
        format!(
            "do hereby constitute and appoint {} of {}",
            v("attorneyName"),
            v("attorneyAddress")
        ),
        "as my true and lawful Attorney-in-Fact.".into(),
        String::new(),
        "PRINCIPAL INFORMATION:".into(),
        format!("Name: {}", v("principalName")),
        format!("Address: {}", v("principalAddress")),
        format!("Phone: {}", v("principalPhone")),
        format!("Date of Birth: {}", v("principalDOB")),
        String::new(),
        "ATTORNEY-IN-FACT INFORMATION:".into(),
        format!("Name: {}", v("attorneyName")),
        format!("Address: {}", v("attorneyAddress")),
        format!("Phone: {}", v("attorneyPhone")),
        String::new(),
        "SCOPE OF AUTHORITY:".into(),
        v("scopeOfAuthority"),
        String::new(),
        "EFFECTIVE DATE:".into(),
        format!(
            "This Power of Attorney shall become effective on {}.",
            v("effectiveDate")
        ),
        String::new(),
        "DURATION:".into(),
        v("duration"),
        String::new(),
        format!(
            "IN WITNESS WHEREOF, I have executed this Power of Attorney on {}.",
            v("effectiveDate")
        ),
        String::new(),
        String::new(),
        SIGNATURE_RULE.into(),
        format!("{}, Principal", v("principalName")),
        String::new(),
        String::new(),
        "NOTARIZATION:".into(),
        String::new(),
        "State of: _________________".into(),
        "County of: ________________".into(),
        String::new(),
        "On this _____ day of _________, 20__, before me personally appeared".into(),
        format!(
            "{}, who proved to me on the basis of satisfactory",
            v("principalName")
        ),
        "evidence to be the person whose name is subscribed to the within instrument".into(),
        "and acknowledged to me that he/she executed the same in his/her authorized".into(),
        "capacity, and that by his/her signature on the instrument the person, or the".into(),
        "entity upon behalf of which the person acted, executed the instrument.".into(),
        String::new(),
        SIGNATURE_RULE.into(),
        "Notary Public".into(),
    ]
}

/// Collapse line breaks and other control characters into single spaces
fn single_line(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending_space = false;

    for ch in value.chars() {
        if ch.is_control() {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_counts() {
        let empty = FieldValues::new();
        assert_eq!(template_lines(DocumentKind::Will, &empty).len(), 38);
        assert_eq!(template_lines(DocumentKind::PowerOfAttorney, &empty).len(), 47);
    }

    #[test]
    fn test_missing_fields_fall_back_independently() {
        let fields = FieldValues::new().with("fullName", "Jane Doe");
        let lines = template_lines(DocumentKind::Will, &fields);

        assert_eq!(
            lines[0],
            "I, Jane Doe, of N/A, being of sound mind and disposing memory,"
        );
        assert_eq!(lines[28], "Jane Doe, Testator");
    }

    #[test]
    fn test_will_specific_fallbacks() {
        let lines = template_lines(DocumentKind::Will, &FieldValues::new());
        assert!(lines.iter().any(|l| l == "No special instructions provided."));
        assert!(lines.iter().any(|l| l == "Standard witness requirements apply."));
    }

    #[test]
    fn test_multiline_values_are_flattened() {
        let fields = FieldValues::new().with("beneficiaries", "Alice: 50%\r\nBob: 50%\n");
        let lines = template_lines(DocumentKind::Will, &fields);
        assert_eq!(lines[11], "Alice: 50% Bob: 50%");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("a\n\n\tb"), "a b");
        assert_eq!(single_line("\nleading"), "leading");
        assert_eq!(single_line("plain"), "plain");
    }
}
