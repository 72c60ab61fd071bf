//! Field rules for create/edit drafts, one table per catalog.
//!
//! Lengths are counted in characters. Every violated rule is reported, in
//! table order, so a form can flag all fields at once. Parent choice is not
//! checked here: a draft may name any record as its parent.

use refdata_types::{CatalogKind, RecordDraft};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

struct Rule {
    field: &'static str,
    required: bool,
    min: usize,
    max: usize,
}

const fn rule(field: &'static str, required: bool, min: usize, max: usize) -> Rule {
    Rule {
        field,
        required,
        min,
        max,
    }
}

const DEPARTMENT: &[Rule] = &[
    rule("name", true, 2, 255),
    rule("code", true, 1, 50),
    rule("description", false, 0, 500),
    rule("func", false, 0, 255),
    rule("industryBlock", false, 0, 255),
    rule("foundedNumber", false, 0, 100),
    rule("displayOrder", false, 0, 50),
];

const COUNTRY: &[Rule] = &[
    rule("name", true, 2, 100),
    rule("code", true, 2, 2),
    rule("description", false, 0, 255),
];

const GENERIC: &[Rule] = &[
    rule("name", true, 2, 100),
    rule("code", true, 1, 50),
    rule("description", false, 0, 255),
];

fn rules_for(kind: CatalogKind) -> &'static [Rule] {
    match kind {
        CatalogKind::Department => DEPARTMENT,
        CatalogKind::Country => COUNTRY,
        CatalogKind::Religion | CatalogKind::Ethnics | CatalogKind::FamilyRelationship => GENERIC,
    }
}

fn field_value<'a>(draft: &'a RecordDraft, field: &str) -> Option<&'a str> {
    match field {
        "name" => Some(draft.name.as_str()),
        "code" => Some(draft.code.as_str()),
        "description" => draft.description.as_deref(),
        other => draft.extra.get(other).and_then(|v| v.as_str()),
    }
}

fn check(rule: &Rule, value: Option<&str>) -> Option<String> {
    let len = value.map(|v| v.chars().count()).unwrap_or(0);
    if len == 0 {
        return rule.required.then(|| "is required".to_string());
    }
    if rule.min == rule.max && len != rule.min {
        return Some(format!("must be exactly {} characters", rule.min));
    }
    if len < rule.min {
        return Some(format!("must be at least {} characters", rule.min));
    }
    if len > rule.max {
        return Some(format!("must be at most {} characters", rule.max));
    }
    None
}

/// Check `draft` against the field rules of `kind`.
pub fn validate_draft(
    kind: CatalogKind,
    draft: &RecordDraft,
) -> std::result::Result<(), Vec<FieldError>> {
    let errors: Vec<FieldError> = rules_for(kind)
        .iter()
        .filter_map(|rule| {
            check(rule, field_value(draft, rule.field)).map(|message| FieldError {
                field: rule.field,
                message,
            })
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(result: std::result::Result<(), Vec<FieldError>>) -> Vec<&'static str> {
        result.err().unwrap_or_default().iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_valid_department() {
        let draft = RecordDraft::new("HR", "Human resources");
        assert_eq!(validate_draft(CatalogKind::Department, &draft), Ok(()));
    }

    #[test]
    fn test_reports_every_violation() {
        let mut draft = RecordDraft::new("", "X");
        draft.description = Some("d".repeat(501));
        let errors = validate_draft(CatalogKind::Department, &draft).unwrap_err();

        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].to_string(), "name: must be at least 2 characters");
        assert_eq!(errors[1].to_string(), "code: is required");
        assert_eq!(errors[2].to_string(), "description: must be at most 500 characters");
    }

    #[test]
    fn test_country_code_is_exactly_two() {
        let draft = RecordDraft::new("VNM", "Viet Nam");
        let errors = validate_draft(CatalogKind::Country, &draft).unwrap_err();
        assert_eq!(errors[0].message, "must be exactly 2 characters");

        let draft = RecordDraft::new("VN", "Viet Nam");
        assert!(validate_draft(CatalogKind::Country, &draft).is_ok());
    }

    #[test]
    fn test_name_limit_depends_on_kind() {
        let draft = RecordDraft::new("X", "n".repeat(150));
        assert_eq!(fields(validate_draft(CatalogKind::Religion, &draft)), vec!["name"]);
        assert!(validate_draft(CatalogKind::Department, &draft).is_ok());
    }

    #[test]
    fn test_department_extra_fields() {
        let mut draft = RecordDraft::new("OPS", "Operations");
        draft.extra.insert("displayOrder".into(), json!("9".repeat(51)));
        draft.extra.insert("func".into(), json!("Runs things"));
        assert_eq!(
            fields(validate_draft(CatalogKind::Department, &draft)),
            vec!["displayOrder"]
        );
    }

    #[test]
    fn test_lengths_count_characters() {
        // Two characters, four bytes
        let draft = RecordDraft::new("ĐN", "Đà Nẵng");
        assert!(validate_draft(CatalogKind::Country, &draft).is_ok());
    }
}
