//! Structural validation rules for events and categories
//!
//! These rules are decidable from the payload alone; referential checks (the
//! category an event points at) are cascading fetches in the handlers and are
//! deliberately not part of this pass.

use tertulia_common::{FieldErrors, Result};

pub const EVENT_NAME_MAX: usize = 50;
pub const EVENT_DESCRIPTION_MAX: usize = 1000;
pub const EVENT_LOCATION_MAX: usize = 200;
pub const CATEGORY_NAME_MAX: usize = 50;

fn event_fields(
    name: &str,
    description: Option<&str>,
    location: Option<&str>,
) -> FieldErrors {
    let mut errs = FieldErrors::new();

    if name.is_empty() {
        errs.add("name", "name cannot be empty");
    } else if name.chars().count() > EVENT_NAME_MAX {
        errs.add(
            "name",
            format!("name cannot be longer than {EVENT_NAME_MAX} characters"),
        );
    }
    if let Some(description) = description {
        if description.chars().count() > EVENT_DESCRIPTION_MAX {
            errs.add(
                "description",
                format!("description cannot be longer than {EVENT_DESCRIPTION_MAX} characters"),
            );
        }
    }
    if let Some(location) = location {
        if location.chars().count() > EVENT_LOCATION_MAX {
            errs.add(
                "location",
                format!("location cannot be longer than {EVENT_LOCATION_MAX} characters"),
            );
        }
    }

    errs
}

/// Validate a new event before any persistence call is made.
pub fn validate_new_event(
    name: &str,
    description: Option<&str>,
    location: Option<&str>,
    category_id: i64,
) -> Result<()> {
    let mut errs = event_fields(name, description, location);
    if category_id <= 0 {
        errs.add("category_id", "category_id is a required field");
    }
    errs.into_result()
}

/// Validate an event after a partial update has been applied to it.
pub fn validate_updated_event(
    name: &str,
    description: Option<&str>,
    location: Option<&str>,
) -> Result<()> {
    event_fields(name, description, location).into_result()
}

/// Validate a category name.
pub fn validate_category(name: &str) -> Result<()> {
    let mut errs = FieldErrors::new();
    if name.is_empty() {
        errs.add("name", "name cannot be empty");
    } else if name.chars().count() > CATEGORY_NAME_MAX {
        errs.add(
            "name",
            format!("name cannot be longer than {CATEGORY_NAME_MAX} characters"),
        );
    }
    errs.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tertulia_common::{Error, Kind};

    fn field_errors(result: Result<()>) -> tertulia_common::FieldErrors {
        match result.unwrap_err() {
            Error::Fields(fields) => fields,
            other => panic!("expected aggregated field errors, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_name_is_reported() {
        let errs = field_errors(validate_new_event("", None, None, 1));
        let reasons = errs.get("name").unwrap();
        assert!(!reasons.is_empty());
    }

    #[test]
    fn test_every_violated_field_is_reported_together() {
        let long_description = "d".repeat(EVENT_DESCRIPTION_MAX + 1);
        let long_location = "l".repeat(EVENT_LOCATION_MAX + 1);
        let errs = field_errors(validate_new_event(
            "",
            Some(&long_description),
            Some(&long_location),
            0,
        ));
        assert_eq!(errs.len(), 4);
        assert!(errs.get("name").is_some());
        assert!(errs.get("description").is_some());
        assert!(errs.get("location").is_some());
        assert!(errs.get("category_id").is_some());
    }

    #[test]
    fn test_compliant_fields_have_no_entries() {
        let errs = field_errors(validate_new_event("Jazz Night", None, None, 0));
        assert!(errs.get("name").is_none());
        assert!(errs.get("category_id").is_some());
    }

    #[test]
    fn test_name_length_ceiling() {
        let name = "n".repeat(EVENT_NAME_MAX);
        assert!(validate_updated_event(&name, None, None).is_ok());

        let name = "n".repeat(EVENT_NAME_MAX + 1);
        let result = validate_updated_event(&name, None, None);
        assert_eq!(result.unwrap_err().kind(), Kind::Validation);
    }

    #[test]
    fn test_valid_event_passes() {
        assert!(validate_new_event("Jazz Night", Some("live music"), Some("Plaza Park"), 3).is_ok());
    }

    #[test]
    fn test_category_name_rules() {
        assert!(validate_category("Music").is_ok());
        assert!(validate_category("").is_err());
        assert!(validate_category(&"c".repeat(CATEGORY_NAME_MAX + 1)).is_err());
    }
}
