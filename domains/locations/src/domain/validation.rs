//! Structural validation rules for locations
//!
//! Locations have no persistence-dependent rules; this pass is the whole
//! validation story.

use tertulia_common::{FieldErrors, Result};

use crate::domain::entities::LocationPayload;

pub const LOCATION_NAME_MAX: usize = 255;
pub const LOCATION_URL_MAX: usize = 255;

pub fn validate_location(location: &LocationPayload) -> Result<()> {
    let mut errs = FieldErrors::new();

    if location.name.is_empty() {
        errs.add("name", "location name cannot be empty");
    } else if location.name.chars().count() > LOCATION_NAME_MAX {
        errs.add(
            "name",
            format!("name cannot be longer than {LOCATION_NAME_MAX} characters"),
        );
    }
    if location.address.is_empty() {
        errs.add("address", "location address cannot be empty");
    }
    if let Some(url) = &location.url {
        if url.chars().count() > LOCATION_URL_MAX {
            errs.add(
                "url",
                format!("url cannot be longer than {LOCATION_URL_MAX} characters"),
            );
        }
    }

    errs.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tertulia_common::{Error, Kind};

    #[test]
    fn test_missing_name_and_address_both_reported() {
        let error = validate_location(&LocationPayload::default()).unwrap_err();
        assert_eq!(error.kind(), Kind::Validation);
        let Error::Fields(fields) = error else {
            panic!("expected aggregated fields");
        };
        assert_eq!(
            fields.get("name").unwrap(),
            &["location name cannot be empty".to_string()]
        );
        assert_eq!(
            fields.get("address").unwrap(),
            &["location address cannot be empty".to_string()]
        );
    }

    #[test]
    fn test_url_ceiling() {
        let payload = LocationPayload {
            name: "Plaza Park".to_string(),
            address: "123 Main St".to_string(),
            url: Some("h".repeat(LOCATION_URL_MAX + 1)),
        };
        let Error::Fields(fields) = validate_location(&payload).unwrap_err() else {
            panic!("expected aggregated fields");
        };
        assert!(fields.get("url").is_some());
        assert!(fields.get("name").is_none());
    }

    #[test]
    fn test_valid_location_passes() {
        let payload = LocationPayload {
            name: "Plaza Park".to_string(),
            address: "123 Main St".to_string(),
            url: None,
        };
        assert!(validate_location(&payload).is_ok());
    }
}
