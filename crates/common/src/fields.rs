//! Per-field validation error aggregation
//!
//! Validators collect every failing rule into a [`FieldErrors`] before
//! reporting, so a client gets all per-field hints in one response instead of
//! fixing fields one at a time. A fresh instance is built for each request.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Ordered mapping from field name to the reasons that field failed.
///
/// Reasons keep insertion order and duplicates; fields serialize in a stable
/// (sorted) order. An empty instance is "no error" and must never be surfaced
/// as a failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `reason` to the list for `field`, creating the list if absent.
    pub fn add(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(reason.into());
    }

    /// True iff no field has been added.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one reason.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The reasons recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Finalize the aggregation: `None` if nothing failed, otherwise a
    /// Validation-kind error carrying the full field map.
    pub fn into_error(self) -> Option<Error> {
        if self.is_empty() {
            None
        } else {
            Some(Error::Fields(self))
        }
    }

    /// Finalize as a `Result`, for use at the end of a validation pass.
    pub fn into_result(self) -> Result<()> {
        match self.into_error() {
            None => Ok(()),
            Some(error) => Err(error),
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, reasons) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, reasons.join(", "))?;
            first = false;
        }
        Ok(())
    }
}
