//! Route form validation
//!
//! The only gate between raw user input and the outbound backends. Nothing
//! downstream accepts a [`RouteForm`]; everything takes a [`RouteRequest`].

use super::request::{FormField, RouteForm, RouteRequest, TravelContext};
use serde::Serialize;
use std::collections::BTreeMap;

/// Minimum number of characters for a start or end location
pub const MIN_LOCATION_LEN: usize = 3;

/// Field name → list of human-readable messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<FormField, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.entry(field).or_default().push(message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&[String]> {
        self.errors.get(&field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &[String])> {
        self.errors.iter().map(|(f, m)| (*f, m.as_slice()))
    }
}

/// Result of validating a [`RouteForm`]: exactly one side is present
pub type ValidationOutcome = Result<RouteRequest, FieldErrors>;

fn check_location(field: FormField, raw: &str, errors: &mut FieldErrors) -> String {
    let value = raw.trim();
    if value.chars().count() < MIN_LOCATION_LEN {
        errors.push(
            field,
            format!(
                "{} must be at least {} characters.",
                field.label(),
                MIN_LOCATION_LEN
            ),
        );
    }
    value.to_string()
}

/// Validate a raw form into a [`RouteRequest`]
///
/// Both locations are checked so the caller sees every failing field at once.
/// Surrounding whitespace is trimmed from the locations; optional hints are
/// carried verbatim, with blank hints treated as absent.
pub fn validate_route_form(form: &RouteForm) -> ValidationOutcome {
    let mut errors = FieldErrors::new();

    let start = check_location(FormField::StartLocation, &form.start_location, &mut errors);
    let end = check_location(FormField::EndLocation, &form.end_location, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(RouteRequest::new(start, end, TravelContext::from_form(form)))
}
