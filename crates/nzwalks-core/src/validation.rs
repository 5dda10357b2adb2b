//! Validation utilities.

use crate::{FieldError, NzWalksError};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns an `NzWalksError` on failure.
    fn validate_request(&self) -> Result<(), NzWalksError> {
        self.validate().map_err(validation_errors_to_nzwalks_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `NzWalksError`, keeping every
/// field error.
#[must_use]
pub fn validation_errors_to_nzwalks_error(errors: ValidationErrors) -> NzWalksError {
    let details = collect_field_errors(&errors);

    let message = details
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    NzWalksError::Validation { message, details }
}

/// Flattens validator errors, including nested structs and lists, into
/// field errors. Nested fields are reported as `parent.child`.
///
/// Field names are reported in camelCase to match the JSON payload.
#[must_use]
pub fn collect_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut field_errors = Vec::new();

    for (field, kind) in errors.errors() {
        let field = json_field_name(field);
        match kind {
            ValidationErrorsKind::Field(errs) => {
                for err in errs {
                    let message = err
                        .message
                        .as_ref()
                        .map_or_else(|| format!("Validation failed for field '{}'", field), ToString::to_string);

                    field_errors.push(FieldError {
                        field: field.clone(),
                        message,
                        code: err.code.to_string(),
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                for nested_err in collect_field_errors(nested) {
                    field_errors.push(FieldError {
                        field: format!("{}.{}", field, nested_err.field),
                        ..nested_err
                    });
                }
            }
            ValidationErrorsKind::List(items) => {
                for (index, item_errors) in items {
                    for nested_err in collect_field_errors(item_errors) {
                        field_errors.push(FieldError {
                            field: format!("{}[{}].{}", field, index, nested_err.field),
                            ..nested_err
                        });
                    }
                }
            }
        }
    }

    field_errors.sort_by(|a, b| a.field.cmp(&b.field));
    field_errors
}

/// Converts a Rust field name (`length_in_km`) to its JSON name (`lengthInKm`).
fn json_field_name(field: &str) -> String {
    let mut name = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = !name.is_empty();
        } else if upper {
            name.extend(c.to_uppercase());
            upper = false;
        } else {
            name.push(c);
        }
    }
    name
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank").with_message("must not be blank".into()));
        }
        Ok(())
    }
}
