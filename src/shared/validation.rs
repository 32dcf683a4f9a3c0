//! Validation Utilities

use validator::ValidationErrors;

use super::error::{AppError, FieldError};

/// Convert validator errors to an AppError, reporting every failed field.
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                field: field.to_string(),
                message: e.message.clone().map(|m| m.to_string()).unwrap_or_default(),
            })
        })
        .collect();

    if field_errors.is_empty() {
        return AppError::Validation("Validation failed".into());
    }

    let message = field_errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    AppError::Validation(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(email(message = "Invalid email format"))]
        email: String,

        #[validate(length(min = 1, message = "Name must not be empty"))]
        name: String,
    }

    #[test]
    fn test_validation_error_names_failed_fields() {
        let probe = Probe {
            email: "nope".to_string(),
            name: String::new(),
        };

        let err = validation_error(probe.validate().unwrap_err());

        let AppError::Validation(msg) = err else {
            panic!("expected a validation error");
        };
        assert!(msg.contains("email"));
        assert!(msg.contains("name"));
    }

    #[test]
    fn test_validation_error_passes_valid_input() {
        let probe = Probe {
            email: "ok@example.com".to_string(),
            name: "Ok".to_string(),
        };

        assert!(probe.validate().is_ok());
    }
}
