use serde::{Deserialize, Serialize};

use crate::inquiry::FieldErrors;

pub const VALIDATION_FAILED_MESSAGE: &str = "Por favor, complete todos los campos correctamente.";
pub const DELIVERY_FAILED_MESSAGE: &str =
    "Hubo un problema al enviar tu mensaje. Por favor, intenta nuevamente más tarde.";
pub const SUCCEEDED_MESSAGE: &str = "¡Gracias por tu mensaje! Te contactaremos a la brevedad.";

/// Outcome of one contact-form submission. Exactly one variant per attempt;
/// transport details never appear here, only in the server logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionResult {
    ValidationFailed { errors: FieldErrors, message: String },
    DeliveryFailed { message: String },
    Succeeded { message: String },
}

impl SubmissionResult {
    pub fn validation_failed(errors: FieldErrors) -> Self {
        Self::ValidationFailed {
            errors,
            message: VALIDATION_FAILED_MESSAGE.into(),
        }
    }

    pub fn delivery_failed() -> Self {
        Self::DeliveryFailed {
            message: DELIVERY_FAILED_MESSAGE.into(),
        }
    }

    pub fn succeeded() -> Self {
        Self::Succeeded {
            message: SUCCEEDED_MESSAGE.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_value(SubmissionResult::succeeded()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "status": "succeeded",
                "message": SUCCEEDED_MESSAGE,
            })
        );
    }

    #[test]
    fn validation_failure_carries_field_errors() {
        let mut errors = FieldErrors::default();
        errors.push(crate::inquiry::InquiryField::Email, "Ingrese un email válido");

        let json = serde_json::to_value(SubmissionResult::validation_failed(errors)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "status": "validation_failed",
                "errors": { "email": ["Ingrese un email válido"] },
                "message": VALIDATION_FAILED_MESSAGE,
            })
        );
    }
}
