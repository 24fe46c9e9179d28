use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::ServiceType;

/// One validation violation, addressed to a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Raw contact-form payload as it arrives on the wire, JSON or urlencoded.
///
/// Every field defaults so that a missing key surfaces as a field error
/// rather than a decode failure.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFormInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "First Name is required"))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Last Name is required"))]
    pub last_name: String,
    #[serde(default)]
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Company Name is required"))]
    pub company_name: String,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "At least one Service Type is required"),
        custom(function = validate_service_types)
    )]
    pub service_type: Vec<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
    /// Honeypot. Hidden from legitimate users and constrained to stay empty.
    #[serde(default)]
    #[validate(length(max = 0))]
    pub middle_name: Option<String>,
}

impl SubmitFormInput {
    /// Honeypot probe. Checked before contract validation so spam traffic is
    /// rejected without paying for the rest of the pipeline.
    pub fn is_spam(&self) -> bool {
        self.middle_name.as_deref().is_some_and(|v| !v.is_empty())
    }

    /// Run every contract rule in one pass and parse into the domain type.
    ///
    /// Pure: consults nothing but the fields, and the same input always
    /// yields the same outcome.
    pub fn into_submission(self) -> Result<ContactSubmission, Vec<FieldError>> {
        if let Err(errors) = self.validate() {
            return Err(field_errors(&errors));
        }

        // Validation ruled out unknown tokens, so nothing is dropped here.
        let service_type = self
            .service_type
            .iter()
            .filter_map(|v| ServiceType::from_str(v).ok())
            .collect();

        Ok(ContactSubmission {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            company_name: self.company_name,
            service_type,
            message: self.message,
        })
    }
}

/// A submission that satisfied every contract rule. Consumed by the email
/// dispatcher and then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company_name: String,
    pub service_type: Vec<ServiceType>,
    pub message: String,
}

impl ContactSubmission {
    /// Selected services joined for human-readable output.
    pub fn service_list(&self) -> String {
        self.service_type
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn validate_service_types(values: &[String]) -> Result<(), ValidationError> {
    if values.iter().any(|v| ServiceType::from_str(v).is_err()) {
        return Err(
            ValidationError::new("service_type").with_message("Unknown service type".into())
        );
    }

    Ok(())
}

/// Wire order of the schema fields, used to keep error lists stable.
const FIELD_ORDER: [&str; 7] = [
    "firstName",
    "lastName",
    "email",
    "companyName",
    "serviceType",
    "message",
    "middleName",
];

fn wire_name(field: &str) -> &str {
    match field {
        "first_name" => "firstName",
        "last_name" => "lastName",
        "company_name" => "companyName",
        "service_type" => "serviceType",
        "middle_name" => "middleName",
        other => other,
    }
}

fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = Vec::new();

    for (field, violations) in errors.field_errors() {
        for violation in violations {
            let message = violation
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| violation.code.to_string());

            out.push(FieldError {
                field: wire_name(&field).to_string(),
                message,
            });
        }
    }

    out.sort_by_key(|e| FIELD_ORDER.iter().position(|f| *f == e.field));

    out
}
