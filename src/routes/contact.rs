use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::Form;
use brochure_contact::{ContactSubmission, FieldError, ServiceType, SubmitFormInput};
use serde_json::json;
use strum::VariantArray;

use crate::error::AppError;
use crate::routes::AppState;
use crate::template::{SERVER_ERROR_MESSAGE, render};

const ADMIN_SUBJECT: &str = "New Contact Form Submission";
const USER_SUBJECT: &str = "Thank you for contacting us";
const USER_BODY: &str = "We have received your message and will get back to you soon.";
const SUCCESS_MESSAGE: &str = "Form submitted successfully";

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    services: &'static [ServiceType],
    values: SubmitFormInput,
    errors: Vec<FieldError>,
    notice: Option<&'static str>,
    alert: Option<String>,
}

impl ContactTemplate {
    fn blank() -> Self {
        Self {
            services: ServiceType::VARIANTS,
            values: SubmitFormInput::default(),
            errors: Vec::new(),
            notice: None,
            alert: None,
        }
    }

    fn submitted() -> Self {
        Self {
            notice: Some(SUCCESS_MESSAGE),
            ..Self::blank()
        }
    }

    fn with_errors(values: SubmitFormInput, errors: Vec<FieldError>) -> Self {
        Self {
            values,
            errors,
            ..Self::blank()
        }
    }

    fn with_alert(values: SubmitFormInput, alert: impl Into<String>) -> Self {
        Self {
            values,
            alert: Some(alert.into()),
            ..Self::blank()
        }
    }

    fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    fn service_checked(&self, service: &ServiceType) -> bool {
        self.values
            .service_type
            .iter()
            .any(|v| v.as_str() == service.as_ref())
    }
}

pub async fn page() -> Response {
    render(ContactTemplate::blank())
}

/// HTML form flow. Same pipeline as the API, but field errors re-render the
/// page inline so the visitor gets immediate feedback.
pub async fn action(
    State(state): State<AppState>,
    Form(input): Form<SubmitFormInput>,
) -> Response {
    match process(&state, input.clone()).await {
        Ok(()) => render(ContactTemplate::submitted()),
        Err(AppError::Validation(errors)) => render(ContactTemplate::with_errors(input, errors)),
        Err(AppError::SpamDetected) => render(ContactTemplate::with_alert(input, "Spam detected")),
        Err(AppError::Internal(e)) => {
            tracing::error!("Error processing contact form: {e:?}");
            render(ContactTemplate::with_alert(input, SERVER_ERROR_MESSAGE))
        }
        Err(_) => render(ContactTemplate::with_alert(input, SERVER_ERROR_MESSAGE)),
    }
}

/// POST /api/contact - the authoritative submission endpoint.
pub async fn api(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let input: SubmitFormInput = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "Rejecting undecodable contact payload");
        AppError::Malformed
    })?;

    process(&state, input).await?;

    Ok(Json(json!({ "message": SUCCESS_MESSAGE })))
}

/// The submission pipeline: honeypot, contract validation, configuration
/// check, then two independent best-effort sends. Once validation and the
/// configuration check pass the outcome is success; delivery failures are
/// logged and never surfaced to the submitter.
async fn process(state: &AppState, input: SubmitFormInput) -> Result<(), AppError> {
    if input.is_spam() {
        tracing::warn!("Contact form honeypot tripped, rejecting submission");
        return Err(AppError::SpamDetected);
    }

    let submission = input.into_submission().map_err(AppError::Validation)?;

    let email = &state.config.email;
    if !email.is_configured() {
        tracing::error!("SMTP relay is not configured, cannot deliver contact submission");
        return Err(AppError::ConfigurationMissing);
    }

    let body = notification_body(&submission);

    match email.admin() {
        Some(admin) => {
            if let Err(e) = state
                .mailer
                .send(email.sender(), admin, ADMIN_SUBJECT, &body)
                .await
            {
                tracing::error!(error = %e, to = admin, "Failed to send admin notification");
            }
        }
        None => tracing::debug!("No admin address configured, skipping notification"),
    }

    if !submission.email.is_empty() {
        if let Err(e) = state
            .mailer
            .send(email.sender(), &submission.email, USER_SUBJECT, USER_BODY)
            .await
        {
            tracing::error!(error = %e, to = %submission.email, "Failed to send confirmation email");
        }
    }

    Ok(())
}

fn notification_body(submission: &ContactSubmission) -> String {
    format!(
        "New Contact Form Submission:\n\
         \n\
         First Name: {}\n\
         Last Name: {}\n\
         Email: {}\n\
         Company Name: {}\n\
         Service Type: {}\n\
         Message: {}\n",
        submission.first_name,
        submission.last_name,
        submission.email,
        submission.company_name,
        submission.service_list(),
        submission.message,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_body_lists_every_field() {
        let submission = ContactSubmission {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "ann@example.com".to_string(),
            company_name: "Acme".to_string(),
            service_type: vec![ServiceType::WebDevelopment, ServiceType::Consulting],
            message: "Hi".to_string(),
        };

        let body = notification_body(&submission);
        assert!(body.starts_with("New Contact Form Submission:"));
        assert!(body.contains("First Name: Ann"));
        assert!(body.contains("Last Name: Lee"));
        assert!(body.contains("Email: ann@example.com"));
        assert!(body.contains("Company Name: Acme"));
        assert!(body.contains("Service Type: web-development, consulting"));
        assert!(body.contains("Message: Hi"));
    }

    #[test]
    fn template_reports_errors_per_field() {
        let errors = vec![FieldError {
            field: "email".to_string(),
            message: "Invalid email format".to_string(),
        }];

        let template = ContactTemplate::with_errors(SubmitFormInput::default(), errors);
        assert_eq!(template.error_for("email"), Some("Invalid email format"));
        assert_eq!(template.error_for("firstName"), None);
    }

    #[test]
    fn template_remembers_checked_services() {
        let values = SubmitFormInput {
            service_type: vec!["consulting".to_string()],
            ..SubmitFormInput::default()
        };

        let template = ContactTemplate::with_errors(values, Vec::new());
        assert!(template.service_checked(&ServiceType::Consulting));
        assert!(!template.service_checked(&ServiceType::MobileApp));
    }
}
