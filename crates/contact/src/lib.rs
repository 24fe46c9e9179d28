//! Shared contract for contact-form submissions.
//!
//! The same schema backs both trust boundaries: the HTML form flow re-renders
//! its field errors for the visitor, the JSON API enforces them
//! authoritatively. Submissions are transient values with no identity and no
//! storage.

mod submission;
mod types;

pub use submission::{ContactSubmission, FieldError, SubmitFormInput};
pub use types::ServiceType;
