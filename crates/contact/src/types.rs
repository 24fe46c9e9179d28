use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Services a visitor can ask about. The wire tokens are the kebab-case
/// identifiers the form checkboxes post.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
pub enum ServiceType {
    #[serde(rename = "web-development")]
    #[strum(serialize = "web-development")]
    WebDevelopment,
    #[serde(rename = "mobile-app")]
    #[strum(serialize = "mobile-app")]
    MobileApp,
    #[serde(rename = "consulting")]
    #[strum(serialize = "consulting")]
    Consulting,
}

impl ServiceType {
    /// Human-readable label for checkboxes and page copy.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::WebDevelopment => "Web Development",
            ServiceType::MobileApp => "Mobile App",
            ServiceType::Consulting => "Consulting",
        }
    }
}
