//! Outbound mail collaborator.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::EmailConfig;

/// A single send operation. Both the admin notification and the user
/// confirmation go through this seam, so tests can substitute a recording
/// stub for the SMTP relay.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, from: &str, to: &str, subject: &str, body: &str) -> Result<()>;
}

/// Production mailer backed by lettre. Opens a fresh transport session per
/// send; the relay is an external collaborator with its own availability, so
/// every session carries a bounded timeout.
pub struct SmtpMailer {
    config: EmailConfig,
}

impl SmtpMailer {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    fn transport(&self) -> Result<SmtpTransport> {
        let credentials = Credentials::new(
            self.config.smtp_username.clone(),
            self.config.smtp_password.clone(),
        );

        // smtp_secure selects implicit TLS; the 587 default expects STARTTLS.
        let builder = if self.config.smtp_secure {
            SmtpTransport::relay(&self.config.smtp_host)
        } else {
            SmtpTransport::starttls_relay(&self.config.smtp_host)
        }
        .context("Failed to create SMTP transport")?;

        Ok(builder
            .port(self.config.smtp_port)
            .credentials(credentials)
            .timeout(Some(Duration::from_secs(self.config.smtp_timeout_seconds)))
            .build())
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, from: &str, to: &str, subject: &str, body: &str) -> Result<()> {
        let email = Message::builder()
            .from(from.parse().context("Failed to parse from address")?)
            .to(to.parse().context("Failed to parse to address")?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .context("Failed to build email message")?;

        self.transport()?.send(&email).context("SMTP send failed")?;

        Ok(())
    }
}
