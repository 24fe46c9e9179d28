//! Shared builders for driving the router in tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use brochure::config::{Config, EmailConfig, ObservabilityConfig, ServerConfig};
use brochure::email::Mailer;

/// One attempted send, captured in order.
#[derive(Debug, Clone)]
pub struct SentMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Recording mailer: captures every attempted send and can be told to fail
/// for a given recipient.
#[derive(Default)]
pub struct RecordingMailer {
    attempts: Mutex<Vec<SentMail>>,
    fail_to: Option<String>,
}

impl RecordingMailer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing_for(to: &str) -> Arc<Self> {
        Arc::new(Self {
            attempts: Mutex::new(Vec::new()),
            fail_to: Some(to.to_string()),
        })
    }

    pub fn attempts(&self) -> Vec<SentMail> {
        self.attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, from: &str, to: &str, subject: &str, body: &str) -> Result<()> {
        self.attempts.lock().unwrap().push(SentMail {
            from: from.to_string(),
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });

        if self.fail_to.as_deref() == Some(to) {
            return Err(anyhow!("simulated SMTP failure for {to}"));
        }

        Ok(())
    }
}

/// Config with a fully configured relay plus admin and from addresses.
pub fn configured() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        email: EmailConfig {
            smtp_host: "smtp.example.com".to_string(),
            smtp_username: "mailer@example.com".to_string(),
            smtp_password: "secret".to_string(),
            from_address: "site@example.com".to_string(),
            admin_address: "admin@example.com".to_string(),
            ..EmailConfig::default()
        },
        observability: ObservabilityConfig::default(),
    }
}

/// Config with no relay credentials at all.
pub fn unconfigured() -> Config {
    Config {
        email: EmailConfig::default(),
        ..configured()
    }
}
