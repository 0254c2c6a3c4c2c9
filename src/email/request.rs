use crate::error::EmailError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
}

/// Simple structural check, not RFC 5322.
pub fn is_valid_email(email: &str) -> bool {
    !email.trim().is_empty() && email_regex().is_match(email)
}

/// An email to be sent through an `EmailSender`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmailRequest {
    pub to: String,
    pub subject: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

impl EmailRequest {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        EmailRequest {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
            from: None,
        }
    }

    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Checks required fields first, then the recipient format.
    pub fn validate(&self) -> Result<(), EmailError> {
        if self.to.trim().is_empty() {
            return Err(EmailError::invalid("recipient is required"));
        }
        if self.subject.trim().is_empty() {
            return Err(EmailError::invalid("subject is required"));
        }
        if self.body.trim().is_empty() {
            return Err(EmailError::invalid("body is required"));
        }
        if !is_valid_email(&self.to) {
            return Err(EmailError::invalid("recipient is not a valid email address"));
        }
        Ok(())
    }

    /// The explicit sender when present and not blank, `default` otherwise.
    pub fn sender_or<'a>(&'a self, default: &'a str) -> &'a str {
        match self.from.as_deref() {
            Some(from) if !from.trim().is_empty() => from,
            _ => default,
        }
    }
}

impl fmt::Display for EmailRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EmailRequest{{to='{}', subject='{}', body='{}', from='{}'}}",
            self.to,
            self.subject,
            self.body,
            self.from.as_deref().unwrap_or("null")
        )
    }
}
