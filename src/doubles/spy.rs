// Pattern 4: Spy
// A stub that also remembers how it was called. Tests inspect it after the fact;
// the spy itself never asserts.

use crate::collaborators::SmtpClient;
use crate::error::SmtpError;
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};

// ============================================================================
// Example: Spy SMTP client
// ============================================================================

/// Arguments of one captured `send` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentMessage {
    pub message: String,
    pub subject: String,
    pub recipient: String,
}

impl SentMessage {
    pub fn new(message: &str, subject: &str, recipient: &str) -> Self {
        SentMessage {
            message: message.to_string(),
            subject: subject.to_string(),
            recipient: recipient.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct SpySmtpClient {
    outcome: bool,
    calls: Mutex<Vec<SentMessage>>,
}

impl SpySmtpClient {
    pub fn new() -> Self {
        Self::returning(true)
    }

    pub fn returning(outcome: bool) -> Self {
        SpySmtpClient {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn was_called(&self) -> bool {
        !self.recorded().is_empty()
    }

    pub fn call_count(&self) -> usize {
        self.recorded().len()
    }

    pub fn last_message(&self) -> Option<SentMessage> {
        self.recorded().last().cloned()
    }

    pub fn calls(&self) -> Vec<SentMessage> {
        self.recorded().to_vec()
    }

    fn recorded(&self) -> std::sync::MutexGuard<'_, Vec<SentMessage>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SpySmtpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SmtpClient for SpySmtpClient {
    fn send(&self, message: &str, subject: &str, recipient: &str) -> Result<bool, SmtpError> {
        self.recorded().push(SentMessage::new(message, subject, recipient));
        Ok(self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::EmailService;

    #[test]
    fn test_untouched_spy() {
        let spy = SpySmtpClient::new();
        let service = EmailService::new(&spy);

        service.notify("no mail here");

        assert!(!spy.was_called());
        assert_eq!(spy.last_message(), None);
    }

    #[test]
    fn test_records_exact_arguments() {
        let spy = SpySmtpClient::new();
        let service = EmailService::new(&spy);

        let sent = service.send_email("Hola", "Saludo", "test@example.com").unwrap();

        assert!(sent);
        assert!(spy.was_called());
        assert_eq!(
            spy.last_message(),
            Some(SentMessage::new("Hola", "Saludo", "test@example.com"))
        );
    }

    #[test]
    fn test_records_every_call_in_order() {
        let spy = SpySmtpClient::returning(false);
        let service = EmailService::new(&spy);

        assert_eq!(service.send_email("one", "s", "a@example.com"), Ok(false));
        assert_eq!(service.send_email("two", "s", "b@example.com"), Ok(false));

        let calls = spy.calls();
        assert_eq!(spy.call_count(), 2);
        assert_eq!(calls[0].message, "one");
        assert_eq!(calls[1].recipient, "b@example.com");
    }

    #[test]
    fn test_owned_spy_inspected_through_subject() {
        let service = EmailService::new(SpySmtpClient::new());

        service.send_email("Hola", "Saludo", "test@example.com").unwrap();

        assert_eq!(service.client().call_count(), 1);
    }

    // A subject with a bug: it decorates the message before handing it over.
    struct SuffixingService<C: SmtpClient> {
        client: C,
    }

    impl<C: SmtpClient> SuffixingService<C> {
        fn send_email(&self, message: &str) -> Result<bool, SmtpError> {
            let altered = format!("{}x", message);
            self.client.send(&altered, "Saludo", "test@example.com")
        }
    }

    #[test]
    fn test_spy_exposes_altered_argument() {
        let spy = SpySmtpClient::new();
        let service = SuffixingService { client: &spy };

        service.send_email("Hola").unwrap();

        let sent = spy.last_message().unwrap();
        assert!(spy.was_called());
        assert_ne!(sent.message, "Hola");
        assert_eq!(sent.message, "Holax");
    }
}
