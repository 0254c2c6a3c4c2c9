// Pattern 1: Dummy
// An object passed only to satisfy a signature. The exercised code path never uses it.

use crate::collaborators::SmtpClient;
use crate::error::SmtpError;

// ============================================================================
// Example: Dummy SMTP client
// ============================================================================

/// Placeholder SMTP client with no behavior of its own.
///
/// # Panics
///
/// `send` panics. Reaching it means the scenario actually needs a collaborator and
/// should use a stub, spy or mock instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummySmtpClient;

impl SmtpClient for DummySmtpClient {
    fn send(&self, _message: &str, _subject: &str, _recipient: &str) -> Result<bool, SmtpError> {
        panic!("DummySmtpClient::send invoked: this scenario needs a real collaborator")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::EmailService;

    #[test]
    fn test_notify_uses_only_own_logic() {
        let service = EmailService::new(DummySmtpClient);

        let notice = service.notify("Hola Mundo");

        assert_eq!(notice, "Notifying: Hola Mundo");
    }

    #[test]
    #[should_panic(expected = "needs a real collaborator")]
    fn test_wrong_scenario_reaches_dummy() {
        let service = EmailService::new(DummySmtpClient);

        // send_email needs the client, so a dummy is the wrong double here.
        let _ = service.send_email("Hola", "Saludo", "test@example.com");
    }
}
