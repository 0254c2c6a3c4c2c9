// Pattern 3: Stub
// Canned answers, whatever the input. Controls the indirect input of the subject.

use crate::collaborators::SmtpClient;
use crate::error::SmtpError;

// ============================================================================
// Example: Stub SMTP client
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StubSmtpClient {
    outcome: bool,
}

impl StubSmtpClient {
    pub fn new(outcome: bool) -> Self {
        StubSmtpClient { outcome }
    }

    /// Always reports delivery.
    pub fn succeeding() -> Self {
        Self::new(true)
    }

    /// Always reports a transport failure.
    pub fn failing() -> Self {
        Self::new(false)
    }

    pub fn outcome(&self) -> bool {
        self.outcome
    }
}

impl SmtpClient for StubSmtpClient {
    fn send(&self, _message: &str, _subject: &str, _recipient: &str) -> Result<bool, SmtpError> {
        Ok(self.outcome)
    }
}
