use crate::config::SenderConfig;
use crate::email::request::EmailRequest;
use crate::error::EmailError;
use tracing::{info, warn};

/// Request-level email capability used by `EmailDispatcher`.
pub trait EmailSender {
    /// `Ok(false)` means the request was valid but delivery failed.
    fn send_email(&self, request: &EmailRequest) -> Result<bool, EmailError>;

    fn can_send_to(&self, email: &str) -> bool;
}

impl<S: EmailSender + ?Sized> EmailSender for &S {
    fn send_email(&self, request: &EmailRequest) -> Result<bool, EmailError> {
        (**self).send_email(request)
    }

    fn can_send_to(&self, email: &str) -> bool {
        (**self).can_send_to(email)
    }
}

/// Simulated production sender: validates the request and fakes delivery using the
/// markers from `SenderConfig`.
#[derive(Debug, Clone, Default)]
pub struct ValidatingEmailSender {
    config: SenderConfig,
}

impl ValidatingEmailSender {
    pub fn new() -> Self {
        Self::with_config(SenderConfig::default())
    }

    pub fn with_config(config: SenderConfig) -> Self {
        ValidatingEmailSender { config }
    }

    pub fn config(&self) -> &SenderConfig {
        &self.config
    }

    /// Sender address that `send_email` would use for this request.
    pub fn resolve_sender<'a>(&'a self, request: &'a EmailRequest) -> &'a str {
        request.sender_or(&self.config.default_from)
    }
}

impl EmailSender for ValidatingEmailSender {
    fn send_email(&self, request: &EmailRequest) -> Result<bool, EmailError> {
        request.validate()?;

        let from = self.resolve_sender(request);
        info!(from, to = %request.to, subject = %request.subject, "sending email");

        if request.to.contains(&self.config.failure_marker) {
            warn!(to = %request.to, "simulated delivery failure");
            return Ok(false);
        }

        info!("email sent");
        Ok(true)
    }

    fn can_send_to(&self, email: &str) -> bool {
        !email.trim().is_empty() && !email.contains(&self.config.blocked_marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sender() -> ValidatingEmailSender {
        ValidatingEmailSender::new()
    }

    #[test]
    fn test_sends_valid_request() {
        let request = EmailRequest::new("test@example.com", "Asunto", "Cuerpo");
        assert_eq!(sender().send_email(&request), Ok(true));
    }

    #[test]
    fn test_invalid_request_is_rejected() {
        let request = EmailRequest::new("not-an-address", "Asunto", "Cuerpo");

        let result = sender().send_email(&request);

        assert!(matches!(result, Err(EmailError::InvalidRequest(_))));
    }

    #[test]
    fn test_failure_marker_reports_false() {
        let request = EmailRequest::new("error@example.com", "Asunto", "Cuerpo");
        assert_eq!(sender().send_email(&request), Ok(false));
    }

    #[test]
    fn test_default_sender() {
        let sender = sender();
        let request = EmailRequest::new("test@example.com", "Asunto", "Cuerpo");

        assert_eq!(sender.resolve_sender(&request), "noreply@university.edu");

        let custom = request.with_from("custom@example.com");
        assert_eq!(sender.resolve_sender(&custom), "custom@example.com");
    }

    #[test]
    fn test_can_send_to() {
        let sender = sender();

        assert!(sender.can_send_to("test@example.com"));
        assert!(sender.can_send_to("user@domain.org"));
        assert!(!sender.can_send_to(""));
        assert!(!sender.can_send_to("   "));
        assert!(!sender.can_send_to("blocked@example.com"));
        assert!(!sender.can_send_to("user.blocked@example.com"));
    }

    #[test]
    fn test_default_config() {
        let sender = sender();

        assert_eq!(sender.config(), &SenderConfig::default());
        assert_eq!(sender.config().failure_marker, "error@");
    }

    #[test]
    fn test_configured_markers() {
        let sender = ValidatingEmailSender::with_config(SenderConfig {
            default_from: "team@example.com".to_string(),
            blocked_marker: "spam".to_string(),
            failure_marker: "bounce@".to_string(),
        });

        assert!(sender.can_send_to("blocked@example.com"));
        assert!(!sender.can_send_to("spam@example.com"));

        let bounce = EmailRequest::new("bounce@example.com", "s", "b");
        assert_eq!(sender.send_email(&bounce), Ok(false));
        assert_eq!(sender.resolve_sender(&bounce), "team@example.com");
    }
}
