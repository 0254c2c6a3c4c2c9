use crate::collaborators::SmtpClient;
use crate::error::SmtpError;
use tracing::{debug, info};

/// Subject under test for the SMTP doubles. Holds exactly one client, injected at
/// construction.
#[derive(Debug)]
pub struct EmailService<C: SmtpClient> {
    client: C,
}

impl<C: SmtpClient> EmailService<C> {
    pub fn new(client: C) -> Self {
        EmailService { client }
    }

    /// Builds and logs a notification. Never touches the client.
    pub fn notify(&self, message: &str) -> String {
        let notice = format!("Notifying: {}", message);
        info!("{}", notice);
        notice
    }

    /// Hands the arguments to the client unchanged.
    pub fn send_email(
        &self,
        message: &str,
        subject: &str,
        recipient: &str,
    ) -> Result<bool, SmtpError> {
        debug!(subject, recipient, "sending email");
        self.client.send(message, subject, recipient)
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn into_client(self) -> C {
        self.client
    }
}
