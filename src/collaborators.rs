// Collaborator traits. Subjects depend on these, never on a concrete client,
// so every double below is one implementation of the same narrow interface.

use crate::error::SmtpError;
use serde_json::Value;

/// Opaque user payload stored by a repository, e.g. `{"name": "Alice"}`.
pub type UserData = Value;

pub trait SmtpClient {
    /// Returns `Ok(true)` when the message was delivered and `Ok(false)` when the
    /// transport reported a failure.
    fn send(&self, message: &str, subject: &str, recipient: &str) -> Result<bool, SmtpError>;
}

impl<C: SmtpClient + ?Sized> SmtpClient for &C {
    fn send(&self, message: &str, subject: &str, recipient: &str) -> Result<bool, SmtpError> {
        (**self).send(message, subject, recipient)
    }
}

pub trait UserRepository {
    fn add(&mut self, id: &str, data: UserData);
    fn get(&self, id: &str) -> Option<UserData>;
    fn delete(&mut self, id: &str);
}

impl<R: UserRepository + ?Sized> UserRepository for &mut R {
    fn add(&mut self, id: &str, data: UserData) {
        (**self).add(id, data)
    }

    fn get(&self, id: &str) -> Option<UserData> {
        (**self).get(id)
    }

    fn delete(&mut self, id: &str) {
        (**self).delete(id)
    }
}
