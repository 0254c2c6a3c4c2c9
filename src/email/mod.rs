// Email subjects: the small service the doubles stand behind, and the validated
// request workflow built on top of a sender trait.

pub mod dispatcher;
pub mod request;
pub mod sender;
pub mod service;

pub use dispatcher::{DispatchResponse, DispatchStatus, EmailDispatcher, HealthStatus};
pub use request::EmailRequest;
pub use sender::{EmailSender, ValidatingEmailSender};
pub use service::EmailService;
