// Front end of the email workflow: turns an EmailRequest into a response the caller
// can render. Depends on EmailSender only, so every branch is reachable with doubles.

use crate::email::request::EmailRequest;
use crate::email::sender::EmailSender;
use crate::error::EmailError;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchStatus {
    Ok,
    BadRequest,
    InternalError,
}

impl DispatchStatus {
    /// Matching HTTP status code.
    pub fn code(self) -> u16 {
        match self {
            DispatchStatus::Ok => 200,
            DispatchStatus::BadRequest => 400,
            DispatchStatus::InternalError => 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchResponse {
    pub status: DispatchStatus,
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl DispatchResponse {
    fn failure(status: DispatchStatus, message: impl Into<String>) -> Self {
        DispatchResponse {
            status,
            success: false,
            message: message.into(),
            to: None,
            subject: None,
        }
    }

    fn sent(request: &EmailRequest) -> Self {
        DispatchResponse {
            status: DispatchStatus::Ok,
            success: true,
            message: "email sent successfully".to_string(),
            to: Some(request.to.clone()),
            subject: Some(request.subject.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

pub struct EmailDispatcher<S: EmailSender> {
    sender: S,
}

impl<S: EmailSender> EmailDispatcher<S> {
    pub fn new(sender: S) -> Self {
        EmailDispatcher { sender }
    }

    pub fn dispatch(&self, request: &EmailRequest) -> DispatchResponse {
        if !self.sender.can_send_to(&request.to) {
            warn!(to = %request.to, "recipient rejected");
            return DispatchResponse::failure(
                DispatchStatus::BadRequest,
                "cannot send email to this recipient",
            );
        }

        match self.sender.send_email(request) {
            Ok(true) => {
                info!(to = %request.to, "dispatch succeeded");
                DispatchResponse::sent(request)
            }
            Ok(false) => {
                DispatchResponse::failure(DispatchStatus::InternalError, "failed to send email")
            }
            Err(EmailError::InvalidRequest(reason)) => {
                DispatchResponse::failure(DispatchStatus::BadRequest, reason)
            }
            Err(err) => {
                warn!(error = %err, "dispatch failed");
                DispatchResponse::failure(
                    DispatchStatus::InternalError,
                    format!("unexpected error: {}", err),
                )
            }
        }
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "OK".to_string(),
            service: "Email API".to_string(),
        }
    }

    pub fn sender(&self) -> &S {
        &self.sender
    }
}
