// Pattern 5: Mock
// Pre-programmed with the call it expects and checks every invocation on the spot.
// A wrong argument fails the call itself, not a later assertion.

use crate::collaborators::SmtpClient;
use crate::doubles::spy::SentMessage;
use crate::error::{ContractViolation, SmtpError};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::warn;

const SEND: &str = "send";

// ============================================================================
// Example: Mock SMTP client
// ============================================================================

/// Lifecycle of a mock expectation.
///
/// `Unconfigured -> ExpectationSet -> Verified` on the happy path; any mismatching
/// call moves to `Failed`, which is terminal until `expect_send` re-arms the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockState {
    Unconfigured,
    ExpectationSet(SentMessage),
    Verified { expected: SentMessage, calls: usize },
    Failed {
        violation: ContractViolation,
        calls: usize,
    },
}

#[derive(Debug)]
pub struct MockSmtpClient {
    state: Mutex<MockState>,
}

impl MockSmtpClient {
    pub fn new() -> Self {
        MockSmtpClient {
            state: Mutex::new(MockState::Unconfigured),
        }
    }

    /// Records the call the subject is expected to make. Replaces any previous
    /// expectation.
    pub fn expect_send(&self, message: &str, subject: &str, recipient: &str) -> &Self {
        *self.lock() = MockState::ExpectationSet(SentMessage::new(message, subject, recipient));
        self
    }

    pub fn state(&self) -> MockState {
        self.lock().clone()
    }

    pub fn was_called(&self) -> bool {
        self.call_count() > 0
    }

    /// Number of calls that matched the expectation, kept after a later failure.
    pub fn call_count(&self) -> usize {
        match &*self.lock() {
            MockState::Verified { calls, .. } | MockState::Failed { calls, .. } => *calls,
            MockState::Unconfigured | MockState::ExpectationSet(_) => 0,
        }
    }

    /// Succeeds only once a matching call has happened.
    pub fn verify(&self) -> Result<(), ContractViolation> {
        match &*self.lock() {
            MockState::Verified { .. } => Ok(()),
            MockState::Unconfigured => Err(ContractViolation::NoExpectation { operation: SEND }),
            MockState::ExpectationSet(_) => Err(ContractViolation::NotCalled { operation: SEND }),
            MockState::Failed { violation, .. } => Err(violation.clone()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MockSmtpClient {
    fn default() -> Self {
        Self::new()
    }
}

fn check_arguments(expected: &SentMessage, actual: &SentMessage) -> Result<(), ContractViolation> {
    let fields = [
        ("message", &expected.message, &actual.message),
        ("subject", &expected.subject, &actual.subject),
        ("recipient", &expected.recipient, &actual.recipient),
    ];

    for (argument, want, got) in fields {
        if want != got {
            return Err(ContractViolation::mismatch(argument, want.as_str(), got.as_str()));
        }
    }
    Ok(())
}

impl SmtpClient for MockSmtpClient {
    fn send(&self, message: &str, subject: &str, recipient: &str) -> Result<bool, SmtpError> {
        let actual = SentMessage::new(message, subject, recipient);
        let mut state = self.lock();

        let outcome = match &*state {
            MockState::Unconfigured => Err(ContractViolation::NoExpectation { operation: SEND }),
            MockState::Failed { .. } => Err(ContractViolation::AlreadyFailed { operation: SEND }),
            MockState::ExpectationSet(expected) => {
                check_arguments(expected, &actual).map(|()| (expected.clone(), 1))
            }
            MockState::Verified { expected, calls } => {
                check_arguments(expected, &actual).map(|()| (expected.clone(), calls + 1))
            }
        };

        match outcome {
            Ok((expected, calls)) => {
                *state = MockState::Verified { expected, calls };
                Ok(true)
            }
            Err(violation) => {
                warn!(%violation, "mock expectation violated");
                let calls = match &*state {
                    MockState::Verified { calls, .. } => Some(*calls),
                    MockState::Failed { .. } => None,
                    MockState::Unconfigured | MockState::ExpectationSet(_) => Some(0),
                };
                if let Some(calls) = calls {
                    *state = MockState::Failed {
                        violation: violation.clone(),
                        calls,
                    };
                }
                Err(violation.into())
            }
        }
    }
}
