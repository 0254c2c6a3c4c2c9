// Test Double Patterns Library
// One module per double category, plus the subjects they stand in for.

pub mod collaborators;
pub mod config;
pub mod doubles;
pub mod email;
pub mod error;
pub mod logging;
pub mod users;

// Pattern 1: Dummy
// See doubles/dummy.rs and bin/p1_dummy.rs:
// - Satisfying a trait bound with an object that is never used
//
// Pattern 2: Fake
// See doubles/fake.rs and bin/p2_fake.rs:
// - In-memory repository with real add/get/delete logic
//
// Pattern 3: Stub
// See doubles/stub.rs and bin/p3_stub.rs:
// - Canned responses that control indirect input
//
// Pattern 4: Spy
// See doubles/spy.rs and bin/p4_spy.rs:
// - Recording calls for assertions after the fact
//
// Pattern 5: Mock
// See doubles/mock.rs and bin/p5_mock.rs:
// - Expectations verified at call time
//
// Pattern 6: Doubles in a validated workflow
// See email/ and bin/p6_email_dispatch.rs

pub use collaborators::{SmtpClient, UserData, UserRepository};
pub use config::{AppConfig, SenderConfig};
pub use doubles::{
    DummySmtpClient, InMemoryUserRepo, MockSmtpClient, MockState, SentMessage, SpySmtpClient,
    StubSmtpClient,
};
pub use email::{
    DispatchResponse, DispatchStatus, EmailDispatcher, EmailRequest, EmailSender, EmailService,
    HealthStatus, ValidatingEmailSender,
};
pub use error::{ConfigError, ContractViolation, EmailError, SmtpError};
pub use users::UserDirectory;
