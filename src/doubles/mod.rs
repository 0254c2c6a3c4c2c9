// Test doubles, one module per category.

pub mod dummy;
pub mod fake;
pub mod mock;
pub mod spy;
pub mod stub;

pub use dummy::DummySmtpClient;
pub use fake::InMemoryUserRepo;
pub use mock::{MockSmtpClient, MockState};
pub use spy::{SentMessage, SpySmtpClient};
pub use stub::StubSmtpClient;
