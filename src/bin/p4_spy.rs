// Pattern 4: Spy
// Run the service first, then ask the spy what happened.

use colored::Colorize;
use std::error::Error;
use test_doubles::{logging, EmailService, SentMessage, SpySmtpClient};

fn main() -> Result<(), Box<dyn Error>> {
    logging::init("info");

    println!("{}", "Spy Demo:".bold());

    let spy = SpySmtpClient::new();
    let service = EmailService::new(&spy);

    service.send_email("Hola", "Saludo", "test@example.com")?;

    assert!(spy.was_called());
    assert_eq!(
        spy.last_message(),
        Some(SentMessage::new("Hola", "Saludo", "test@example.com"))
    );
    println!(
        "{} captured {}",
        "ok".green(),
        serde_json::to_string(&spy.calls())?
    );

    Ok(())
}
