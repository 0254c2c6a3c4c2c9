// Pattern 3: Stub
// The stub decides what the SMTP client "returns"; the test checks the service.

use colored::Colorize;
use std::error::Error;
use test_doubles::{logging, EmailService, StubSmtpClient};

fn main() -> Result<(), Box<dyn Error>> {
    logging::init("info");

    println!("{}", "Stub Demo:".bold());

    let service = EmailService::new(StubSmtpClient::succeeding());
    let sent = service.send_email("Hola", "Saludo", "test@example.com")?;
    assert!(sent);
    println!("{} succeeding stub -> sent = {}", "ok".green(), sent);

    let service = EmailService::new(StubSmtpClient::failing());
    let sent = service.send_email("Hola", "Saludo", "test@example.com")?;
    assert!(!sent);
    println!("{} failing stub -> sent = {}", "ok".green(), sent);

    Ok(())
}
