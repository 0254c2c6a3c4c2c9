// Pattern 5: Mock
// The expectation is set up front and checked inside the call.

use colored::Colorize;
use std::error::Error;
use test_doubles::{logging, EmailService, MockSmtpClient, SmtpClient};

fn main() -> Result<(), Box<dyn Error>> {
    logging::init("info");

    println!("{}", "Mock Demo:".bold());

    let mock = MockSmtpClient::new();
    mock.expect_send("Hola", "Saludo", "test@example.com");

    let service = EmailService::new(&mock);
    service.send_email("Hola", "Saludo", "test@example.com")?;
    mock.verify()?;
    println!("{} matching call accepted", "ok".green());

    // Any argument that differs fails right away.
    let strict = MockSmtpClient::new();
    strict.expect_send("Hola", "Saludo", "test@example.com");
    match strict.send("Hola2", "Saludo", "test@example.com") {
        Err(err) => println!("{} mismatch rejected: {}", "ok".green(), err),
        Ok(_) => return Err("mock accepted a mismatching call".into()),
    }

    Ok(())
}
