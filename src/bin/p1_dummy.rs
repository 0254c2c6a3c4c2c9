// Pattern 1: Dummy
// The service needs an SMTP client to be constructed, but notify() never uses it.

use colored::Colorize;
use test_doubles::{logging, DummySmtpClient, EmailService};

fn main() {
    logging::init("info");

    println!("{}", "Dummy Demo:".bold());

    let service = EmailService::new(DummySmtpClient);
    let notice = service.notify("Hola Mundo");

    assert_eq!(notice, "Notifying: Hola Mundo");
    println!("{} {}", "ok".green(), notice);
}
