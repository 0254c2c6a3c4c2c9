// Pattern 6: Doubles behind a validated email workflow
// Usage: p6_email_dispatch [config.toml]

use colored::Colorize;
use std::env;
use std::error::Error;
use test_doubles::{
    logging, AppConfig, DispatchResponse, EmailDispatcher, EmailRequest, ValidatingEmailSender,
};

fn print_response(label: &str, response: &DispatchResponse) -> Result<(), Box<dyn Error>> {
    let code = response.status.code().to_string();
    let code = if response.success { code.green() } else { code.red() };
    println!("{:<10} {} {}", label, code, serde_json::to_string(response)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = match env::args().nth(1) {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    logging::init(&config.log_filter);

    println!("{}", "Email Dispatch Demo:".bold());

    let dispatcher = EmailDispatcher::new(ValidatingEmailSender::with_config(config.sender));

    let requests = [
        ("sent", EmailRequest::new("test@example.com", "Saludo", "Hola")),
        ("blocked", EmailRequest::new("blocked@example.com", "Saludo", "Hola")),
        ("failing", EmailRequest::new("error@example.com", "Saludo", "Hola")),
        ("invalid", EmailRequest::new("test@example.com", "", "Hola")),
    ];

    for (label, request) in &requests {
        print_response(label, &dispatcher.dispatch(request))?;
    }

    let health = dispatcher.health();
    println!("{:<10} {}", "health", serde_json::to_string(&health)?);

    Ok(())
}
