// Pattern 2: Fake
// A real, simplified repository that lives in memory.

use colored::Colorize;
use serde_json::json;
use test_doubles::{logging, InMemoryUserRepo, UserDirectory, UserRepository};

fn main() {
    logging::init("info");

    println!("{}", "Fake Demo:".bold());

    let mut repo = InMemoryUserRepo::new();
    repo.add("1", json!({"name": "Alice"}));
    repo.delete("2"); // never added: silently ignored
    repo.add("1", json!({"name": "Alice"}));

    assert_eq!(repo.get("1"), Some(json!({"name": "Alice"})));
    println!("{} user 1 = {}", "ok".green(), json!(repo.get("1")));

    // The same fake behind a subject
    let mut directory = UserDirectory::new(repo);
    directory.register("2", "Bob");
    directory.deregister("1");

    assert_eq!(directory.display_name("1"), None);
    assert_eq!(directory.display_name("2").as_deref(), Some("Bob"));
    println!(
        "{} directory holds {} user(s)",
        "ok".green(),
        directory.repository().len()
    );
}
