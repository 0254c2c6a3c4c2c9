// Pattern 2: Fake
// A working, simplified repository: real storage logic, no database behind it.

use crate::collaborators::{UserData, UserRepository};
use std::collections::HashMap;
use tracing::debug;

// ============================================================================
// Example: In-memory user repository
// ============================================================================

/// Map-backed `UserRepository`. Each instance owns its own store, so tests never
/// share state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepo {
    users: HashMap<String, UserData>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        InMemoryUserRepo {
            users: HashMap::new(),
        }
    }

    /// Seeds an entry before the repository is handed to a subject.
    pub fn with_user(mut self, id: &str, data: UserData) -> Self {
        self.users.insert(id.to_string(), data);
        self
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.users.contains_key(id)
    }
}

impl UserRepository for InMemoryUserRepo {
    // Last write wins.
    fn add(&mut self, id: &str, data: UserData) {
        debug!(id, "storing user");
        self.users.insert(id.to_string(), data);
    }

    fn get(&self, id: &str) -> Option<UserData> {
        self.users.get(id).cloned()
    }

    fn delete(&mut self, id: &str) {
        if self.users.remove(id).is_none() {
            debug!(id, "delete of unknown user ignored");
        }
    }
}
