use crate::collaborators::{UserData, UserRepository};
use serde_json::json;
use tracing::info;

/// Subject under test for the repository doubles.
pub struct UserDirectory<R: UserRepository> {
    repository: R,
}

impl<R: UserRepository> UserDirectory<R> {
    pub fn new(repository: R) -> Self {
        UserDirectory { repository }
    }

    /// Stores `{"name": name}` under `id`, replacing any previous record.
    pub fn register(&mut self, id: &str, name: &str) {
        info!(id, name, "registering user");
        self.repository.add(id, json!({ "name": name }));
    }

    pub fn profile(&self, id: &str) -> Option<UserData> {
        self.repository.get(id)
    }

    pub fn display_name(&self, id: &str) -> Option<String> {
        self.repository
            .get(id)?
            .get("name")?
            .as_str()
            .map(str::to_string)
    }

    pub fn deregister(&mut self, id: &str) {
        self.repository.delete(id);
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}
