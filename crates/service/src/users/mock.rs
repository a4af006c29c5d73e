use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use common::Problem;
use models::User;

use super::UserService;

/// Username every mock strategy pre-seeds for deterministic demos.
pub const DEMO_USER: &str = "demo@example.net";

const INSTANCE: &str = "mock-users";

/// In-memory user service seeded with the demo user.
///
/// Problem shapes match the store-backed strategy exactly, so tests
/// written against this mock hold for the real thing.
pub struct MockUserService {
    users: Mutex<HashMap<String, User>>,
}

impl MockUserService {
    pub fn new() -> Self {
        let mut users = HashMap::new();
        users.insert(
            DEMO_USER.to_string(),
            User {
                username: DEMO_USER.to_string(),
                display_name: "Demo User".to_string(),
                profile_image: String::new(),
            },
        );
        Self {
            users: Mutex::new(users),
        }
    }
}

impl Default for MockUserService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserService for MockUserService {
    async fn add_user(&self, user: User) -> Result<(), Problem> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(&user.username) {
            let detail = format!("{} already registered", user.username);
            return Err(Problem::new("err://user-exists", &detail, 400, &detail, INSTANCE));
        }
        users.insert(user.username.clone(), user);
        Ok(())
    }

    async fn get_user(&self, username: &str) -> Result<User, Problem> {
        let users = self.users.lock().unwrap();
        users.get(username).cloned().ok_or_else(|| {
            Problem::new(
                "err://not-found",
                "No data returned",
                404,
                &format!("Username: '{username}' not found"),
                INSTANCE,
            )
        })
    }
}
